//! Select, update, and delete scenarios

use tinyrel::{Column, CompareOp, Database, DataType, Predicate, Row, Value};

fn sample_db() -> Database {
    let mut db = Database::new("testdb");
    db.create_table(
        "users",
        vec![
            Column::new("id", DataType::Integer).primary_key(),
            Column::new("name", DataType::Text).not_null(),
            Column::new("email", DataType::Text).unique(),
            Column::new("age", DataType::Integer),
            Column::new("active", DataType::Boolean),
        ],
    )
    .unwrap();

    let rows = [
        (1, "Alice", "alice@example.com", 30, true),
        (2, "Bob", "bob@example.com", 25, true),
        (3, "Charlie", "charlie@example.com", 35, false),
        (4, "Diana", "diana@example.com", 28, true),
        (5, "Eve", "eve@example.com", 22, false),
    ];
    for (id, name, email, age, active) in rows {
        db.insert(
            "users",
            Row::new(vec![
                Value::Integer(id),
                Value::Text(name.into()),
                Value::Text(email.into()),
                Value::Integer(age),
                Value::Boolean(active),
            ]),
        )
        .unwrap();
    }
    db
}

fn names(result: &tinyrel::QueryResult) -> Vec<String> {
    let pos = result.columns.iter().position(|c| c == "name").unwrap();
    result
        .rows
        .iter()
        .map(|r| r.values()[pos].to_string())
        .collect()
}

#[test]
fn select_all_preserves_insert_order() {
    let db = sample_db();
    let result = db.select("users", None, None).unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(
        names(&result),
        vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]
    );
}

#[test]
fn select_with_compound_predicate() {
    let mut db = Database::new("testdb");
    db.create_table(
        "t",
        vec![
            Column::new("id", DataType::Integer).primary_key(),
            Column::new("v", DataType::Integer),
        ],
    )
    .unwrap();
    for (id, v) in [(1, 10), (2, 20), (3, 30)] {
        db.insert("t", Row::new(vec![Value::Integer(id), Value::Integer(v)]))
            .unwrap();
    }

    let between = Predicate::compare("v", CompareOp::Gt, 15i64)
        .and(Predicate::compare("v", CompareOp::Lt, 30i64));
    let result = db.select("t", None, Some(&between)).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        result.rows[0].values(),
        &[Value::Integer(2), Value::Integer(20)]
    );
}

#[test]
fn select_with_or_predicate() {
    let db = sample_db();

    let edges = Predicate::compare("age", CompareOp::Lt, 25i64)
        .or(Predicate::compare("age", CompareOp::Gt, 32i64));
    let result = db.select("users", None, Some(&edges)).unwrap();

    assert_eq!(names(&result), vec!["Charlie", "Eve"]);
}

#[test]
fn select_on_boolean_column() {
    let db = sample_db();

    let active = Predicate::compare("active", CompareOp::Eq, true);
    let result = db.select("users", None, Some(&active)).unwrap();
    assert_eq!(names(&result), vec!["Alice", "Bob", "Diana"]);
}

#[test]
fn select_with_projection() {
    let db = sample_db();

    let young = Predicate::compare("age", CompareOp::Lt, 30i64);
    let result = db
        .select("users", Some(&["name", "email"]), Some(&young))
        .unwrap();

    assert_eq!(result.columns, vec!["name", "email"]);
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.rows[0].values().len(), 2);
}

#[test]
fn select_star_keeps_all_columns() {
    let db = sample_db();
    let result = db.select("users", Some(&["*"]), None).unwrap();
    assert_eq!(result.columns.len(), 5);
}

#[test]
fn update_single_and_multiple_columns() {
    let mut db = sample_db();

    let bob = Predicate::compare("id", CompareOp::Eq, 2i64);
    let count = db
        .update("users", Some(&bob), &[("age".to_string(), Value::Integer(26))])
        .unwrap();
    assert_eq!(count, 1);
    let row = db.row_by_primary_key("users", &Value::Integer(2)).unwrap();
    assert_eq!(row.values()[3], Value::Integer(26));

    let charlie = Predicate::compare("id", CompareOp::Eq, 3i64);
    let count = db
        .update(
            "users",
            Some(&charlie),
            &[
                ("name".to_string(), Value::Text("Charles".into())),
                ("age".to_string(), Value::Integer(36)),
            ],
        )
        .unwrap();
    assert_eq!(count, 1);
    let row = db.row_by_primary_key("users", &Value::Integer(3)).unwrap();
    assert_eq!(row.values()[1], Value::Text("Charles".into()));
    assert_eq!(row.values()[3], Value::Integer(36));
}

#[test]
fn update_multiple_rows() {
    let mut db = sample_db();

    let young = Predicate::compare("age", CompareOp::Lt, 30i64);
    let count = db
        .update(
            "users",
            Some(&young),
            &[("active".to_string(), Value::Boolean(false))],
        )
        .unwrap();
    assert_eq!(count, 3);

    let still_active = Predicate::compare("active", CompareOp::Eq, true);
    let result = db.select("users", None, Some(&still_active)).unwrap();
    assert_eq!(names(&result), vec!["Alice"]);
}

#[test]
fn update_matching_nothing_changes_nothing() {
    let mut db = sample_db();
    let none = Predicate::compare("id", CompareOp::Eq, 999i64);
    let count = db
        .update("users", Some(&none), &[("age".to_string(), Value::Integer(100))])
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn delete_by_predicate() {
    let mut db = sample_db();

    let young = Predicate::compare("age", CompareOp::Lt, 25i64);
    assert_eq!(db.delete("users", Some(&young)).unwrap(), 1);
    assert_eq!(db.table("users").unwrap().row_count(), 4);

    let older = Predicate::compare("age", CompareOp::Gte, 28i64);
    assert_eq!(db.delete("users", Some(&older)).unwrap(), 3);
    assert_eq!(names(&db.select("users", None, None).unwrap()), vec!["Bob"]);
}

#[test]
fn delete_matching_nothing_is_a_no_op() {
    let mut db = sample_db();

    let none = Predicate::compare("age", CompareOp::Gt, 200i64);
    assert_eq!(db.delete("users", Some(&none)).unwrap(), 0);
    assert_eq!(db.table("users").unwrap().row_count(), 5);

    // Indexes are untouched: point lookups still resolve every row.
    for id in 1..=5i64 {
        db.row_by_primary_key("users", &Value::Integer(id)).unwrap();
    }
}

#[test]
fn deleted_unique_value_can_be_reinserted() {
    let mut db = sample_db();

    db.delete_by_primary_key("users", &Value::Integer(3)).unwrap();
    db.insert(
        "users",
        Row::new(vec![
            Value::Integer(10),
            Value::Text("New Charlie".into()),
            Value::Text("charlie@example.com".into()),
            Value::Integer(40),
            Value::Boolean(true),
        ]),
    )
    .unwrap();

    let row = db.row_by_primary_key("users", &Value::Integer(10)).unwrap();
    assert_eq!(row.values()[2], Value::Text("charlie@example.com".into()));
}

#[test]
fn point_lookup_after_deletes_stays_coherent() {
    let mut db = sample_db();

    // Delete an early row so later rows shift physically.
    let alice = Predicate::compare("id", CompareOp::Eq, 1i64);
    db.delete("users", Some(&alice)).unwrap();

    // Every surviving row is still reachable through the index.
    for id in 2..=5i64 {
        let row = db.row_by_primary_key("users", &Value::Integer(id)).unwrap();
        assert_eq!(row.values()[0], Value::Integer(id));
    }
}
