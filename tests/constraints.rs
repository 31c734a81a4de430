//! Constraint enforcement across insert and update paths

use tinyrel::{Column, Database, DataType, Error, Row, Value};

fn users_db() -> Database {
    let mut db = Database::new("testdb");
    db.create_table(
        "users",
        vec![
            Column::new("id", DataType::Integer).primary_key(),
            Column::new("name", DataType::Text).not_null(),
            Column::new("email", DataType::Text).unique(),
        ],
    )
    .unwrap();
    db
}

fn user(id: i64, name: &str, email: &str) -> Row {
    Row::new(vec![
        Value::Integer(id),
        Value::Text(name.into()),
        Value::Text(email.into()),
    ])
}

#[test]
fn duplicate_primary_key_rejected() {
    let mut db = users_db();
    db.insert("users", user(1, "Alice", "a@x.com")).unwrap();

    let result = db.insert("users", user(1, "Bob", "b@x.com"));
    assert!(matches!(result, Err(Error::UniqueViolation(c)) if c == "id"));

    // The failed insert left nothing behind.
    assert_eq!(db.table("users").unwrap().row_count(), 1);
}

#[test]
fn duplicate_unique_email_rejected() {
    let mut db = users_db();
    db.insert("users", user(1, "Alice", "a@x.com")).unwrap();

    let result = db.insert("users", user(2, "Carl", "a@x.com"));
    assert!(matches!(result, Err(Error::UniqueViolation(c)) if c == "email"));
    assert_eq!(db.table("users").unwrap().row_count(), 1);
}

#[test]
fn null_in_not_null_column_rejected() {
    let mut db = users_db();

    let result = db.insert(
        "users",
        Row::new(vec![
            Value::Integer(3),
            Value::Null,
            Value::Text("c@x.com".into()),
        ]),
    );
    assert!(matches!(result, Err(Error::NullNotAllowed(c)) if c == "name"));
    assert_eq!(db.table("users").unwrap().row_count(), 0);
}

#[test]
fn failed_insert_leaves_indexes_clean() {
    let mut db = users_db();
    db.insert("users", user(1, "Alice", "a@x.com")).unwrap();
    db.insert("users", user(1, "Bob", "b@x.com")).unwrap_err();

    // b@x.com was never indexed by the failed insert.
    db.insert("users", user(2, "Bob", "b@x.com")).unwrap();
    assert_eq!(db.table("users").unwrap().row_count(), 2);
}

#[test]
fn type_mismatch_rejected() {
    let mut db = users_db();

    let result = db.insert(
        "users",
        Row::new(vec![
            Value::Text("not-an-id".into()),
            Value::Text("Alice".into()),
            Value::Null,
        ]),
    );
    assert!(matches!(
        result,
        Err(Error::TypeMismatch { column, .. }) if column == "id"
    ));
}

#[test]
fn column_count_mismatch_rejected() {
    let mut db = users_db();

    let result = db.insert("users", Row::new(vec![Value::Integer(1)]));
    assert!(matches!(
        result,
        Err(Error::ColumnCountMismatch {
            expected: 3,
            got: 1
        })
    ));
}

#[test]
fn uniqueness_holds_over_mixed_operations() {
    let mut db = users_db();
    db.insert("users", user(1, "Alice", "a@x.com")).unwrap();
    db.insert("users", user(2, "Bob", "b@x.com")).unwrap();

    // Updating Bob onto Alice's email must fail...
    let result = db.update(
        "users",
        Some(&tinyrel::Predicate::compare(
            "id",
            tinyrel::CompareOp::Eq,
            2i64,
        )),
        &[("email".to_string(), Value::Text("a@x.com".into()))],
    );
    assert!(matches!(result, Err(Error::UniqueViolation(c)) if c == "email"));

    // ...and after deleting Alice, the same update succeeds.
    db.delete_by_primary_key("users", &Value::Integer(1)).unwrap();
    let updated = db
        .update(
            "users",
            Some(&tinyrel::Predicate::compare(
                "id",
                tinyrel::CompareOp::Eq,
                2i64,
            )),
            &[("email".to_string(), Value::Text("a@x.com".into()))],
        )
        .unwrap();
    assert_eq!(updated, 1);
}
