use pginsert::{
    IdentRole, InsertError, InsertOptions, Record, Value, build_auto, build_auto_json,
    build_bulk_insert_json, build_insert_json,
};
use serde_json::json;

fn parameterized() -> InsertOptions {
    InsertOptions::new()
}

fn raw() -> InsertOptions {
    InsertOptions::new().raw()
}

#[test]
fn single_object_parameterized() {
    let stmt = build_insert_json(
        "users",
        &json!({"name": "Shubham", "age": 22, "admin": true}),
        &parameterized(),
    )
    .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age, admin) VALUES ($1, $2, $3);"
    );
    assert_eq!(
        serde_json::to_value(stmt.params().unwrap()).unwrap(),
        json!(["Shubham", 22, true])
    );
}

#[test]
fn single_object_raw() {
    let stmt = build_insert_json(
        "users",
        &json!({"name": "O'Brien", "age": 22, "admin": true}),
        &raw(),
    )
    .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age, admin) VALUES ('O''Brien', 22, TRUE);"
    );
    assert!(stmt.params().is_none());
}

#[test]
fn raw_null_handling() {
    let stmt = build_insert_json(
        "users",
        &json!({"name": null, "active": true}),
        &raw(),
    )
    .unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, active) VALUES (NULL, TRUE);"
    );
}

#[test]
fn nested_values_are_json_text() {
    let stmt = build_insert_json(
        "docs",
        &json!({"id": 1, "tags": ["a", "b"], "meta": {"k": "v"}}),
        &raw(),
    )
    .unwrap();
    assert_eq!(
        stmt.sql(),
        r#"INSERT INTO docs (id, tags, meta) VALUES (1, '["a","b"]', '{"k":"v"}');"#
    );
}

#[test]
fn bulk_array_parameterized() {
    let stmt = build_bulk_insert_json(
        "users",
        &json!([
            {"name": "A", "age": 20, "admin": false},
            {"name": "B", "age": 25, "admin": true},
        ]),
        &parameterized(),
    )
    .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age, admin) VALUES ($1, $2, $3), ($4, $5, $6);"
    );
    assert_eq!(
        serde_json::to_value(&stmt).unwrap(),
        json!({
            "sql": "INSERT INTO users (name, age, admin) VALUES ($1, $2, $3), ($4, $5, $6);",
            "params": ["A", 20, false, "B", 25, true],
        })
    );
}

#[test]
fn bulk_array_raw() {
    let stmt = build_bulk_insert_json(
        "users",
        &json!([
            {"name": "A", "age": 20, "admin": false},
            {"name": "B", "age": 25, "admin": true},
        ]),
        &raw(),
    )
    .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age, admin) VALUES ('A', 20, FALSE), ('B', 25, TRUE);"
    );
}

#[test]
fn auto_detects_object_and_array() {
    let one = build_auto_json("users", &json!({"name": "X", "age": 30}), &parameterized()).unwrap();
    assert_eq!(one.sql(), "INSERT INTO users (name, age) VALUES ($1, $2);");
    assert_eq!(
        one.params().unwrap(),
        &[Value::from("X"), Value::Int(30)][..]
    );

    let many = build_auto_json(
        "users",
        &json!([{"name": "Y", "age": 31}, {"name": "Z", "age": 32}]),
        &parameterized(),
    )
    .unwrap();
    assert_eq!(
        many.sql(),
        "INSERT INTO users (name, age) VALUES ($1, $2), ($3, $4);"
    );
    assert_eq!(many.param_count(), 4);
}

#[test]
fn invalid_table_name_mentions_table() {
    let err = build_insert_json("123users", &json!({"name": "X"}), &parameterized()).unwrap_err();
    assert_eq!(err.ident_role(), Some(IdentRole::Table));
    assert!(err.to_string().contains("table name \"123users\""));
}

#[test]
fn invalid_column_name_mentions_column() {
    let err = build_insert_json("users", &json!({"123name": "X"}), &parameterized()).unwrap_err();
    assert_eq!(err.ident_role(), Some(IdentRole::Column));
    assert!(err.to_string().contains("column name"));
}

#[test]
fn single_rejects_non_objects() {
    for bad in [json!(null), json!(42), json!("users"), json!(true)] {
        let err = build_insert_json("users", &bad, &parameterized()).unwrap_err();
        assert!(err.is_invalid_input(), "{bad}");
    }
    // An array handed to the single-record entry point is a shape error too.
    let err = build_insert_json("users", &json!([{"a": 1}]), &parameterized()).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn bulk_rejects_empty_and_non_arrays() {
    for bad in [json!([]), json!({"name": "A"}), json!(null)] {
        let err = build_bulk_insert_json("users", &bad, &parameterized()).unwrap_err();
        assert!(err.is_invalid_input(), "{bad}");
    }
}

#[test]
fn bulk_rejects_non_object_elements() {
    let err = build_bulk_insert_json("users", &json!([{"name": "A"}, 7]), &parameterized())
        .unwrap_err();
    assert_eq!(
        err,
        InsertError::InvalidInput("build_bulk_insert: element 1 is not an object".into())
    );
}

#[test]
fn table_is_validated_before_shape() {
    let err = build_bulk_insert_json("bad-table", &json!([]), &parameterized()).unwrap_err();
    assert!(err.is_invalid_identifier());
    let err = build_insert_json("bad-table", &json!(1), &parameterized()).unwrap_err();
    assert!(err.is_invalid_identifier());
}

#[test]
fn bulk_missing_keys_become_null() {
    let stmt = build_bulk_insert_json(
        "users",
        &json!([{"name": "A", "age": 1}, {"name": "B"}]),
        &raw(),
    )
    .unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age) VALUES ('A', 1), ('B', NULL);"
    );
}

#[test]
fn serde_structs_as_records() {
    #[derive(serde::Serialize)]
    struct User {
        name: String,
        age: u32,
        admin: bool,
    }

    let users = [
        User {
            name: "Charlie".into(),
            age: 30,
            admin: false,
        },
        User {
            name: "Daisy".into(),
            age: 27,
            admin: true,
        },
    ];
    let records = users
        .iter()
        .map(Record::from_serialize)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let stmt = build_auto("users", &records, &raw()).unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO users (name, age, admin) VALUES ('Charlie', 30, FALSE), ('Daisy', 27, TRUE);"
    );
}
