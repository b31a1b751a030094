//! End-to-end insert, update, and delete chains.

use sqlchain_core::{
    assign, cond, delete_from, insert_into, set_col, update, SqlValue, Statement, ValidationError,
};

#[test]
fn insert_round_trip() {
    let (sql, params) = insert_into("t")
        .unwrap()
        .columns(&["a", "b"])
        .unwrap()
        .values(vec![1, 2])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "insert into t(a, b) values(?, ?)");
    assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Int(2)]);
}

#[test]
fn insert_without_columns_still_parameterizes() {
    let (sql, params) = insert_into("logs")
        .unwrap()
        .values(vec!["boot", "ok"])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "insert into logs values(?, ?)");
    assert_eq!(params.len(), 2);
}

#[test]
fn update_mapping_binds_assignments_before_filters() {
    let (sql, params) = update("t")
        .unwrap()
        .set(&[set_col("x", 1), set_col("y", 2)])
        .unwrap()
        .and_where(&[cond("id", "=", 5)])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "update t set x = ?, y = ? where id = ?");
    assert_eq!(
        params,
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(5)]
    );
}

#[test]
fn update_triple_form_matches_mapping_form() {
    let (mapping_sql, mapping_params) = update("t")
        .unwrap()
        .set(&[set_col("x", 1)])
        .unwrap()
        .into_parts();
    let (triple_sql, triple_params) = update("t")
        .unwrap()
        .set(&[assign("x", "=", 1)])
        .unwrap()
        .into_parts();

    assert_eq!(mapping_sql, triple_sql);
    assert_eq!(mapping_params, triple_params);
}

#[test]
fn update_rejects_non_equality_operator() {
    assert_eq!(
        update("t").unwrap().set(&[assign("x", ">", 1)]).unwrap_err(),
        ValidationError::NonEqualityAssignment(String::from(">"))
    );
}

#[test]
fn delete_with_filters_and_limit() {
    let (sql, params) = delete_from("sessions")
        .unwrap()
        .and_where(&[cond("expired", "=", true)])
        .unwrap()
        .limit(100)
        .unwrap()
        .into_parts();

    assert_eq!(sql, "delete from sessions where expired = ? limit 100");
    assert_eq!(params, vec![SqlValue::Bool(true)]);
}

#[test]
fn delete_without_filters_is_bare() {
    let (sql, params) = delete_from("tmp").unwrap().into_parts();
    assert_eq!(sql, "delete from tmp");
    assert!(params.is_empty());
}

#[test]
fn injection_attempts_stay_in_bind_values() {
    let malicious = "x'; drop table t; --";
    let (sql, params) = update("t")
        .unwrap()
        .set(&[set_col("name", malicious)])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "update t set name = ?");
    assert_eq!(params, vec![SqlValue::Text(String::from(malicious))]);
}
