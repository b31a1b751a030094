//! End-to-end select chains through the public API.

use sqlchain_core::{cond, cond_between, select, SqlValue, Statement, ValidationError};

#[test]
fn select_where_round_trip() {
    let (sql, params) = select(&["a", "b"])
        .unwrap()
        .from(&["t"])
        .unwrap()
        .and_where(&[cond("a", "=", 1)])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "select a, b from t where a = ?");
    assert_eq!(params, vec![SqlValue::Int(1)]);
}

#[test]
fn select_where_then_or_where() {
    let (sql, params) = select(&["a"])
        .unwrap()
        .from(&["t"])
        .unwrap()
        .and_where(&[cond("a", "=", 1)])
        .unwrap()
        .or_where(&[cond("b", "=", 2)])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "select a from t where a = ? or b = ?");
    assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Int(2)]);
}

#[test]
fn scoped_identifiers_pass_through() {
    let (sql, _) = select(&["u.id", "u.name"])
        .unwrap()
        .from(&["mydb.users"])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "select u.id, u.name from mydb.users");
}

#[test]
fn doubly_scoped_identifier_is_rejected() {
    assert_eq!(
        select(&["db.table.column"]).unwrap_err(),
        ValidationError::TooManyScopes(String::from("db.table.column"))
    );
}

#[test]
fn multiple_tables_join_with_commas() {
    let (sql, _) = select(&["a"])
        .unwrap()
        .from(&["t1", "t2"])
        .unwrap()
        .into_parts();

    assert_eq!(sql, "select a from t1, t2");
}

#[test]
fn mixed_operator_filters_bind_in_append_order() {
    let (sql, params) = select(&["name"])
        .unwrap()
        .from(&["people"])
        .unwrap()
        .and_where(&[
            cond("name", "like", "A%"),
            cond_between("age", "between", 20, 30),
        ])
        .unwrap()
        .or_where(&[cond("vip", "=", true)])
        .unwrap()
        .into_parts();

    assert_eq!(
        sql,
        "select name from people where name like ? and age between ? and ? or vip = ?"
    );
    assert_eq!(
        params,
        vec![
            SqlValue::Text(String::from("A%")),
            SqlValue::Int(20),
            SqlValue::Int(30),
            SqlValue::Bool(true),
        ]
    );
}

#[test]
fn trailing_clauses_follow_phase_order() {
    let (sql, params) = select(&["city", "count(*)"])
        .unwrap()
        .from(&["people"])
        .unwrap()
        .and_where(&[cond("age", ">=", 18)])
        .unwrap()
        .group_by(&["city"])
        .unwrap()
        .order_by("city", "asc")
        .unwrap()
        .limit(50)
        .unwrap()
        .into_parts();

    assert_eq!(
        sql,
        "select city, count(*) from people where age >= ? group by city order by city asc limit 50"
    );
    assert_eq!(params, vec![SqlValue::Int(18)]);
}

#[test]
fn validation_failure_consumes_the_stage() {
    let err = select(&["a"])
        .unwrap()
        .from(&["t"])
        .unwrap()
        .and_where(&[cond("a", "~", 1)])
        .unwrap_err();

    assert_eq!(err, ValidationError::UnsupportedOperator(String::from("~")));
}
