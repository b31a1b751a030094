//! Delete statement builder.
//!
//! `delete_from(table)` is executable immediately; filters and a
//! limit are optional. Deleting without a filter removes every row,
//! so callers should normally chain `and_where`/`or_where`.

use std::marker::PhantomData;

use super::filter::{Connective, FilterState};
use super::{Filtering, Limited, Statement};
use crate::condition::{Cond, Condition};
use crate::error::{BuildResult, ValidationError};
use crate::ident::sanitize_ident;
use crate::value::SqlValue;

/// An executable delete stage, parameterized by its clause phase.
#[derive(Debug, Clone)]
pub struct Delete<P> {
    table: String,
    sql: String,
    params: Vec<SqlValue>,
    filter: FilterState,
    limit: Option<i64>,
    _phase: PhantomData<P>,
}

impl Delete<Filtering> {
    pub(crate) fn new(table: &str) -> BuildResult<Self> {
        let table = sanitize_ident(table)?;
        let sql = format!("delete from {table}");
        Ok(Self {
            table,
            sql,
            params: Vec::new(),
            filter: FilterState::default(),
            limit: None,
            _phase: PhantomData,
        })
    }

    /// Adds conditions to the and-group; same connective rules as the
    /// select builder.
    pub fn and_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter
            .apply(&mut self.sql, &mut self.params, conditions, Connective::And)?;
        Ok(self)
    }

    /// Adds conditions to the or-group.
    pub fn or_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter
            .apply(&mut self.sql, &mut self.params, conditions, Connective::Or)?;
        Ok(self)
    }

    /// Appends ` limit <n>`; the stage becomes terminal.
    pub fn limit(mut self, n: i64) -> BuildResult<Delete<Limited>> {
        if n < 0 {
            return Err(ValidationError::NegativeLimit(n));
        }
        self.sql.push_str(&format!(" limit {n}"));
        Ok(Delete {
            table: self.table,
            sql: self.sql,
            params: self.params,
            filter: self.filter,
            limit: Some(n),
            _phase: PhantomData,
        })
    }
}

impl<P> Delete<P> {
    /// The accumulated statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The accumulated bind values, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// The table being deleted from.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The applied limit, if any.
    #[must_use]
    pub fn limit_value(&self) -> Option<i64> {
        self.limit
    }

    /// Conditions accumulated by `and_where` calls.
    #[must_use]
    pub fn and_conditions(&self) -> &[Condition] {
        &self.filter.and_conditions
    }

    /// Conditions accumulated by `or_where` calls.
    #[must_use]
    pub fn or_conditions(&self) -> &[Condition] {
        &self.filter.or_conditions
    }
}

impl<P> Statement for Delete<P> {
    fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::delete_from;
    use crate::condition::cond;

    #[test]
    fn bare_delete_builds_statement() {
        let (sql, params) = delete_from("t").unwrap().into_parts();
        assert_eq!(sql, "delete from t");
        assert!(params.is_empty());
    }

    #[test]
    fn filtered_delete_binds_values() {
        let (sql, params) = delete_from("t")
            .unwrap()
            .and_where(&[cond("id", "=", 9)])
            .unwrap()
            .into_parts();

        assert_eq!(sql, "delete from t where id = ?");
        assert_eq!(params, vec![SqlValue::Int(9)]);
    }

    #[test]
    fn interleaved_filters_keep_call_connectives() {
        let (sql, params) = delete_from("t")
            .unwrap()
            .and_where(&[cond("a", "=", 1)])
            .unwrap()
            .or_where(&[cond("b", "=", 2), cond("c", "=", 3)])
            .unwrap()
            .into_parts();

        assert_eq!(sql, "delete from t where a = ? or b = ? or c = ?");
        assert_eq!(
            params,
            vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
        );
    }

    #[test]
    fn limit_closes_the_chain() {
        let stage = delete_from("t").unwrap().limit(5).unwrap();
        assert_eq!(stage.sql(), "delete from t limit 5");
        assert_eq!(stage.limit_value(), Some(5));
    }

    #[test]
    fn scoped_table_passes() {
        let stage = delete_from("mydb.t").unwrap();
        assert_eq!(stage.table(), "mydb.t");
    }

    #[test]
    fn invalid_table_fails() {
        assert_eq!(
            delete_from("a.b.c").unwrap_err(),
            ValidationError::TooManyScopes(String::from("a.b.c"))
        );
    }
}
