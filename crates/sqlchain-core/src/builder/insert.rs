//! Insert statement builder.
//!
//! Single-row inserts only: `values` takes one row and produces the
//! terminal stage.

use std::marker::PhantomData;

use super::Statement;
use crate::error::{BuildResult, ValidationError};
use crate::ident::{sanitize_ident, sanitize_idents};
use crate::value::{SqlValue, ToSqlValue};

// Typestate markers

/// Marker: no row has been supplied yet.
#[derive(Debug, Clone, Copy)]
pub struct NoValues;
/// Marker: the row has been supplied; the stage is terminal.
#[derive(Debug, Clone, Copy)]
pub struct HasValues;

/// An insert stage, parameterized by whether its row is present.
#[derive(Debug, Clone)]
pub struct Insert<V> {
    table: String,
    columns: Vec<String>,
    sql: String,
    params: Vec<SqlValue>,
    _values: PhantomData<V>,
}

impl Insert<NoValues> {
    pub(crate) fn new(table: &str) -> BuildResult<Self> {
        let table = sanitize_ident(table)?;
        let sql = format!("insert into {table}");
        Ok(Self {
            table,
            columns: Vec::new(),
            sql,
            params: Vec::new(),
            _values: PhantomData,
        })
    }

    /// Names the target columns: `insert into <table>(<c1>, <c2>, ...)`.
    pub fn columns(mut self, columns: &[&str]) -> BuildResult<Self> {
        let columns = sanitize_idents(columns)?;
        self.sql.push('(');
        self.sql.push_str(&columns.join(", "));
        self.sql.push(')');
        self.columns = columns;
        Ok(self)
    }

    /// Supplies the row, appending ` values(?, ?, ...)` with one
    /// placeholder per value in argument order.
    pub fn values<T: ToSqlValue>(self, row: Vec<T>) -> BuildResult<Insert<HasValues>> {
        if row.is_empty() {
            return Err(ValidationError::NoValues);
        }
        let params: Vec<SqlValue> = row.into_iter().map(ToSqlValue::to_sql_value).collect();
        let placeholders: Vec<&str> = params.iter().map(|_| "?").collect();
        let mut sql = self.sql;
        sql.push_str(" values(");
        sql.push_str(&placeholders.join(", "));
        sql.push(')');
        Ok(Insert {
            table: self.table,
            columns: self.columns,
            sql,
            params,
            _values: PhantomData,
        })
    }
}

impl<V> Insert<V> {
    /// The accumulated statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The validated column list (empty when unspecified).
    #[must_use]
    pub fn columns_list(&self) -> &[String] {
        &self.columns
    }
}

impl Statement for Insert<HasValues> {
    fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}
