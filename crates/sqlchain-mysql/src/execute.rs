//! Statement execution against a MySQL pool.
//!
//! The pool handle is injected per call; this crate never owns a
//! global connection. Bind values travel through sqlx's argument
//! buffer, never through the statement text.

use sqlchain_core::{SqlValue, Statement};
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlQueryResult, MySqlRow};
use sqlx::query::Query;

type MySqlQuery<'q> = Query<'q, sqlx::MySql, MySqlArguments>;

fn bind_value(query: MySqlQuery<'_>, value: SqlValue) -> MySqlQuery<'_> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

/// Terminal operations for any built statement.
///
/// Blanket-implemented, so every terminal builder stage picks these up
/// with no extra wiring:
///
/// ```ignore
/// let affected = update("t")?
///     .set(&[set_col("x", 1)])?
///     .and_where(&[cond("id", "=", 7)])?
///     .go(&pool)
///     .await?
///     .rows_affected();
/// ```
#[allow(async_fn_in_trait)]
pub trait Execute: Statement + Sized {
    /// Executes the statement, returning the driver's result packet.
    async fn go(self, pool: &MySqlPool) -> Result<MySqlQueryResult, sqlx::Error> {
        let (sql, params) = self.into_parts();
        tracing::debug!(sql = %sql, params = params.len(), "executing statement");
        let mut query = sqlx::query(&sql);
        for value in params {
            query = bind_value(query, value);
        }
        query.execute(pool).await
    }

    /// Executes the statement and collects the returned rows.
    async fn fetch(self, pool: &MySqlPool) -> Result<Vec<MySqlRow>, sqlx::Error> {
        let (sql, params) = self.into_parts();
        tracing::debug!(sql = %sql, params = params.len(), "fetching rows");
        let mut query = sqlx::query(&sql);
        for value in params {
            query = bind_value(query, value);
        }
        query.fetch_all(pool).await
    }
}

impl<S: Statement> Execute for S {}
