//! Statement builders.
//!
//! Each builder is a chain of immutable stages: every operation
//! consumes the previous stage, runs the sanitizers over its own
//! arguments, and returns a new stage carrying the extended statement
//! text and bind values. Stages are `Clone`, so a chain can be
//! branched at any point and each branch only ever sees its own
//! appended fragments.
//!
//! Clause ordering is enforced with the typestate pattern. The phase
//! order is monotonic:
//!
//! ```text
//! Filtering -> Grouped -> Ordered -> Limited
//! ```
//!
//! Filter operations (`and_where`, `or_where`) are only available in
//! the `Filtering` phase; `group_by` moves to `Grouped`, `order_by`
//! to `Ordered`, `limit` to `Limited`. Calling a clause out of order
//! does not compile.
//!
//! # Example
//!
//! ```rust
//! use sqlchain_core::{cond, select, Statement};
//!
//! let (sql, params) = select(&["a", "b"])?
//!     .from(&["t"])?
//!     .and_where(&[cond("a", "=", 1)])?
//!     .into_parts();
//!
//! assert_eq!(sql, "select a, b from t where a = ?");
//! assert_eq!(params.len(), 1);
//! # Ok::<(), sqlchain_core::ValidationError>(())
//! ```

mod delete;
mod filter;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::{HasValues, Insert, NoValues};
pub use select::{Direction, Select, SelectStage};
pub use update::{Update, UpdateStage};

use crate::error::BuildResult;
use crate::value::SqlValue;

// Phase markers (zero-sized types)

/// Phase: filters may still be added.
#[derive(Debug, Clone, Copy)]
pub struct Filtering;
/// Phase: grouped; ordering and limit remain available.
#[derive(Debug, Clone, Copy)]
pub struct Grouped;
/// Phase: ordered; only limit remains available.
#[derive(Debug, Clone, Copy)]
pub struct Ordered;
/// Phase: limited; the stage is terminal.
#[derive(Debug, Clone, Copy)]
pub struct Limited;

/// An executable stage: accumulated statement text plus bind values.
///
/// This is the seam between the builder core and an execution layer;
/// the text contains positional `?` placeholders and `into_parts`
/// yields the values in placeholder order.
pub trait Statement {
    /// Consumes the stage, returning the SQL text and bind values.
    fn into_parts(self) -> (String, Vec<SqlValue>);
}

/// Starts an insert chain: `insert into <table>`.
///
/// # Example
/// ```ignore
/// let stage = insert_into("users")?.columns(&["name"])?.values(vec!["Ana"])?;
/// ```
pub fn insert_into(table: &str) -> BuildResult<Insert<NoValues>> {
    Insert::new(table)
}

/// Starts a select chain with the given columns.
///
/// # Example
/// ```ignore
/// let stage = select(&["id", "name"])?.from(&["users"])?;
/// ```
pub fn select(columns: &[&str]) -> BuildResult<Select> {
    Select::new(columns)
}

/// Starts an update chain: `update <table>`.
///
/// # Example
/// ```ignore
/// let stage = update("users")?.set(&[set_col("active", false)])?;
/// ```
pub fn update(table: &str) -> BuildResult<Update> {
    Update::new(table)
}

/// Starts a delete chain: `delete from <table>`.
///
/// # Example
/// ```ignore
/// let stage = delete_from("users")?.and_where(&[cond("id", "=", 1)])?;
/// ```
pub fn delete_from(table: &str) -> BuildResult<Delete<Filtering>> {
    Delete::new(table)
}
