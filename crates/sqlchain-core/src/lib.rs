//! # sqlchain-core
//!
//! A fluent, immutable SQL statement builder. Chained operations
//! assemble a parameterized statement — lowercase keywords, positional
//! `?` placeholders — together with its ordered bind values. Caller
//! input passes through sanitizers that validate identifiers,
//! condition triples, and assignments before anything reaches the
//! statement text; values are only ever bound, never interpolated.
//!
//! Every chain operation consumes the previous stage and returns a new
//! one, so stages can be cloned and branched freely without the
//! branches observing each other. Clause ordering is enforced at
//! compile time through phase-typed stages.
//!
//! ```rust
//! use sqlchain_core::{cond, select, SqlValue, Statement};
//!
//! let (sql, params) = select(&["a", "b"])?
//!     .from(&["t"])?
//!     .and_where(&[cond("a", "=", 1)])?
//!     .into_parts();
//!
//! assert_eq!(sql, "select a, b from t where a = ?");
//! assert_eq!(params, vec![SqlValue::Int(1)]);
//! # Ok::<(), sqlchain_core::ValidationError>(())
//! ```
//!
//! Execution lives in a separate crate; anything implementing
//! [`Statement`] can be handed to an executor.

pub mod assign;
pub mod builder;
pub mod condition;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod value;

pub use assign::{assign, set_col, Assign, Assignment};
pub use builder::{
    delete_from, insert_into, select, update, Delete, Direction, Filtering, Grouped, HasValues,
    Insert, Limited, NoValues, Ordered, Select, SelectStage, Statement, Update, UpdateStage,
};
pub use condition::{cond, cond_between, Cond, Condition, Operand, Operator};
pub use error::{BuildResult, ValidationError};
pub use fragment::Fragment;
pub use ident::{sanitize_ident, sanitize_idents};
pub use value::{SqlValue, ToSqlValue};
