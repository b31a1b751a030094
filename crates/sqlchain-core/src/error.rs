//! Error types raised while building statements.
//!
//! Every validation failure aborts the chain call that triggered it:
//! the consumed stage is dropped and no partial stage is returned.
//! Driver-side failures are not represented here; the execution layer
//! surfaces them unchanged.

use thiserror::Error;

/// Result alias for chain operations.
pub type BuildResult<T> = Result<T, ValidationError>;

/// A statement chain received malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An identifier (column, table, group) was the empty string.
    #[error("identifier cannot be empty")]
    EmptyIdentifier,

    /// An identifier contained more than one scope separator.
    #[error("identifier '{0}' has more than one scope separator")]
    TooManyScopes(String),

    /// An identifier list was empty.
    #[error("at least one identifier is required")]
    NoIdentifiers,

    /// A condition or assignment named an empty column.
    #[error("column name cannot be empty")]
    EmptyColumn,

    /// A condition or assignment carried an empty operator.
    #[error("operator cannot be empty")]
    EmptyOperator,

    /// A condition used an operator outside the supported set.
    #[error("operator '{0}' is not supported")]
    UnsupportedOperator(String),

    /// A non-between operator was given a low/high value pair.
    #[error("operator '{0}' requires a single value")]
    ExpectsSingleValue(String),

    /// A between-form operator was given a single value.
    #[error("operator '{0}' requires a low/high value pair")]
    ExpectsValuePair(String),

    /// An assignment used an operator other than `=`.
    #[error("assignments only support the '=' operator, got '{0}'")]
    NonEqualityAssignment(String),

    /// A condition list was empty.
    #[error("at least one condition is required")]
    NoConditions,

    /// An assignment list was empty.
    #[error("at least one assignment is required")]
    NoAssignments,

    /// An insert row carried no values.
    #[error("at least one value is required")]
    NoValues,

    /// An order direction other than `asc` or `desc`.
    #[error("order direction must be 'asc' or 'desc', got '{0}'")]
    InvalidDirection(String),

    /// A negative limit.
    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i64),
}
