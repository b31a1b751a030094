//! Assignment sanitization for `set` clauses.
//!
//! Two input conventions are supported, mirroring the triple and
//! mapping calling styles: [`assign`] builds an explicit
//! `(column, operator, value)` triple whose operator must be `=`, and
//! [`set_col`] builds the key/value form directly. A mapping is an
//! ordered slice of `set_col` entries, which makes enumeration order
//! explicit and deterministic.

use crate::error::{BuildResult, ValidationError};
use crate::fragment::Fragment;
use crate::value::{SqlValue, ToSqlValue};

/// A raw, not-yet-validated assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// Column to assign.
    pub column: String,
    /// Operator spelling; only `=` passes validation.
    pub operator: String,
    /// Value to bind.
    pub value: SqlValue,
}

/// Builds a raw assignment triple.
#[must_use]
pub fn assign(column: &str, operator: &str, value: impl ToSqlValue) -> Assign {
    Assign {
        column: String::from(column),
        operator: String::from(operator),
        value: value.to_sql_value(),
    }
}

/// Builds a key/value assignment (operator fixed to `=`).
#[must_use]
pub fn set_col(column: &str, value: impl ToSqlValue) -> Assign {
    assign(column, "=", value)
}

/// A validated assignment record.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column to assign.
    pub column: String,
    /// Value to bind.
    pub value: SqlValue,
}

/// The sanitizer output: assignment records and their fragments, both
/// in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedAssignments {
    /// Structured records, one per input.
    pub assignments: Vec<Assignment>,
    /// `"<column> = ?"` fragments, one per input.
    pub fragments: Vec<Fragment>,
}

/// Validates a list of raw assignments.
///
/// Fails on an empty list, an empty column, an empty operator, or any
/// operator other than `=`. Order is preserved.
pub fn sanitize_assignments(raw: &[Assign]) -> BuildResult<SanitizedAssignments> {
    if raw.is_empty() {
        return Err(ValidationError::NoAssignments);
    }

    let mut assignments = Vec::with_capacity(raw.len());
    let mut fragments = Vec::with_capacity(raw.len());

    for input in raw {
        if input.column.is_empty() {
            return Err(ValidationError::EmptyColumn);
        }
        if input.operator.is_empty() {
            return Err(ValidationError::EmptyOperator);
        }
        if input.operator != "=" {
            return Err(ValidationError::NonEqualityAssignment(
                input.operator.clone(),
            ));
        }

        fragments.push(Fragment::new(
            format!("{} = ?", input.column),
            vec![input.value.clone()],
        ));
        assignments.push(Assignment {
            column: input.column.clone(),
            value: input.value.clone(),
        });
    }

    Ok(SanitizedAssignments {
        assignments,
        fragments,
    })
}
