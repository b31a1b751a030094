//! Condition sanitization.
//!
//! A raw condition is a `(column, operator, value)` triple built with
//! [`cond`] or [`cond_between`]. The sanitizer validates each triple
//! and emits a parameterized [`Fragment`] per condition — never
//! interpolating values — alongside the structured [`Condition`]
//! record the builder stages keep.

use crate::error::{BuildResult, ValidationError};
use crate::fragment::Fragment;
use crate::value::{SqlValue, ToSqlValue};

/// A comparison operator supported in `where` conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<>`
    LtGt,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `between`
    Between,
    /// `not between`
    NotBetween,
    /// `like`
    Like,
    /// `not like`
    NotLike,
}

impl Operator {
    /// Parses the operator spelling used in raw triples.
    pub fn parse(raw: &str) -> BuildResult<Self> {
        match raw {
            "" => Err(ValidationError::EmptyOperator),
            "=" => Ok(Self::Eq),
            "!=" => Ok(Self::NotEq),
            "<>" => Ok(Self::LtGt),
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            "<=" => Ok(Self::LtEq),
            ">=" => Ok(Self::GtEq),
            "between" => Ok(Self::Between),
            "not between" => Ok(Self::NotBetween),
            "like" => Ok(Self::Like),
            "not like" => Ok(Self::NotLike),
            other => Err(ValidationError::UnsupportedOperator(String::from(other))),
        }
    }

    /// Returns the spelling rendered into statement text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::LtGt => "<>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Between => "between",
            Self::NotBetween => "not between",
            Self::Like => "like",
            Self::NotLike => "not like",
        }
    }

    /// Whether the operator compares against a low/high value pair.
    #[must_use]
    pub fn expects_pair(self) -> bool {
        matches!(self, Self::Between | Self::NotBetween)
    }
}

/// The right-hand side of a condition.
///
/// The two variants replace the scalar-vs-two-element-array shape
/// inspection of loosely typed callers: arity is part of the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single comparison value.
    Value(SqlValue),
    /// A low/high pair for `between` / `not between`.
    Range(SqlValue, SqlValue),
}

/// A raw, not-yet-validated condition triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Cond {
    /// Column reference.
    pub column: String,
    /// Operator spelling, parsed at sanitize time.
    pub operator: String,
    /// Right-hand side.
    pub operand: Operand,
}

/// Builds a raw condition comparing a column against a single value.
#[must_use]
pub fn cond(column: &str, operator: &str, value: impl ToSqlValue) -> Cond {
    Cond {
        column: String::from(column),
        operator: String::from(operator),
        operand: Operand::Value(value.to_sql_value()),
    }
}

/// Builds a raw between-form condition with a low/high value pair.
#[must_use]
pub fn cond_between(
    column: &str,
    operator: &str,
    low: impl ToSqlValue,
    high: impl ToSqlValue,
) -> Cond {
    Cond {
        column: String::from(column),
        operator: String::from(operator),
        operand: Operand::Range(low.to_sql_value(), high.to_sql_value()),
    }
}

/// A validated condition record.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column reference.
    pub column: String,
    /// Parsed operator.
    pub operator: Operator,
    /// Validated right-hand side.
    pub operand: Operand,
}

/// The sanitizer output: condition records and their fragments, both
/// in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedConditions {
    /// Structured records, one per input triple.
    pub conditions: Vec<Condition>,
    /// `"<column> <operator> ?"` fragments (two placeholders for
    /// between-forms), one per input triple.
    pub fragments: Vec<Fragment>,
}

/// Validates a list of raw condition triples.
///
/// Fails on an empty list, an empty column, an unsupported operator,
/// or an operand whose arity does not match the operator. Order is
/// preserved; nothing is deduplicated.
pub fn sanitize_conditions(raw: &[Cond]) -> BuildResult<SanitizedConditions> {
    if raw.is_empty() {
        return Err(ValidationError::NoConditions);
    }

    let mut conditions = Vec::with_capacity(raw.len());
    let mut fragments = Vec::with_capacity(raw.len());

    for input in raw {
        if input.column.is_empty() {
            return Err(ValidationError::EmptyColumn);
        }
        let operator = Operator::parse(&input.operator)?;

        let fragment = match (&input.operand, operator.expects_pair()) {
            (Operand::Value(value), false) => Fragment::new(
                format!("{} {} ?", input.column, operator.as_str()),
                vec![value.clone()],
            ),
            (Operand::Range(low, high), true) => Fragment::new(
                format!("{} {} ? and ?", input.column, operator.as_str()),
                vec![low.clone(), high.clone()],
            ),
            (Operand::Value(_), true) => {
                return Err(ValidationError::ExpectsValuePair(String::from(
                    operator.as_str(),
                )));
            }
            (Operand::Range(..), false) => {
                return Err(ValidationError::ExpectsSingleValue(String::from(
                    operator.as_str(),
                )));
            }
        };

        conditions.push(Condition {
            column: input.column.clone(),
            operator,
            operand: input.operand.clone(),
        });
        fragments.push(fragment);
    }

    Ok(SanitizedConditions {
        conditions,
        fragments,
    })
}
