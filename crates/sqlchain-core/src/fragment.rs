//! SQL fragments.
//!
//! A [`Fragment`] pairs a snippet of statement text with the bind
//! values its `?` placeholders consume, in placeholder order. It is
//! the unit produced by the sanitizers and merged by the builders.

use crate::value::SqlValue;

/// A snippet of SQL text plus its ordered bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Statement text containing zero or more `?` placeholders.
    pub sql: String,
    /// Bind values, one per placeholder, in placeholder order.
    pub params: Vec<SqlValue>,
}

impl Fragment {
    /// Creates a fragment from text and its bind values.
    #[must_use]
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// Appends `fragments` to `sql`/`params`, joining the snippets with
/// `separator` and flattening bind values in fragment order.
pub(crate) fn append_fragments(
    sql: &mut String,
    params: &mut Vec<SqlValue>,
    fragments: Vec<Fragment>,
    separator: &str,
) {
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            sql.push_str(separator);
        }
        sql.push_str(&fragment.sql);
        params.extend(fragment.params);
    }
}
