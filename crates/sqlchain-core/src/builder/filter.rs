//! Shared filter accumulation for select, update, and delete stages.

use crate::condition::{sanitize_conditions, Cond, Condition, SanitizedConditions};
use crate::error::BuildResult;
use crate::fragment::append_fragments;
use crate::value::SqlValue;

/// The SQL keyword joining filter fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Connective {
    And,
    Or,
}

impl Connective {
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Self::And => " and ",
            Self::Or => " or ",
        }
    }
}

/// Accumulated filter state carried by a builder stage.
///
/// And-group and or-group condition records are kept separately and
/// extended additively; `filtered` tracks whether ` where ` has been
/// emitted yet, whichever clause keyword emitted it.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FilterState {
    pub(crate) and_conditions: Vec<Condition>,
    pub(crate) or_conditions: Vec<Condition>,
    pub(crate) filtered: bool,
}

impl FilterState {
    /// Sanitizes one call's conditions and merges them into the
    /// statement: ` where ` on the first filter, otherwise the call's
    /// own connective, which also joins the call's fragments.
    ///
    /// Sanitization runs before any mutation, so a validation failure
    /// leaves nothing half-applied.
    pub(crate) fn apply(
        &mut self,
        sql: &mut String,
        params: &mut Vec<SqlValue>,
        raw: &[Cond],
        connective: Connective,
    ) -> BuildResult<()> {
        let SanitizedConditions {
            conditions,
            fragments,
        } = sanitize_conditions(raw)?;

        sql.push_str(if self.filtered {
            connective.separator()
        } else {
            " where "
        });
        self.filtered = true;
        append_fragments(sql, params, fragments, connective.separator());

        match connective {
            Connective::And => self.and_conditions.extend(conditions),
            Connective::Or => self.or_conditions.extend(conditions),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::cond;

    #[test]
    fn first_filter_emits_where_even_for_or() {
        let mut state = FilterState::default();
        let mut sql = String::from("select a from t");
        let mut params = Vec::new();

        state
            .apply(&mut sql, &mut params, &[cond("a", "=", 1)], Connective::Or)
            .unwrap();

        assert_eq!(sql, "select a from t where a = ?");
        assert!(state.filtered);
    }

    #[test]
    fn same_call_fragments_join_with_call_connective() {
        let mut state = FilterState::default();
        let mut sql = String::from("s");
        let mut params = Vec::new();

        state
            .apply(
                &mut sql,
                &mut params,
                &[cond("a", "=", 1), cond("b", "=", 2)],
                Connective::Or,
            )
            .unwrap();

        assert_eq!(sql, "s where a = ? or b = ?");
        assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn groups_accumulate_separately() {
        let mut state = FilterState::default();
        let mut sql = String::from("s");
        let mut params = Vec::new();

        state
            .apply(&mut sql, &mut params, &[cond("a", "=", 1)], Connective::And)
            .unwrap();
        state
            .apply(&mut sql, &mut params, &[cond("b", "=", 2)], Connective::Or)
            .unwrap();
        state
            .apply(&mut sql, &mut params, &[cond("c", "=", 3)], Connective::And)
            .unwrap();

        assert_eq!(sql, "s where a = ? or b = ? and c = ?");
        assert_eq!(state.and_conditions.len(), 2);
        assert_eq!(state.or_conditions.len(), 1);
    }

    #[test]
    fn failed_call_leaves_state_untouched() {
        let mut state = FilterState::default();
        let mut sql = String::from("s");
        let mut params = Vec::new();

        let err = state.apply(
            &mut sql,
            &mut params,
            &[cond("a", "=", 1), cond("b", "bogus", 2)],
            Connective::And,
        );

        assert!(err.is_err());
        assert_eq!(sql, "s");
        assert!(params.is_empty());
        assert!(!state.filtered);
    }
}
