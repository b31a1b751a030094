//! Update statement builder.
//!
//! Assignment bind values always precede filter bind values in the
//! executed parameter sequence, matching the order their placeholders
//! appear in the statement text.

use std::marker::PhantomData;

use super::filter::{Connective, FilterState};
use super::{Filtering, Limited, Statement};
use crate::assign::{sanitize_assignments, Assign, Assignment, SanitizedAssignments};
use crate::condition::{Cond, Condition};
use crate::error::{BuildResult, ValidationError};
use crate::fragment::append_fragments;
use crate::ident::sanitize_ident;
use crate::value::SqlValue;

/// The entry stage of an update chain: table only, no statement yet.
#[derive(Debug, Clone)]
pub struct Update {
    table: String,
}

impl Update {
    pub(crate) fn new(table: &str) -> BuildResult<Self> {
        Ok(Self {
            table: sanitize_ident(table)?,
        })
    }

    /// Applies the assignments, producing the first executable stage:
    /// `update <table> set <a1>, <a2>, ...`.
    pub fn set(self, assignments: &[Assign]) -> BuildResult<UpdateStage<Filtering>> {
        let SanitizedAssignments {
            assignments,
            fragments,
        } = sanitize_assignments(assignments)?;

        let mut sql = format!("update {} set ", self.table);
        let mut values = Vec::new();
        append_fragments(&mut sql, &mut values, fragments, ", ");

        Ok(UpdateStage {
            table: self.table,
            sql,
            values,
            assignments,
            filter: FilterState::default(),
            filter_params: Vec::new(),
            limit: None,
            _phase: PhantomData,
        })
    }
}

/// An executable update stage, parameterized by its clause phase.
#[derive(Debug, Clone)]
pub struct UpdateStage<P> {
    table: String,
    sql: String,
    values: Vec<SqlValue>,
    assignments: Vec<Assignment>,
    filter: FilterState,
    filter_params: Vec<SqlValue>,
    limit: Option<i64>,
    _phase: PhantomData<P>,
}

impl<P> UpdateStage<P> {
    fn into_phase<Q>(self) -> UpdateStage<Q> {
        UpdateStage {
            table: self.table,
            sql: self.sql,
            values: self.values,
            assignments: self.assignments,
            filter: self.filter,
            filter_params: self.filter_params,
            limit: self.limit,
            _phase: PhantomData,
        }
    }

    /// The accumulated statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The table being updated.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The validated assignment records.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
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

impl UpdateStage<Filtering> {
    /// Adds conditions to the and-group; same connective rules as the
    /// select builder.
    pub fn and_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter.apply(
            &mut self.sql,
            &mut self.filter_params,
            conditions,
            Connective::And,
        )?;
        Ok(self)
    }

    /// Adds conditions to the or-group.
    pub fn or_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter.apply(
            &mut self.sql,
            &mut self.filter_params,
            conditions,
            Connective::Or,
        )?;
        Ok(self)
    }

    /// Appends ` limit <n>`; the stage becomes terminal.
    pub fn limit(mut self, n: i64) -> BuildResult<UpdateStage<Limited>> {
        if n < 0 {
            return Err(ValidationError::NegativeLimit(n));
        }
        self.sql.push_str(&format!(" limit {n}"));
        self.limit = Some(n);
        Ok(self.into_phase())
    }
}

impl<P> Statement for UpdateStage<P> {
    fn into_parts(self) -> (String, Vec<SqlValue>) {
        let mut params = self.values;
        params.extend(self.filter_params);
        (self.sql, params)
    }
}
