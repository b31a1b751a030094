//! Select statement builder.
//!
//! `select(..)` validates the column list, `.from(..)` produces the
//! first executable stage, and the remaining clauses follow the
//! monotonic phase order described in the module docs: filters first,
//! then `group_by`, `order_by`, `limit`.

use std::marker::PhantomData;

use super::filter::{Connective, FilterState};
use super::{Filtering, Grouped, Limited, Ordered, Statement};
use crate::condition::{Cond, Condition};
use crate::error::{BuildResult, ValidationError};
use crate::ident::sanitize_idents;
use crate::value::SqlValue;

/// Sort direction for `order_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `asc`
    Asc,
    /// `desc`
    Desc,
}

impl Direction {
    /// Parses `"asc"` / `"desc"`; anything else fails.
    pub fn parse(raw: &str) -> BuildResult<Self> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ValidationError::InvalidDirection(String::from(other))),
        }
    }

    /// Returns the spelling rendered into statement text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The entry stage of a select chain: columns only, no statement yet.
#[derive(Debug, Clone)]
pub struct Select {
    columns: Vec<String>,
}

impl Select {
    pub(crate) fn new(columns: &[&str]) -> BuildResult<Self> {
        Ok(Self {
            columns: sanitize_idents(columns)?,
        })
    }

    /// Names the tables to select from, producing the first
    /// executable stage: `select <cols> from <tables>`.
    pub fn from(self, tables: &[&str]) -> BuildResult<SelectStage<Filtering>> {
        let tables = sanitize_idents(tables)?;
        let sql = format!(
            "select {} from {}",
            self.columns.join(", "),
            tables.join(", ")
        );
        Ok(SelectStage {
            columns: self.columns,
            tables,
            sql,
            params: Vec::new(),
            filter: FilterState::default(),
            groups: Vec::new(),
            order: None,
            limit: None,
            _phase: PhantomData,
        })
    }
}

/// An executable select stage, parameterized by its clause phase.
#[derive(Debug, Clone)]
pub struct SelectStage<P> {
    columns: Vec<String>,
    tables: Vec<String>,
    sql: String,
    params: Vec<SqlValue>,
    filter: FilterState,
    groups: Vec<String>,
    order: Option<(String, Direction)>,
    limit: Option<i64>,
    _phase: PhantomData<P>,
}

impl<P> SelectStage<P> {
    fn into_phase<Q>(self) -> SelectStage<Q> {
        SelectStage {
            columns: self.columns,
            tables: self.tables,
            sql: self.sql,
            params: self.params,
            filter: self.filter,
            groups: self.groups,
            order: self.order,
            limit: self.limit,
            _phase: PhantomData,
        }
    }

    fn apply_order_by(mut self, column: &str, direction: &str) -> BuildResult<SelectStage<Ordered>> {
        let direction = Direction::parse(direction)?;
        let column = crate::ident::sanitize_ident(column)?;
        self.sql
            .push_str(&format!(" order by {} {}", column, direction.as_str()));
        self.order = Some((column, direction));
        Ok(self.into_phase())
    }

    fn apply_limit(mut self, n: i64) -> BuildResult<SelectStage<Limited>> {
        if n < 0 {
            return Err(ValidationError::NegativeLimit(n));
        }
        self.sql.push_str(&format!(" limit {n}"));
        self.limit = Some(n);
        Ok(self.into_phase())
    }

    /// The accumulated statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The accumulated bind values, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// The validated column list.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The validated table list.
    #[must_use]
    pub fn tables(&self) -> &[String] {
        &self.tables
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

    /// Whether any filter has been applied.
    #[must_use]
    pub fn filtered(&self) -> bool {
        self.filter.filtered
    }
}

impl SelectStage<Filtering> {
    /// Adds conditions to the and-group.
    ///
    /// Prepends ` where ` on the first filter applied to the stage,
    /// otherwise ` and `; conditions in this call join with ` and `.
    pub fn and_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter
            .apply(&mut self.sql, &mut self.params, conditions, Connective::And)?;
        Ok(self)
    }

    /// Adds conditions to the or-group.
    ///
    /// Prepends ` where ` on the first filter applied to the stage,
    /// otherwise ` or `; conditions in this call join with ` or `.
    pub fn or_where(mut self, conditions: &[Cond]) -> BuildResult<Self> {
        self.filter
            .apply(&mut self.sql, &mut self.params, conditions, Connective::Or)?;
        Ok(self)
    }

    /// Appends ` group by <groups>` and closes the filtering phase.
    pub fn group_by(mut self, groups: &[&str]) -> BuildResult<SelectStage<Grouped>> {
        let groups = sanitize_idents(groups)?;
        self.sql.push_str(" group by ");
        self.sql.push_str(&groups.join(", "));
        self.groups = groups;
        Ok(self.into_phase())
    }

    /// Appends ` order by <column> <direction>`.
    pub fn order_by(self, column: &str, direction: &str) -> BuildResult<SelectStage<Ordered>> {
        self.apply_order_by(column, direction)
    }

    /// Appends ` limit <n>`; the stage becomes terminal.
    pub fn limit(self, n: i64) -> BuildResult<SelectStage<Limited>> {
        self.apply_limit(n)
    }
}

impl SelectStage<Grouped> {
    /// Appends ` order by <column> <direction>`.
    pub fn order_by(self, column: &str, direction: &str) -> BuildResult<SelectStage<Ordered>> {
        self.apply_order_by(column, direction)
    }

    /// Appends ` limit <n>`; the stage becomes terminal.
    pub fn limit(self, n: i64) -> BuildResult<SelectStage<Limited>> {
        self.apply_limit(n)
    }
}

impl SelectStage<Ordered> {
    /// Appends ` limit <n>`; the stage becomes terminal.
    pub fn limit(self, n: i64) -> BuildResult<SelectStage<Limited>> {
        self.apply_limit(n)
    }
}

impl<P> Statement for SelectStage<P> {
    fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}
