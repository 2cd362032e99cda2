//! Predicate sub-DSL used by [`QueryBuilder::where_with`](super::QueryBuilder::where_with).
//!
//! A condition block receives a [`ConditionBuilder`] scope. Any name passed
//! to [`ConditionBuilder::col`] becomes a [`ColumnRef`], an inert placeholder
//! that records nothing until one of its comparison methods is called. Each
//! comparison appends one `column OP value` predicate; all predicates from one
//! block are joined with `AND` in the order they were issued.
//!
//! ```
//! use routekit::query::ConditionBuilder;
//!
//! let sql = ConditionBuilder::evaluate(|q| {
//!     q.col("views").gt(100).col("status").eq("live");
//! })
//! .unwrap();
//! assert_eq!(sql, "views > 100 AND status = 'live'");
//! ```

use super::value::{IntoSqlValue, SqlValue};
use crate::error::PredicateError;
use std::fmt;

/// Comparison operators supported by column references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single binary comparison, `column OP value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: SqlValue,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `= NULL` is never true in SQL
        match (self.op, &self.value) {
            (CompareOp::Eq, SqlValue::Null) => write!(f, "{} IS NULL", self.column),
            (CompareOp::Ne, SqlValue::Null) => write!(f, "{} IS NOT NULL", self.column),
            _ => write!(f, "{} {} {}", self.column, self.op, self.value),
        }
    }
}

/// Scope object handed to a condition block.
///
/// The first unsupported comparison value is latched and reported by
/// [`ConditionBuilder::finish`]; later comparisons are still recorded but the
/// block as a whole fails.
#[derive(Debug, Default)]
pub struct ConditionBuilder {
    predicates: Vec<Predicate>,
    error: Option<PredicateError>,
}

impl ConditionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `block` against a fresh scope and render its predicates.
    ///
    /// # Errors
    ///
    /// Returns the first [`PredicateError`] raised inside the block.
    pub fn evaluate<F>(block: F) -> Result<String, PredicateError>
    where
        F: FnOnce(&mut ConditionBuilder),
    {
        let mut scope = ConditionBuilder::new();
        block(&mut scope);
        scope.finish()
    }

    /// Treat `name` as a column and return a comparable handle to it.
    pub fn col(&mut self, name: impl Into<String>) -> ColumnRef<'_> {
        ColumnRef {
            scope: self,
            column: name.into(),
        }
    }

    /// Predicates recorded so far, in issue order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Render the recorded predicates joined by `AND`.
    ///
    /// An empty block renders as an empty string.
    ///
    /// # Errors
    ///
    /// Returns the first [`PredicateError`] raised by a comparison.
    pub fn finish(self) -> Result<String, PredicateError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(self
            .predicates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" AND "))
    }

    fn record(&mut self, column: String, op: CompareOp, value: impl IntoSqlValue) -> &mut Self {
        match value.into_sql_value(&column) {
            Ok(value) => self.predicates.push(Predicate { column, op, value }),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
        }
        self
    }
}

/// Placeholder for a column inside a condition block.
///
/// Comparing it records a predicate on the owning scope and hands the scope
/// back, so comparisons can be chained.
#[must_use = "a column reference records nothing until it is compared"]
pub struct ColumnRef<'a> {
    scope: &'a mut ConditionBuilder,
    column: String,
}

impl<'a> ColumnRef<'a> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.column
    }

    /// `column = value`
    pub fn eq(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Eq, value)
    }

    /// `column != value`
    pub fn ne(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Ne, value)
    }

    /// `column < value`
    pub fn lt(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Lt, value)
    }

    /// `column > value`
    pub fn gt(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Gt, value)
    }

    /// `column <= value`
    pub fn le(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Le, value)
    }

    /// `column >= value`
    pub fn ge(self, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.compare(CompareOp::Ge, value)
    }

    /// Compare with an operator chosen at runtime.
    pub fn compare(self, op: CompareOp, value: impl IntoSqlValue) -> &'a mut ConditionBuilder {
        self.scope.record(self.column, op, value)
    }
}
