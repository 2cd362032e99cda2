//! # Query Module
//!
//! A fluent builder that accumulates `SELECT` clauses and renders them to a
//! SQL string on demand, plus the condition sub-DSL used to express `WHERE`
//! predicates.
//!
//! - **[`QueryBuilder`]** - joins, conditions, grouping, ordering, pagination
//! - **[`ConditionBuilder`]** - block scope where any name becomes a column
//!   reference through [`ConditionBuilder::col`]
//! - **[`SqlValue`]** / **[`IntoSqlValue`]** - scalar values accepted on the
//!   right of a comparison
//!
//! Only generation is in scope. Nothing here executes queries, checks them
//! against a schema, or escapes interpolated values.

mod builder;
mod condition;
mod value;

pub use builder::{Direction, JoinClause, JoinKind, QueryBuilder};
pub use condition::{ColumnRef, CompareOp, ConditionBuilder, Predicate};
pub use value::{IntoSqlValue, SqlValue};
