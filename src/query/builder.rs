use super::condition::ConditionBuilder;
use super::value::IntoSqlValue;
use crate::error::{ParseDirectionError, PredicateError};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Sort direction for `ORDER BY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: String,
    pub on: String,
}

/// One entry of the `WHERE` or `HAVING` list.
///
/// Clauses built from predicates are plain conjunctions and can be AND-ed as
/// they are. Raw strings are opaque and get parenthesized once other clauses
/// sit next to them, so an `OR` inside one cannot absorb its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    sql: String,
    raw: bool,
}

fn write_conjunction(f: &mut fmt::Formatter<'_>, clauses: &[Clause]) -> fmt::Result {
    if let [only] = clauses {
        return f.write_str(&only.sql);
    }
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            f.write_str(" AND ")?;
        }
        if clause.raw {
            write!(f, "({})", clause.sql)?;
        } else {
            f.write_str(&clause.sql)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderClause {
    column: String,
    direction: Direction,
}

/// Fluent, logically immutable `SELECT` builder.
///
/// Every chain method borrows the current builder and returns a new one with
/// one more clause, so a partially built query can be reused as a template.
/// Rendering is a pure read: [`QueryBuilder::to_query`] always returns the
/// same string for the same builder.
///
/// Values are interpolated without escaping. The output is meant for trusted
/// input only; use bind parameters for anything user-supplied.
///
/// ```
/// use routekit::query::{Direction, QueryBuilder};
///
/// # fn main() -> Result<(), routekit::PredicateError> {
/// let sql = QueryBuilder::from("posts")
///     .where_eq([("published", true)])?
///     .where_with(|q| {
///         q.col("views").gt(100);
///     })?
///     .order_by("created_at", Direction::Desc)
///     .limit(10)
///     .to_query();
/// assert_eq!(
///     sql,
///     "SELECT * FROM posts WHERE published = 'true' AND views > 100 ORDER BY created_at DESC LIMIT 10"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    table: String,
    select_columns: Vec<String>,
    joins: Vec<JoinClause>,
    where_clauses: Vec<Clause>,
    group_by: Vec<String>,
    having: Vec<Clause>,
    order: Option<OrderClause>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl QueryBuilder {
    /// Start a query against `table`.
    #[must_use]
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select_columns: Vec::new(),
            joins: Vec::new(),
            where_clauses: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order: None,
            limit: None,
            offset: None,
        }
    }

    fn extend(&self, apply: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        apply(&mut next);
        next
    }

    /// Add columns to the select list. With no columns selected, `*` is rendered.
    #[must_use]
    pub fn select<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(|q| q.select_columns.extend(columns.into_iter().map(Into::into)))
    }

    /// `INNER JOIN table ON on`
    #[must_use]
    pub fn join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.push_join(JoinKind::Inner, table.into(), on.into())
    }

    /// `LEFT JOIN table ON on`
    #[must_use]
    pub fn left_join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.push_join(JoinKind::Left, table.into(), on.into())
    }

    /// `RIGHT JOIN table ON on`
    #[must_use]
    pub fn right_join(&self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.push_join(JoinKind::Right, table.into(), on.into())
    }

    fn push_join(&self, kind: JoinKind, table: String, on: String) -> Self {
        self.extend(|q| q.joins.push(JoinClause { kind, table, on }))
    }

    /// Add equality conditions from `column => value` pairs.
    ///
    /// Each pair renders as `column = 'value'`: strings and booleans are
    /// single-quoted, numbers are bare and null renders `column IS NULL`.
    /// The pairs form one clause, joined by `AND`, and that clause is AND-ed
    /// with every other `where` clause.
    ///
    /// # Errors
    ///
    /// [`PredicateError`] if a value is an array, an object or a non-finite
    /// float.
    pub fn where_eq<I, K, V>(&self, pairs: I) -> Result<Self, PredicateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoSqlValue,
    {
        let mut parts = Vec::new();
        for (column, value) in pairs {
            let column = column.into();
            let value = value.into_sql_value(&column)?;
            parts.push(if value.is_null() {
                format!("{column} IS NULL")
            } else {
                format!("{column} = {}", value.quoted())
            });
        }
        Ok(self.push_where(parts.join(" AND "), false))
    }

    /// Add conditions built by a [`ConditionBuilder`] block.
    ///
    /// # Errors
    ///
    /// Returns the first [`PredicateError`] raised inside the block; the
    /// builder `self` is left as it was.
    pub fn where_with<F>(&self, block: F) -> Result<Self, PredicateError>
    where
        F: FnOnce(&mut ConditionBuilder),
    {
        let clause = ConditionBuilder::evaluate(block)?;
        Ok(self.push_where(clause, false))
    }

    /// Add a raw predicate string as-is.
    ///
    /// When other `WHERE` clauses are present the string is wrapped in
    /// parentheses.
    #[must_use]
    pub fn where_raw(&self, clause: impl Into<String>) -> Self {
        self.push_where(clause.into(), true)
    }

    fn push_where(&self, sql: String, raw: bool) -> Self {
        // Empty mappings and empty blocks contribute nothing
        if sql.is_empty() {
            return self.clone();
        }
        self.extend(|q| q.where_clauses.push(Clause { sql, raw }))
    }

    #[must_use]
    pub fn group_by<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(|q| q.group_by.extend(columns.into_iter().map(Into::into)))
    }

    /// Add a `HAVING` expression. Not checked against `group_by`.
    ///
    /// Several expressions are AND-ed, each in its own parentheses.
    #[must_use]
    pub fn having(&self, expression: impl Into<String>) -> Self {
        let sql = expression.into();
        self.extend(|q| q.having.push(Clause { sql, raw: true }))
    }

    /// Set the ordering. A later call replaces an earlier one.
    #[must_use]
    pub fn order_by(&self, column: impl Into<String>, direction: Direction) -> Self {
        let column = column.into();
        self.extend(|q| q.order = Some(OrderClause { column, direction }))
    }

    #[must_use]
    pub fn limit(&self, n: usize) -> Self {
        self.extend(|q| q.limit = Some(n))
    }

    #[must_use]
    pub fn offset(&self, n: usize) -> Self {
        self.extend(|q| q.offset = Some(n))
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Accumulated `WHERE` clauses, in call order, without the parentheses
    /// added at render time.
    #[must_use]
    pub fn where_clauses(&self) -> Vec<&str> {
        self.where_clauses.iter().map(|c| c.sql.as_str()).collect()
    }

    #[must_use]
    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    /// Render the query.
    ///
    /// Clauses appear in the fixed order `SELECT`, `FROM`, joins, `WHERE`,
    /// `GROUP BY`, `HAVING`, `ORDER BY`, `LIMIT`, `OFFSET`; absent ones are
    /// omitted.
    #[must_use]
    pub fn to_query(&self) -> String {
        let sql = self.to_string();
        trace!(table = %self.table, sql = %sql, "Rendered query");
        sql
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.select_columns.is_empty() {
            f.write_str("*")?;
        } else {
            f.write_str(&self.select_columns.join(", "))?;
        }
        write!(f, " FROM {}", self.table)?;

        for join in &self.joins {
            write!(f, " {} {} ON {}", join.kind.keyword(), join.table, join.on)?;
        }
        if !self.where_clauses.is_empty() {
            f.write_str(" WHERE ")?;
            write_conjunction(f, &self.where_clauses)?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", self.group_by.join(", "))?;
        }
        if !self.having.is_empty() {
            f.write_str(" HAVING ")?;
            write_conjunction(f, &self.having)?;
        }
        if let Some(order) = &self.order {
            write!(f, " ORDER BY {} {}", order.column, order.direction.as_str())?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}
