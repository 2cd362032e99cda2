use crate::error::PredicateError;
use serde_json::{Number, Value};
use std::fmt;

/// A scalar that can appear on the right-hand side of a predicate.
///
/// Built through [`IntoSqlValue`] from Rust scalars, `Option` and
/// [`serde_json::Value`]. Arrays, objects and non-finite floats are rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl SqlValue {
    /// Convert a JSON value, rejecting non-scalars.
    ///
    /// # Errors
    ///
    /// [`PredicateError::UnsupportedValue`] for arrays and objects.
    pub fn from_json(column: &str, value: Value) -> Result<Self, PredicateError> {
        match value {
            Value::Null => Ok(SqlValue::Null),
            Value::Bool(b) => Ok(SqlValue::Bool(b)),
            Value::Number(n) => Ok(SqlValue::Number(n)),
            Value::String(s) => Ok(SqlValue::Text(s)),
            Value::Array(_) => Err(PredicateError::UnsupportedValue {
                column: column.to_string(),
                kind: "array",
            }),
            Value::Object(_) => Err(PredicateError::UnsupportedValue {
                column: column.to_string(),
                kind: "object",
            }),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Rendering used by the equality-mapping form of `where`: booleans are
    /// quoted like strings (`'true'`), numbers stay bare.
    pub(crate) fn quoted(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(b) => format!("'{b}'"),
            SqlValue::Number(n) => n.to_string(),
            SqlValue::Text(s) => format!("'{s}'"),
        }
    }

    fn from_f64(column: &str, value: f64) -> Result<Self, PredicateError> {
        Number::from_f64(value)
            .map(SqlValue::Number)
            .ok_or_else(|| PredicateError::NonFiniteNumber {
                column: column.to_string(),
            })
    }
}

/// Conversion into a comparison value for a named column.
///
/// Goes through the column name so rejected values can say where they were
/// used. Floats are checked here rather than via `serde_json::Value`, which
/// would quietly turn `NaN` into `null`.
pub trait IntoSqlValue {
    /// # Errors
    ///
    /// [`PredicateError`] when the value has no scalar SQL rendering.
    fn into_sql_value(self, column: &str) -> Result<SqlValue, PredicateError>;
}

impl IntoSqlValue for SqlValue {
    fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
        Ok(self)
    }
}

impl IntoSqlValue for Value {
    fn into_sql_value(self, column: &str) -> Result<SqlValue, PredicateError> {
        SqlValue::from_json(column, self)
    }
}

impl IntoSqlValue for bool {
    fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
        Ok(SqlValue::Bool(self))
    }
}

impl IntoSqlValue for String {
    fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
        Ok(SqlValue::Text(self))
    }
}

impl IntoSqlValue for &str {
    fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
        Ok(SqlValue::Text(self.to_string()))
    }
}

impl IntoSqlValue for &String {
    fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
        Ok(SqlValue::Text(self.clone()))
    }
}

impl IntoSqlValue for f64 {
    fn into_sql_value(self, column: &str) -> Result<SqlValue, PredicateError> {
        SqlValue::from_f64(column, self)
    }
}

impl IntoSqlValue for f32 {
    fn into_sql_value(self, column: &str) -> Result<SqlValue, PredicateError> {
        SqlValue::from_f64(column, f64::from(self))
    }
}

impl<T: IntoSqlValue> IntoSqlValue for Option<T> {
    fn into_sql_value(self, column: &str) -> Result<SqlValue, PredicateError> {
        match self {
            Some(value) => value.into_sql_value(column),
            None => Ok(SqlValue::Null),
        }
    }
}

macro_rules! impl_into_sql_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoSqlValue for $ty {
                fn into_sql_value(self, _column: &str) -> Result<SqlValue, PredicateError> {
                    Ok(SqlValue::Number(Number::from(self)))
                }
            }
        )*
    };
}

impl_into_sql_value_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Literal form used in comparisons: numbers and booleans bare, strings
/// single-quoted. No escaping is applied.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(b) => write!(f, "{b}"),
            SqlValue::Number(n) => write!(f, "{n}"),
            SqlValue::Text(s) => write!(f, "'{s}'"),
        }
    }
}
