use serde::{Deserialize, Serialize};
use std::fmt;

/// A value carried by a variable: a number, a numeric series, or free text.
///
/// Values round-trip through the canvas JSON untagged, so `42`, `[1.0, 2.0]`
/// and `"n/a"` all deserialize without a discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Series(Vec<f64>),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<f64>> for Value {
    fn from(series: Vec<f64>) -> Self {
        Value::Series(series)
    }
}

/// Formats a number the way the canvas displays it: two decimal digits when
/// a fractional part is present, no decimal point otherwise.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.fract() == 0.0 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{:.2}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Series(values) => {
                for (i, n) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    fmt_number(*n, f)?;
                }
                Ok(())
            }
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A named value owned by a node's data.
///
/// Names are unique within their owning list by convention; the editors in
/// [`crate::panel`] create entries empty and mutate them field by field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A variable produced by the external formula evaluation step.
///
/// Same shape as [`Variable`], but read-only output: it is displayed, never
/// edited in place.
pub type AssignedVariable = Variable;
