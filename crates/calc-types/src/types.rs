use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Possible values that can be supplied as calculation inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum InputValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Ordered sequence of `InputValues`
    Array(Vec<InputValue>),
    /// Null value
    Null,
}

// -------------------------------------------------------------------------------------------------
// Conversions between `InputValue` and `serde_json::Value`.
// Request payloads arrive as JSON; keeping the mapping next to the type lets the CLI and the
// schema layer share it.
// -------------------------------------------------------------------------------------------------

impl From<InputValue> for serde_json::Value {
    fn from(value: InputValue) -> Self {
        match value {
            InputValue::String(s) => Self::String(s),
            InputValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            InputValue::Float(f) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
            InputValue::Boolean(b) => Self::Bool(b),
            InputValue::Array(arr) => {
                Self::Array(arr.into_iter().map(std::convert::Into::into).collect())
            }
            InputValue::Null => Self::Null,
        }
    }
}

impl TryFrom<&serde_json::Value> for InputValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(anyhow!("Unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Array(arr) => {
                let inner = arr.iter().map(Self::try_from).collect::<Result<Vec<_>, _>>()?;
                Self::Array(inner)
            }
            serde_json::Value::Object(_) => {
                return Err(anyhow!("Objects are not supported as calculation inputs"));
            }
            serde_json::Value::Null => Self::Null,
        })
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<i64>> for InputValue {
    fn from(values: Vec<i64>) -> Self {
        Self::Array(values.into_iter().map(Self::Integer).collect())
    }
}

impl From<Vec<f64>> for InputValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values.into_iter().map(Self::Float).collect())
    }
}

impl From<&[f64]> for InputValue {
    fn from(values: &[f64]) -> Self {
        Self::Array(values.iter().copied().map(Self::Float).collect())
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

impl InputValue {
    /// Get the type name as a string
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Null => "null",
        }
    }

    /// Whether the value is an `Integer` or a `Float`
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Whether the value is numerically equal to zero (`0`, `0.0` or `-0.0`).
    /// Non-numeric values are never zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            _ => false,
        }
    }

    /// Borrow the elements when this value is an `Array`
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Convenience accessor returning an `f64` representation if this value is numeric.
    /// Returns `None` when the variant is not `Integer` or `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Collect an `Array` of numbers into `f64`s.
    /// Returns `None` if this is not an array or any element is not numeric.
    #[must_use]
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        self.as_array()?.iter().map(Self::as_f64).collect()
    }
}
