use std::fmt;

/// What a binding holds: an integer, or the undefined result of a failed
/// operation (division by zero, overflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Undefined,
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Undefined => None,
        }
    }
}

impl From<Option<i64>> for Value {
    fn from(result: Option<i64>) -> Self {
        result.map_or(Value::Undefined, Value::Integer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}
