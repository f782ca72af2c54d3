pub mod formatter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Null,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Applies `op` when both sides are numbers, otherwise yields `Null`.
    fn numeric(&self, other: &Value, op: impl FnOnce(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(op(*lhs, *rhs)),
            _ => Value::Null,
        }
    }
}

// Arithmetic
impl Value {
    pub fn add(&self, other: &Value) -> Value {
        self.numeric(other, |lhs, rhs| lhs + rhs)
    }

    pub fn subtract(&self, other: &Value) -> Value {
        self.numeric(other, |lhs, rhs| lhs - rhs)
    }

    pub fn multiply(&self, other: &Value) -> Value {
        self.numeric(other, |lhs, rhs| lhs * rhs)
    }

    pub fn divide(&self, other: &Value) -> Value {
        self.numeric(other, |lhs, rhs| lhs / rhs)
    }

    pub fn remainder(&self, other: &Value) -> Value {
        self.numeric(other, |lhs, rhs| lhs % rhs)
    }
}
