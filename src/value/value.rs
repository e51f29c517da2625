use derive_more::{Display, From, IsVariant, TryInto};

/// A tagged element value, for sets whose elements don't share one payload type.
///
/// Equality and hashing cover the tag as well as the payload, so `Value::Int(1)` and
/// `Value::Str("1".into())` are distinct elements of the same set. Conversions in are provided by
/// [`From`] for each payload type; conversions back out are fallible and provided by
/// [`TryInto`](std::convert::TryInto), erring when the tag doesn't match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, IsVariant, TryInto)]
pub enum Value {
    /// A signed integer value.
    #[display("{_0}")]
    Int(i64),
    /// A boolean value.
    #[display("{_0}")]
    Bool(bool),
    /// A single character.
    #[display("{_0}")]
    Char(char),
    /// An owned string value.
    #[display("{_0}")]
    Str(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}
