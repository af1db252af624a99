use crate::part::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, ArgumentError>;

/// A single `name: value` pair inside a field's argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    name: String,
    value: Value,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Argument {
        Argument {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build an argument whose value must be object-shaped, i.e. a keyed
    /// map rendered as `{key: value, ...}`. Any other value shape is
    /// rejected at construction time.
    pub fn object(
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Argument> {
        let name = name.into();
        let value = value.into();
        if !matches!(value, Value::Object(_)) {
            return Err(ArgumentError::NotAnObject { name });
        }
        Ok(Argument { name, value })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn render(&self) -> String {
        format!("{}: {}", self.name, self.value.render())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("Object-shaped argument `{name}` requires an object value")]
    NotAnObject {
        name: String,
    },
}
