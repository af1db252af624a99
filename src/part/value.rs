use indexmap::IndexMap;

/// A literal attached to an [`Argument`](crate::Argument).
///
/// A `String` value that begins with `$` is treated as a reference to an
/// operation-level variable and is emitted verbatim, unquoted. This rule
/// applies recursively inside `List` and `Object` values.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}

impl Value {
    pub fn render(&self) -> String {
        match self {
            Value::Null =>
                "null".to_string(),

            Value::String(value) =>
                render_string(value),

            Value::Int(value) =>
                value.to_string(),

            Value::Float(value) =>
                value.to_string(),

            Value::Bool(value) =>
                value.to_string(),

            // List values are joined bare, without surrounding brackets.
            Value::List(values) =>
                values.iter()
                    .map(Value::render)
                    .collect::<Vec<_>>()
                    .join(", "),

            Value::Object(entries) => {
                let inner = entries.iter()
                    .map(|(key, value)| format!("{}: {}", key, value.render()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{inner}}}")
            },
        }
    }
}

fn render_string(value: &str) -> String {
    if value.starts_with('$') {
        return value.to_string();
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('"');
    escaped
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Value {
        Value::List(values)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Value {
        Value::Object(entries)
    }
}
