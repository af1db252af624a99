/// An operation-level variable declaration, rendered inside the
/// parenthesized list that follows the root operation name.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    name: String,
    var_type: VariableType,
    required: bool,
    multiple: bool,
}

impl Variable {
    /// A leading `$` on `name` is optional; it is normalized on output.
    pub fn new(
        name: impl Into<String>,
        var_type: VariableType,
        required: bool,
        multiple: bool,
    ) -> Variable {
        Variable {
            name: name.into(),
            var_type,
            required,
            multiple,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Renders `$name: Type` with `!` when required and `[...]` when
    /// multiple; required wraps the inner type, so both together produce
    /// `[Type!]`.
    pub fn render(&self) -> String {
        let rendered = format!(
            "${}: {}{}{}{}",
            self.name.trim_start_matches('$'),
            if self.multiple { "[" } else { "" },
            self.var_type.name(),
            if self.required { "!" } else { "" },
            if self.multiple { "]" } else { "" },
        );
        collapse_spaces(&rendered)
    }
}

/// The declared type of a [`Variable`]: one of the built-in scalars, or
/// `Named` for a schema-defined type name.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableType {
    Boolean,
    Float,
    ID,
    Int,
    String,
    Named(String),
}

impl VariableType {
    pub fn name(&self) -> &str {
        match self {
            VariableType::Boolean => "Boolean",
            VariableType::Float => "Float",
            VariableType::ID => "ID",
            VariableType::Int => "Int",
            VariableType::String => "String",
            VariableType::Named(name) => name.as_str(),
        }
    }
}

fn collapse_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
