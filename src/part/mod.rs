mod argument;
mod selection_set;
mod value;
mod variable;

pub use argument::Argument;
pub use argument::ArgumentError;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use value::Value;
pub use variable::Variable;
pub use variable::VariableType;
