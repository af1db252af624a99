use crate::part::SelectionSet;
use crate::query::RenderError;

type Result<T> = std::result::Result<T, RenderError>;

/// A type-conditioned selection embedded directly in a selection set.
///
/// Inline fragments never carry arguments or variables; those operations
/// are deliberately absent from this type. With an empty selection set the
/// fragment degenerates to a bare `...Name` spread.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineFragment {
    name: String,
    selection_set: SelectionSet,
}

impl InlineFragment {
    pub fn new(name: impl Into<String>) -> InlineFragment {
        InlineFragment {
            name: name.into(),
            selection_set: SelectionSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_selection_set(
        mut self,
        selection_set: impl Into<SelectionSet>,
    ) -> InlineFragment {
        self.selection_set = selection_set.into();
        self
    }

    pub fn render(&self) -> Result<String> {
        if self.selection_set.is_empty() {
            return Ok(format!("...{}", self.name));
        }

        Ok(format!(
            "... on {}{{{}}}",
            self.name,
            self.selection_set.render()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_renders_as_spread() {
        assert_eq!(
            InlineFragment::new("userFields").render().unwrap(),
            "...userFields",
        );
    }

    #[test]
    fn populated_fragment_renders_type_condition() {
        let fragment = InlineFragment::new("User")
            .set_selection_set(vec!["id", "name"]);
        assert_eq!(fragment.render().unwrap(), "... on User{id name}");
    }
}
