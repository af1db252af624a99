use crate::part::SelectionSet;
use crate::query::RenderError;

type Result<T> = std::result::Result<T, RenderError>;

/// A named, reusable fragment declared at the end of the document and
/// spread into selection sets via
/// [`FragmentReference`](crate::FragmentReference).
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    name: String,
    reference: String,
    selection_set: SelectionSet,
}

impl Fragment {
    pub fn new(
        name: impl Into<String>,
        reference: impl Into<String>,
        selection_set: impl Into<SelectionSet>,
    ) -> Fragment {
        Fragment {
            name: name.into(),
            reference: reference.into(),
            selection_set: selection_set.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type condition the fragment applies to.
    pub fn reference(&self) -> &str {
        self.reference.as_str()
    }

    pub fn set_selection_set(
        mut self,
        selection_set: impl Into<SelectionSet>,
    ) -> Fragment {
        self.selection_set = selection_set.into();
        self
    }

    pub fn render(&self) -> Result<String> {
        if self.selection_set.is_empty() {
            return Err(RenderError::EmptySelectionSet {
                name: self.name.clone(),
            });
        }

        Ok(format!(
            "fragment {} on {} {{{}}}",
            self.name,
            self.reference,
            self.selection_set.render()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_named_fragment_over_its_type_condition() {
        let fragment = Fragment::new("userFields", "User", vec!["id", "name"]);
        assert_eq!(
            fragment.render().unwrap(),
            "fragment userFields on User {id name}",
        );
    }

    #[test]
    fn empty_selection_set_is_fatal() {
        let fragment = Fragment::new("empty", "User", Vec::<crate::Selection>::new());
        assert_eq!(
            fragment.render(),
            Err(RenderError::EmptySelectionSet {
                name: "empty".to_string(),
            }),
        );
    }
}
