use crate::fragment_reference::FragmentReference;
use crate::inline_fragment::InlineFragment;
use crate::query::Query;
use crate::query::RenderError;
use std::sync::Arc;

type Result<T> = std::result::Result<T, RenderError>;

/// One entry in a [`SelectionSet`]: a plain field name, a shared
/// [`InlineFragment`], or an exclusively owned nested [`Query`].
///
/// Inline fragments are held behind an [`Arc`] because the same fragment
/// may appear in several selection sets; they are never mutated after
/// construction, so the sharing is safe.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(String),
    InlineFragment(Arc<InlineFragment>),
    Query(Box<Query>),
}

impl Selection {
    pub(crate) fn render(&self) -> Result<String> {
        match self {
            Selection::Field(name) => Ok(name.clone()),
            Selection::InlineFragment(fragment) => fragment.render(),
            Selection::Query(query) => query.render(),
        }
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Selection {
        Selection::Field(name.to_string())
    }
}

impl From<String> for Selection {
    fn from(name: String) -> Selection {
        Selection::Field(name)
    }
}

/// Turning a [`Query`] into a selection marks it nested: its variable list
/// stops being emitted and its alias renders as a `name:` prefix. This is
/// the one construction-time side effect in the crate.
impl From<Query> for Selection {
    fn from(query: Query) -> Selection {
        Selection::Query(Box::new(query.set_nested()))
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Selection {
        Selection::InlineFragment(Arc::new(fragment))
    }
}

impl From<Arc<InlineFragment>> for Selection {
    fn from(fragment: Arc<InlineFragment>) -> Selection {
        Selection::InlineFragment(fragment)
    }
}

/// A fragment reference is structurally an inline fragment with no
/// selection set of its own; both render as `...Name`.
impl From<FragmentReference> for Selection {
    fn from(reference: FragmentReference) -> Selection {
        Selection::InlineFragment(Arc::new(InlineFragment::new(reference.name())))
    }
}

/// The ordered group of items selected under one field or under the
/// document root. The caller wraps the rendered text in braces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    selections: Vec<Selection>,
}

impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> SelectionSet {
        SelectionSet { selections }
    }

    pub fn count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// True when at least one selection is something other than a nested
    /// operation node, i.e. a plain field or an inline fragment. The root
    /// bracket layout in [`Query`] hangs off this.
    pub fn has_fields(&self) -> bool {
        self.selections.iter().any(
            |selection| !matches!(selection, Selection::Query(_)),
        )
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }

    /// Renders each selection and joins them with single spaces; no
    /// trailing separator, no braces.
    pub fn render(&self) -> Result<String> {
        let mut rendered = Vec::with_capacity(self.selections.len());
        for selection in &self.selections {
            rendered.push(selection.render()?);
        }
        Ok(rendered.join(" "))
    }
}

impl<T: Into<Selection>> From<Vec<T>> for SelectionSet {
    fn from(selections: Vec<T>) -> SelectionSet {
        SelectionSet::new(selections.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Selection>> FromIterator<T> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SelectionSet {
        SelectionSet::new(iter.into_iter().map(Into::into).collect())
    }
}
