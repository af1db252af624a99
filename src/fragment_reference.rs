/// A bare `...Name` spread referring to a previously declared
/// [`Fragment`](crate::Fragment).
///
/// Unlike [`InlineFragment`](crate::InlineFragment), a reference can never
/// carry its own selection set; no such operation exists on this type.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentReference {
    name: String,
}

impl FragmentReference {
    pub fn new(name: impl Into<String>) -> FragmentReference {
        FragmentReference { name: name.into() }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn render(&self) -> String {
        format!("...{}", self.name)
    }
}
