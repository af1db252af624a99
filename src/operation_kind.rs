/// The kind of root operation a document describes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
}

impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}
