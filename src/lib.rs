//! Programmatic builder for GraphQL query and mutation documents.
//!
//! Callers assemble a tree of [`Query`] nodes, [`Argument`]s, [`Variable`]s,
//! and fragments, then serialize the whole tree with [`Query::render`]. The
//! output is a syntactically complete GraphQL document, compact by default
//! and pretty-printed when the [`Query::PRETTY_PRINT`] output flag is set.
//!
//! ```
//! use gql_builder::Argument;
//! use gql_builder::Query;
//! use gql_builder::Selection;
//!
//! let query = Query::root(
//!     vec![Selection::from(Query::field(
//!         "user",
//!         vec!["id", "name"],
//!         "",
//!         vec![Argument::new("id", 4)],
//!     ))],
//!     vec![],
//!     vec![],
//! );
//!
//! assert_eq!(query.render().unwrap(), "query{user(id: 4){id name}}");
//! ```

mod fragment;
mod fragment_reference;
mod inline_fragment;
mod operation_kind;
mod part;
mod pretty;
mod query;

pub use fragment::Fragment;
pub use fragment_reference::FragmentReference;
pub use inline_fragment::InlineFragment;
pub use operation_kind::OperationKind;
pub use part::Argument;
pub use part::ArgumentError;
pub use part::Selection;
pub use part::SelectionSet;
pub use part::Value;
pub use part::Variable;
pub use part::VariableType;
pub use query::Query;
pub use query::RenderError;
