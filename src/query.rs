use crate::fragment::Fragment;
use crate::operation_kind::OperationKind;
use crate::part::Argument;
use crate::part::SelectionSet;
use crate::part::Variable;
use crate::pretty;
use thiserror::Error;

type Result<T> = std::result::Result<T, RenderError>;

/// One GraphQL operation node: either the document root or a single field
/// selection nested somewhere below it.
///
/// Nodes are assembled through the factory functions and the chainable
/// `set_*` mutators, then serialized with [`Query::render`]. Rendering
/// never mutates the node, so it is idempotent and repeatable. Mutating a
/// node from one thread while rendering it from another is a caller error:
/// build the tree first, then treat it as frozen.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    name: String,
    alias: String,
    kind: OperationKind,
    selection_set: SelectionSet,
    arguments: Vec<Argument>,
    variables: Vec<Variable>,
    fragments: Vec<Fragment>,
    nested: bool,
    line_indent: usize,
    flags: u32,
}

impl Query {
    /// Output flag bit that routes [`Query::render`] through the
    /// pretty-printer. The only bit currently defined.
    pub const PRETTY_PRINT: u32 = 1;

    pub fn new(name: impl Into<String>) -> Query {
        Query {
            name: name.into(),
            alias: String::new(),
            kind: OperationKind::Query,
            selection_set: SelectionSet::default(),
            arguments: vec![],
            variables: vec![],
            fragments: vec![],
            nested: false,
            line_indent: 4,
            flags: 0,
        }
    }

    /// Build the document root: never nested, and the only node whose
    /// variable and fragment lists are emitted.
    pub fn root(
        selection_set: impl Into<SelectionSet>,
        fragments: Vec<Fragment>,
        variables: Vec<Variable>,
    ) -> Query {
        Query::new("")
            .set_selection_set(selection_set)
            .set_fragments(fragments)
            .set_variables(variables)
    }

    /// Build a named node without marking it nested: the root operation
    /// itself, or the inner shape of a stand-alone fragment.
    pub fn operation(
        name: impl Into<String>,
        alias: impl Into<String>,
        selection_set: impl Into<SelectionSet>,
        variables: Vec<Variable>,
    ) -> Query {
        Query::new(name)
            .set_alias(alias)
            .set_selection_set(selection_set)
            .set_variables(variables)
    }

    /// Build a field node for use inside a parent selection set. The node
    /// is marked nested immediately.
    pub fn field(
        name: impl Into<String>,
        selection_set: impl Into<SelectionSet>,
        alias: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Query {
        Query::new(name)
            .set_nested()
            .set_alias(alias)
            .set_selection_set(selection_set)
            .set_arguments(arguments)
    }

    /// Build a named, reusable [`Fragment`].
    pub fn fragment(
        name: impl Into<String>,
        reference: impl Into<String>,
        selection_set: impl Into<SelectionSet>,
    ) -> Fragment {
        Fragment::new(name, reference, selection_set)
    }

    pub fn set_alias(mut self, alias: impl Into<String>) -> Query {
        self.alias = alias.into();
        self
    }

    pub fn set_arguments(mut self, arguments: Vec<Argument>) -> Query {
        self.arguments = arguments;
        self
    }

    /// Fragments are only emitted from the document root; nested nodes
    /// keep whatever is set here but never render it.
    pub fn set_fragments(mut self, fragments: Vec<Fragment>) -> Query {
        self.fragments = fragments;
        self
    }

    pub fn set_kind(mut self, kind: OperationKind) -> Query {
        self.kind = kind;
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Query {
        self.name = name.into();
        self
    }

    pub fn set_selection_set(
        mut self,
        selection_set: impl Into<SelectionSet>,
    ) -> Query {
        self.selection_set = selection_set.into();
        self
    }

    pub fn set_variables(mut self, variables: Vec<Variable>) -> Query {
        self.variables = variables;
        self
    }

    /// One-way and idempotent: once a node is nested it stays nested.
    pub fn set_nested(mut self) -> Query {
        self.nested = true;
        self
    }

    /// Odd widths are ignored; the previous (or default) value stays.
    pub fn set_line_indent(mut self, line_indent: usize) -> Query {
        if line_indent % 2 == 0 {
            self.line_indent = line_indent;
        }
        self
    }

    pub fn set_output_flags(mut self, flags: u32) -> Query {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn line_indent(&self) -> usize {
        self.line_indent
    }

    /// Serialize this node and, recursively, everything below it, using
    /// the stored output flags.
    pub fn render(&self) -> Result<String> {
        self.render_with_flags(self.flags)
    }

    /// Serialize with an explicit flag set, overriding the stored one.
    pub fn render_with_flags(&self, flags: u32) -> Result<String> {
        if self.selection_set.is_empty() {
            return Err(RenderError::EmptySelectionSet {
                name: self.name.clone(),
            });
        }

        let mut query = if self.nested {
            let alias = if self.alias.is_empty() {
                String::new()
            } else {
                format!("{}: ", self.alias)
            };
            format!(
                "{}{}{}{{{}}}",
                alias,
                self.name,
                self.render_arguments(),
                self.selection_set.render()?,
            )
        } else {
            self.render_root()?
        };

        for fragment in &self.fragments {
            query.push('\n');
            query.push_str(&fragment.render()?);
        }

        if flags & Query::PRETTY_PRINT == Query::PRETTY_PRINT {
            query = pretty::prettify(&query, self.line_indent);
        }

        log::trace!("rendered GraphQL document ({} bytes)", query.len());
        Ok(query)
    }

    fn render_arguments(&self) -> String {
        if self.arguments.is_empty() {
            return String::new();
        }

        let rendered = self.arguments.iter()
            .map(Argument::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!("({rendered})")
    }

    fn render_variables(&self) -> String {
        if self.nested || self.variables.is_empty() {
            return String::new();
        }

        let rendered = self.variables.iter()
            .map(Variable::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!("({rendered})")
    }

    fn render_root(&self) -> Result<String> {
        let keyword = self.kind.keyword();

        // A named root whose selection set holds plain fields is itself a
        // field to select: it gets wrapped one level below an anonymous
        // operation. A selection set of nested nodes only (or an unnamed
        // root) stays flat.
        if !self.name.is_empty() && self.selection_set.has_fields() {
            Ok(format!(
                "{}{{{}{}{{{}}}}}",
                keyword,
                self.name,
                self.render_variables(),
                self.selection_set.render()?,
            ))
        } else {
            let name = if self.name.is_empty() {
                String::new()
            } else {
                format!(" {}", self.name)
            };
            Ok(format!(
                "{}{}{}{{{}}}",
                keyword,
                name,
                self.render_variables(),
                self.selection_set.render()?,
            ))
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    /// Every node and fragment must select at least one item before it
    /// can be serialized. `name` is empty for the anonymous root.
    #[error("Cannot serialize node `{name}`: empty selection sets are not supported")]
    EmptySelectionSet {
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Selection;
    use crate::part::VariableType;

    #[test]
    fn nested_field_with_single_selection() {
        let query = Query::field("name", vec!["id"], "", vec![]);
        assert_eq!(query.render().unwrap(), "name{id}");
    }

    #[test]
    fn nested_field_with_alias_and_arguments() {
        let query = Query::field(
            "user",
            vec!["id"],
            "hero",
            vec![Argument::new("id", 4), Argument::new("active", true)],
        );
        assert_eq!(
            query.render().unwrap(),
            "hero: user(id: 4, active: true){id}",
        );
    }

    #[test]
    fn named_root_with_plain_fields_is_double_wrapped() {
        let query = Query::new("user").set_selection_set(vec!["id", "name"]);
        assert_eq!(query.render().unwrap(), "query{user{id name}}");
    }

    #[test]
    fn unnamed_root_stays_flat() {
        let query = Query::new("").set_selection_set(vec!["id"]);
        assert_eq!(query.render().unwrap(), "query{id}");
    }

    #[test]
    fn named_root_without_plain_fields_stays_flat() {
        let query = Query::new("GetUser").set_selection_set(vec![
            Selection::from(Query::field("user", vec!["id"], "", vec![])),
        ]);
        assert_eq!(query.render().unwrap(), "query GetUser{user{id}}");
    }

    #[test]
    fn root_variables_are_emitted_parenthesized() {
        let query = Query::root(
            vec![Selection::from(Query::field(
                "user",
                vec!["id"],
                "",
                vec![Argument::new("id", "$id")],
            ))],
            vec![],
            vec![Variable::new("id", VariableType::ID, true, false)],
        );
        assert_eq!(
            query.render().unwrap(),
            "query($id: ID!){user(id: $id){id}}",
        );
    }

    #[test]
    fn nested_nodes_do_not_emit_variables() {
        let query = Query::field("user", vec!["id"], "", vec![])
            .set_variables(vec![Variable::new("id", VariableType::ID, true, false)]);
        assert_eq!(query.render().unwrap(), "user{id}");
    }

    #[test]
    fn mutation_kind_swaps_the_operation_keyword() {
        let query = Query::new("createUser")
            .set_kind(OperationKind::Mutation)
            .set_selection_set(vec!["id"]);
        assert_eq!(query.render().unwrap(), "mutation{createUser{id}}");
    }

    #[test]
    fn empty_selection_set_is_fatal_even_when_nested() {
        let root = Query::new("user");
        assert_eq!(
            root.render(),
            Err(RenderError::EmptySelectionSet {
                name: "user".to_string(),
            }),
        );

        let nested = Query::field("user", Vec::<Selection>::new(), "", vec![]);
        assert!(nested.render().is_err());
    }

    #[test]
    fn odd_line_indent_is_ignored() {
        let query = Query::new("user").set_line_indent(3);
        assert_eq!(query.line_indent(), 4);

        let query = query.set_line_indent(2);
        assert_eq!(query.line_indent(), 2);

        let query = query.set_line_indent(7);
        assert_eq!(query.line_indent(), 2);
    }

    #[test]
    fn rendering_is_repeatable() {
        let query = Query::new("user").set_selection_set(vec!["id"]);
        let first = query.render().unwrap();
        let second = query.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fragments_are_appended_line_separated() {
        let query = Query::root(
            vec![Selection::from(crate::FragmentReference::new("userFields"))],
            vec![Query::fragment("userFields", "User", vec!["id", "name"])],
            vec![],
        );
        assert_eq!(
            query.render().unwrap(),
            "query{...userFields}\nfragment userFields on User {id name}",
        );
    }

    #[test]
    fn explicit_flags_override_stored_flags() {
        let query = Query::new("user")
            .set_selection_set(vec!["id"])
            .set_output_flags(Query::PRETTY_PRINT);

        // Stored flags pretty-print; an explicit zero suppresses it.
        assert!(query.render().unwrap().contains('\n'));
        assert_eq!(
            query.render_with_flags(0).unwrap(),
            "query{user{id}}",
        );
    }
}
