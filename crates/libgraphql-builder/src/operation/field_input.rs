use crate::operation::SelectionNode;

/// A single entry passed to `fields()` on a
/// [`SelectionNode`](crate::operation::SelectionNode),
/// [`Fragment`](crate::operation::Fragment), or
/// [`Operation`](crate::operation::Operation).
///
/// Usually built through one of the `From` conversions:
///
/// | Caller passes                    | Stored as                         |
/// |----------------------------------|-----------------------------------|
/// | `"id"`                           | `id` selected as `id`             |
/// | `("articleId", "id")`            | `id` selected as `articleId`      |
/// | `SelectionNode`                  | the node, keyed by its type name  |
/// | `("formats", SelectionNode)`     | the node, selected as `formats`   |
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    AliasedField {
        alias: String,
        name: String,
    },
    AliasedSelection {
        alias: String,
        node: SelectionNode,
    },
    Field(String),
    /// A node stored under its type name. Adding a second unaliased node
    /// with the same type name replaces the first, even when their arguments
    /// differ; alias one of them with [`FieldInput::AliasedSelection`] to
    /// select both.
    Selection(SelectionNode),
}
impl FieldInput {
    /// The alias this input will be stored under.
    pub fn alias(&self) -> &str {
        match self {
            Self::AliasedField { alias, .. }
                | Self::AliasedSelection { alias, .. }
                => alias.as_str(),
            Self::Field(name) => name.as_str(),
            Self::Selection(node) => node.type_name(),
        }
    }
}
impl std::convert::From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Field(value.to_string())
    }
}
impl std::convert::From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<(&str, &str)> for FieldInput {
    fn from((alias, name): (&str, &str)) -> Self {
        Self::AliasedField {
            alias: alias.to_string(),
            name: name.to_string(),
        }
    }
}
impl std::convert::From<(String, String)> for FieldInput {
    fn from((alias, name): (String, String)) -> Self {
        Self::AliasedField { alias, name }
    }
}
impl std::convert::From<SelectionNode> for FieldInput {
    fn from(node: SelectionNode) -> Self {
        Self::Selection(node)
    }
}
impl std::convert::From<(&str, SelectionNode)> for FieldInput {
    fn from((alias, node): (&str, SelectionNode)) -> Self {
        Self::AliasedSelection {
            alias: alias.to_string(),
            node,
        }
    }
}
impl std::convert::From<(String, SelectionNode)> for FieldInput {
    fn from((alias, node): (String, SelectionNode)) -> Self {
        Self::AliasedSelection { alias, node }
    }
}
