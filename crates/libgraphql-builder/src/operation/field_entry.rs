use crate::operation::SelectionNode;

/// What a [`FieldMap`](crate::operation::FieldMap) stores under an alias.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum FieldEntry {
    /// A leaf field (or a `...fragmentName` spread) selected by name.
    Field(String),

    /// A nested selection. `explicit_alias` records whether the caller chose
    /// the alias or it was taken from the node's own type name.
    Selection {
        explicit_alias: bool,
        node: Box<SelectionNode>,
    },
}
impl FieldEntry {
    pub fn as_field_name(&self) -> Option<&str> {
        if let Self::Field(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn as_selection(&self) -> Option<&SelectionNode> {
        if let Self::Selection { node, .. } = self {
            Some(node.as_ref())
        } else {
            None
        }
    }

    /// Whether this entry is a fragment spread (e.g. `...imageFragment`).
    pub fn is_fragment_spread(&self) -> bool {
        self.as_field_name().is_some_and(|name| name.starts_with("..."))
    }
}
