mod argument_map;
mod directives;
mod field_entry;
mod field_input;
mod field_map;
mod field_selection_trait;
mod fragment;
#[allow(clippy::module_inception)]
mod operation;
mod operation_build_error;
mod operation_kind;
mod selection_node;

pub use argument_map::ArgumentMap;
pub use directives::Directives;
pub use field_entry::FieldEntry;
pub use field_input::FieldInput;
pub use field_map::FieldMap;
use field_map::AliasStyle;
pub use field_selection_trait::FieldSelectionTrait;
pub use fragment::Fragment;
pub use operation::Operation;
pub use operation_build_error::OperationBuildError;
pub use operation_kind::OperationKind;
pub use selection_node::SelectionNode;

#[cfg(test)]
mod tests;
