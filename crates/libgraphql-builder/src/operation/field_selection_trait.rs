use crate::operation::FieldInput;
use crate::operation::FieldMap;

/// Shared field-selection surface of
/// [`SelectionNode`](crate::operation::SelectionNode),
/// [`Fragment`](crate::operation::Fragment), and
/// [`Operation`](crate::operation::Operation).
///
/// Each of those types exposes these methods inherently, so this trait only
/// needs to be imported when writing code that is generic over all three.
pub trait FieldSelectionTrait: Sized {
    /// Add a single field. See [`FieldInput`] for what can be passed.
    fn field<F: Into<FieldInput>>(self, field: F) -> Self;

    /// The fields selected so far.
    fn field_map(&self) -> &FieldMap;

    /// Add several fields at once, replacing any existing entries with the
    /// same alias.
    fn fields<I, F>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldInput>;

    /// Remove fields by alias. Aliases that are not present are ignored.
    fn remove_fields<I, S>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}
