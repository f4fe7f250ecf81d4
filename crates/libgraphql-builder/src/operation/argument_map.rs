use crate::value::ArgumentValue;
use indexmap::IndexMap;

/// The arguments passed to a [`SelectionNode`](crate::operation::SelectionNode).
///
/// Entries are stored in insertion order and only sorted (by name) when
/// rendered. Inserting a name that is already present replaces its value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentMap {
    entries: IndexMap<String, ArgumentValue>,
}
impl ArgumentMap {
    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries.get(name)
    }

    pub(crate) fn insert(&mut self, name: String, value: ArgumentValue) {
        self.entries.insert(name, value);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the arguments in the order they will be rendered.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        let mut entries: Vec<_> =
            self.entries.iter()
                .map(|(name, value)| (name.as_str(), value))
                .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render as `(name: value, ...)`, or an empty string when there are no
    /// arguments.
    pub fn to_graphql_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        format!(
            "({})",
            self.iter_sorted()
                .map(|(name, value)| format!("{name}: {}", value.to_graphql_string()))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
