use crate::operation::Directives;
use crate::operation::FieldEntry;
use crate::operation::FieldInput;
use crate::operation::Fragment;
use indexmap::IndexMap;

/// How an explicitly-aliased nested selection is written out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AliasStyle {
    /// Always write `alias: type ...`, even when both are the same name.
    Always,
    /// Only write the alias when it differs from the node's type.
    WhenDistinct,
}

/// The set of fields selected by a node, keyed by alias.
///
/// Entries keep insertion order in storage and are sorted by alias when
/// iterated with [`FieldMap::iter_sorted()`] or rendered. Inserting an alias
/// that is already present replaces the previous entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldMap {
    entries: IndexMap<String, FieldEntry>,
}
impl FieldMap {
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    pub fn get(&self, alias: &str) -> Option<&FieldEntry> {
        self.entries.get(alias)
    }

    /// Store a [`FieldInput`].
    ///
    /// Nested selections are marked as no longer being standalone operations.
    /// A nested selection attached under an explicit alias while its type is
    /// still empty takes that alias as its type.
    pub(crate) fn insert(&mut self, input: FieldInput) {
        match input {
            FieldInput::AliasedField { alias, name } => {
                self.entries.insert(alias, FieldEntry::Field(name));
            },

            FieldInput::AliasedSelection { alias, mut node } => {
                node.attach(Some(alias.as_str()));
                self.entries.insert(alias, FieldEntry::Selection {
                    explicit_alias: true,
                    node: Box::new(node),
                });
            },

            FieldInput::Field(name) => {
                self.entries.insert(name.to_owned(), FieldEntry::Field(name));
            },

            FieldInput::Selection(mut node) => {
                node.attach(None);
                self.entries.insert(node.type_name().to_string(), FieldEntry::Selection {
                    explicit_alias: false,
                    node: Box::new(node),
                });
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries sorted by alias, which is the order they render in.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        let mut entries: Vec<_> =
            self.entries.iter()
                .map(|(alias, entry)| (alias.as_str(), entry))
                .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn remove(&mut self, alias: &str) -> Option<FieldEntry> {
        self.entries.shift_remove(alias)
    }

    /// Collect fragments attached to nested selections (recursively, in
    /// render order), skipping any whose name is already in `found`.
    pub(crate) fn collect_nested_fragments<'a>(&'a self, found: &mut Vec<&'a Fragment>) {
        for (_, entry) in self.iter_sorted() {
            let Some(node) = entry.as_selection() else {
                continue
            };

            for fragment in node.fragments() {
                if !found.iter().any(|f| f.name() == fragment.name()) {
                    found.push(fragment);
                }
                fragment.field_map().collect_nested_fragments(found);
            }
            node.field_map().collect_nested_fragments(found);
        }
    }

    pub(crate) fn to_graphql_string(
        &self,
        directives: &Directives,
        alias_style: AliasStyle,
    ) -> String {
        self.iter_sorted()
            .map(|(alias, entry)| match entry {
                FieldEntry::Field(name) if name.starts_with("...") =>
                    name.to_owned(),

                FieldEntry::Field(name) => {
                    let mut field =
                        if alias == name.as_str() {
                            name.to_owned()
                        } else {
                            format!("{alias}: {name}")
                        };
                    if let Some(directive) = directives.to_graphql_string_for(alias) {
                        field.push(' ');
                        field.push_str(directive.as_str());
                    }
                    field
                },

                FieldEntry::Selection { explicit_alias, node } => {
                    let directive = directives.to_graphql_string_for(alias);
                    let rendered = node.to_graphql_string_with(directive.as_deref());
                    let write_alias = *explicit_alias && match alias_style {
                        AliasStyle::Always => true,
                        AliasStyle::WhenDistinct => alias != node.type_name(),
                    };
                    if write_alias {
                        format!("{alias}: {rendered}")
                    } else {
                        rendered
                    }
                },
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
