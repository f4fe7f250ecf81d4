use crate::operation::AliasStyle;
use crate::operation::Directives;
use crate::operation::FieldInput;
use crate::operation::FieldMap;
use crate::operation::FieldSelectionTrait;
use inherent::inherent;

/// A named fragment definition (`fragment <name> on <type> { ... }`).
///
/// Attach it to an [`Operation`](crate::operation::Operation) (or to a
/// [`SelectionNode`](crate::operation::SelectionNode) that ends up in one)
/// and reference it from a field list with [`Fragment::spread()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Fragment {
    fields: FieldMap,
    name: String,
    on_type: String,
}

#[inherent]
impl FieldSelectionTrait for Fragment {
    pub fn field<F: Into<FieldInput>>(mut self, field: F) -> Self {
        self.fields.insert(field.into());
        self
    }

    pub fn field_map(&self) -> &FieldMap {
        &self.fields
    }

    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldInput>,
    {
        for field in fields {
            self.fields.insert(field.into());
        }
        self
    }

    pub fn remove_fields<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            self.fields.remove(alias.as_ref());
        }
        self
    }
}

impl Fragment {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>, on_type: impl Into<String>) -> Self {
        Self {
            fields: FieldMap::default(),
            name: name.into(),
            on_type: on_type.into(),
        }
    }

    /// The type this fragment applies to.
    pub fn on_type(&self) -> &str {
        self.on_type.as_str()
    }

    /// The `...name` token that references this fragment from a field list.
    pub fn spread(&self) -> String {
        format!("...{}", self.name)
    }

    pub fn with<F, FI>(
        name: impl Into<String>,
        on_type: impl Into<String>,
        fields: F,
    ) -> Self
    where
        F: IntoIterator<Item = FI>,
        FI: Into<FieldInput>,
    {
        Self::new(name, on_type).fields(fields)
    }
}
impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fragment {} on {} {{ {} }}",
            self.name,
            self.on_type,
            self.fields.to_graphql_string(
                &Directives::default(),
                AliasStyle::WhenDistinct,
            ),
        )
    }
}
