use crate::canonicalizer::Canonicalizer;
use crate::canonicalizer::GraphQLParserCanonicalizer;
use crate::canonicalizer::RenderError;
use crate::operation::AliasStyle;
use crate::operation::Directives;
use crate::operation::FieldInput;
use crate::operation::FieldMap;
use crate::operation::FieldSelectionTrait;
use crate::operation::Fragment;
use crate::operation::OperationBuildError;
use crate::operation::OperationKind;
use crate::value::VariableRef;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// The root of a GraphQL document: a named query or mutation with its
/// variable declarations, top-level fields, and fragment definitions.
///
/// ```
/// use libgraphql_builder::operation::Operation;
/// use libgraphql_builder::operation::SelectionNode;
///
/// let op =
///     Operation::new("query", "articlesQuery").unwrap()
///         .variables([("$id", "Int")])
///         .field(("article", SelectionNode::query("article")
///             .arguments([("id", "$id")])
///             .fields(["title", "id"])));
///
/// assert_eq!(op.to_graphql_string().unwrap(), concat!(
///     "query articlesQuery($id: Int) {\n",
///     "  article: article(id: $id) {\n",
///     "    id\n",
///     "    title\n",
///     "  }\n",
///     "}\n",
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    fields: FieldMap,
    fragments: Vec<Fragment>,
    kind: OperationKind,
    name: String,
    /// Keyed by variable name without the leading `$`.
    variables: IndexMap<String, String>,
}

#[inherent]
impl FieldSelectionTrait for Operation {
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

impl Operation {
    /// Attach a [`Fragment`] definition. Fragments are rendered after the
    /// operation body in the order they were added.
    pub fn add_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// The fragments that will be rendered after the operation body: those
    /// attached directly to this [`Operation`] first, then those attached to
    /// nested [`SelectionNode`](crate::operation::SelectionNode)s. When two
    /// fragments share a name, only the first one is kept.
    pub fn collect_fragments(&self) -> Vec<&Fragment> {
        let mut found: Vec<&Fragment> = vec![];
        for fragment in &self.fragments {
            if !found.iter().any(|f| f.name() == fragment.name()) {
                found.push(fragment);
            }
        }
        for fragment in &self.fragments {
            fragment.field_map().collect_nested_fragments(&mut found);
        }
        self.fields.collect_nested_fragments(&mut found);
        found
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.fragments.as_slice()
    }

    pub fn from_kind(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            fields: FieldMap::default(),
            fragments: vec![],
            kind,
            name: name.into(),
            variables: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn mutation(name: impl Into<String>) -> Self {
        Self::from_kind(OperationKind::Mutation, name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Create an operation from its keyword (`"query"` or `"mutation"`).
    ///
    /// Any other keyword fails with
    /// [`OperationBuildError::InvalidOperationType`].
    pub fn new(operation_type: &str, name: impl Into<String>) -> Result<Self> {
        let kind = operation_type.parse::<OperationKind>()?;
        Ok(Self::from_kind(kind, name))
    }

    pub fn query(name: impl Into<String>) -> Self {
        Self::from_kind(OperationKind::Query, name)
    }

    /// Render the raw document and pass it through the given
    /// [`Canonicalizer`].
    pub fn render_with<C: Canonicalizer + ?Sized>(
        &self,
        canonicalizer: &C,
    ) -> std::result::Result<String, RenderError> {
        log::debug!(
            "Rendering {} operation `{}` with {} top-level field(s).",
            self.kind,
            self.name,
            self.fields.len(),
        );
        canonicalizer.canonicalize(self.to_raw_string().as_str())
    }

    /// Render the document in its canonical, multi-line form.
    pub fn to_graphql_string(&self) -> std::result::Result<String, RenderError> {
        self.render_with(&GraphQLParserCanonicalizer::default())
    }

    /// Render the document text as built, before canonicalization.
    pub fn to_raw_string(&self) -> String {
        let mut rendered = self.kind.keyword().to_string();
        if !self.name.is_empty() {
            rendered.push(' ');
            rendered.push_str(self.name.as_str());
        }
        if !self.variables.is_empty() {
            rendered.push('(');
            rendered.push_str(
                self.variables.iter()
                    .map(|(name, type_str)| format!("${name}: {type_str}"))
                    .collect::<Vec<_>>()
                    .join(", ")
                    .as_str(),
            );
            rendered.push(')');
        }
        rendered.push_str(" { ");
        rendered.push_str(
            self.fields
                .to_graphql_string(&Directives::default(), AliasStyle::Always)
                .as_str(),
        );
        rendered.push_str(" }");

        for fragment in self.collect_fragments() {
            rendered.push_str("\n\n");
            rendered.push_str(fragment.to_string().as_str());
        }
        rendered
    }

    /// Declare a single variable. The name may be given with or without the
    /// leading `$`.
    pub fn variable(mut self, name: impl AsRef<str>, type_str: impl ToString) -> Self {
        self.variables.insert(
            VariableRef::new(name).name().to_string(),
            type_str.to_string(),
        );
        self
    }

    /// The declared variables (name without `$` -> type) in declaration order.
    pub fn variable_types(&self) -> &IndexMap<String, String> {
        &self.variables
    }

    /// Declare variables, replacing the type of any variable already declared
    /// under the same name. Declaration order is kept when rendering.
    pub fn variables<I, K, T>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: ToString,
    {
        for (name, type_str) in variables {
            self = self.variable(name, type_str);
        }
        self
    }

    /// Build an operation with its variables and top-level fields in one call.
    pub fn with<V, VK, VT, F, FI>(
        operation_type: &str,
        name: impl Into<String>,
        variables: V,
        fields: F,
    ) -> Result<Self>
    where
        V: IntoIterator<Item = (VK, VT)>,
        VK: AsRef<str>,
        VT: ToString,
        F: IntoIterator<Item = FI>,
        FI: Into<FieldInput>,
    {
        Ok(Self::new(operation_type, name)?
            .variables(variables)
            .fields(fields))
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_raw_string().as_str())
    }
}
