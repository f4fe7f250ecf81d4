use crate::operation::AliasStyle;
use crate::operation::ArgumentMap;
use crate::operation::Directives;
use crate::operation::FieldInput;
use crate::operation::FieldMap;
use crate::operation::FieldSelectionTrait;
use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::value::ArgumentValue;
use crate::value::VariableRef;
use inherent::inherent;

/// A field selection within a query or mutation: a field (or root object)
/// name, its arguments, and the sub-fields selected on it.
///
/// ```
/// use libgraphql_builder::operation::SelectionNode;
/// use libgraphql_builder::value::ArgumentValue;
///
/// let article =
///     SelectionNode::query("article")
///         .arguments([("id", ArgumentValue::from(999))])
///         .fields(["title", "id"]);
///
/// assert_eq!(article.to_string(), "article (id: 999) { id, title }");
/// ```
///
/// A node is created "standalone" ([`SelectionNode::is_operation()`] is
/// `true`). Once it is placed into another node's, a
/// [`Fragment`]'s, or an [`Operation`]'s field list it becomes a nested
/// selection. If it is placed there under an explicit alias while its type
/// name is still empty, it adopts the alias as its type name. This happens
/// once, when it is attached, and never during rendering.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionNode {
    arguments: ArgumentMap,
    directives: Directives,
    fields: FieldMap,
    fragments: Vec<Fragment>,
    is_operation: bool,
    kind: OperationKind,
    operation_name: Option<String>,
    type_name: String,
}

#[inherent]
impl FieldSelectionTrait for SelectionNode {
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

impl SelectionNode {
    /// Attach a [`Fragment`] to this node. When the node ends up inside an
    /// [`Operation`], the fragment's definition is rendered after the
    /// operation body.
    pub fn add_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Add arguments, replacing the value of any argument already set under
    /// the same name.
    pub fn arguments<I, K, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        for (name, value) in args {
            self.arguments.insert(name.into(), value.into());
        }
        self
    }

    pub fn args(&self) -> &ArgumentMap {
        &self.arguments
    }

    pub(super) fn attach(&mut self, alias: Option<&str>) {
        self.is_operation = false;
        if let Some(alias) = alias
            && self.type_name.is_empty() {
            self.type_name = alias.to_string();
        }
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.fragments.as_slice()
    }

    /// Decorate the fields selected as the given aliases with
    /// `@include(if: $variable)`.
    pub fn include_if<I, K, V>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VariableRef>,
    {
        for (alias, condition) in conditions {
            self.directives.insert_include_if(alias.into(), condition.into());
        }
        self
    }

    /// Convert this standalone node into an [`Operation`] of the same kind
    /// whose only top-level field is this node (unaliased). The operation is
    /// named after [`SelectionNode::operation_name_str()`], or left anonymous.
    pub fn into_operation(self) -> Operation {
        let name = self.operation_name.to_owned().unwrap_or_default();
        Operation::from_kind(self.kind, name).field(self)
    }

    /// Whether this node has not (yet) been nested under another selection.
    pub fn is_operation(&self) -> bool {
        self.is_operation
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// A node with an empty type name. Such a node is expected to be attached
    /// under an explicit alias, which then becomes its type name.
    pub fn new(kind: OperationKind) -> Self {
        Self {
            arguments: ArgumentMap::default(),
            directives: Directives::default(),
            fields: FieldMap::default(),
            fragments: vec![],
            is_operation: true,
            kind,
            operation_name: None,
            type_name: String::new(),
        }
    }

    pub fn mutation(type_name: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation).with_type_name(type_name)
    }

    /// Set the name used when this node is turned into an operation with
    /// [`SelectionNode::into_operation()`].
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn operation_name_str(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(type_name: impl Into<String>) -> Self {
        Self::new(OperationKind::Query).with_type_name(type_name)
    }

    /// Decorate the fields selected as the given aliases with
    /// `@skip(if: $variable)`.
    pub fn skip_if<I, K, V>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VariableRef>,
    {
        for (alias, condition) in conditions {
            self.directives.insert_skip_if(alias.into(), condition.into());
        }
        self
    }

    pub(crate) fn to_graphql_string_with(&self, directive: Option<&str>) -> String {
        let mut rendered = self.type_name.to_owned();
        if !self.arguments.is_empty() {
            rendered.push(' ');
            rendered.push_str(self.arguments.to_graphql_string().as_str());
        }
        if let Some(directive) = directive {
            rendered.push(' ');
            rendered.push_str(directive);
        }
        if !self.fields.is_empty() {
            rendered.push_str(" { ");
            rendered.push_str(
                self.fields
                    .to_graphql_string(&self.directives, AliasStyle::Always)
                    .as_str(),
            );
            rendered.push_str(" }");
        }
        rendered
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Build a node with its arguments and fields in one call. Renders exactly
    /// like the same node built by chaining [`SelectionNode::arguments()`] and
    /// [`SelectionNode::fields()`].
    pub fn with<A, K, V, F, FI>(
        kind: OperationKind,
        type_name: impl Into<String>,
        args: A,
        fields: F,
    ) -> Self
    where
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgumentValue>,
        F: IntoIterator<Item = FI>,
        FI: Into<FieldInput>,
    {
        Self::new(kind)
            .with_type_name(type_name)
            .arguments(args)
            .fields(fields)
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }
}
impl std::fmt::Display for SelectionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string_with(None).as_str())
    }
}
