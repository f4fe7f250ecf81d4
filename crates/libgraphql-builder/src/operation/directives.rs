use crate::value::VariableRef;
use indexmap::IndexMap;

/// Conditional-inclusion directives (`@skip` / `@include`) keyed by the alias
/// of the field they decorate.
///
/// Only one directive is emitted per alias. When both are set for the same
/// alias, `@skip` takes precedence and the `@include` is dropped.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directives {
    include_if: IndexMap<String, VariableRef>,
    skip_if: IndexMap<String, VariableRef>,
}
impl Directives {
    pub fn include_if(&self, alias: &str) -> Option<&VariableRef> {
        self.include_if.get(alias)
    }

    pub(crate) fn insert_include_if(&mut self, alias: String, condition: VariableRef) {
        self.include_if.insert(alias, condition);
    }

    pub(crate) fn insert_skip_if(&mut self, alias: String, condition: VariableRef) {
        self.skip_if.insert(alias, condition);
    }

    pub fn is_empty(&self) -> bool {
        self.include_if.is_empty() && self.skip_if.is_empty()
    }

    pub fn skip_if(&self, alias: &str) -> Option<&VariableRef> {
        self.skip_if.get(alias)
    }

    /// The directive text to append to the field selected as `alias`, if any.
    pub(crate) fn to_graphql_string_for(&self, alias: &str) -> Option<String> {
        if let Some(condition) = self.skip_if.get(alias) {
            Some(format!("@skip(if: {condition})"))
        } else {
            self.include_if.get(alias)
                .map(|condition| format!("@include(if: {condition})"))
        }
    }
}
