/// A reference to a variable declared on the enclosing
/// [`Operation`](crate::operation::Operation).
///
/// The name is stored without its leading `$`, so both `"$id"` and `"id"`
/// produce the same [`VariableRef`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableRef(String);
impl VariableRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self(name.strip_prefix('$').unwrap_or(name).to_string())
    }

    /// The variable name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.0.as_str()
    }

    pub fn to_graphql_string(&self) -> String {
        format!("${}", self.0)
    }
}
impl std::fmt::Display for VariableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}
impl std::convert::From<&str> for VariableRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
impl std::convert::From<String> for VariableRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
