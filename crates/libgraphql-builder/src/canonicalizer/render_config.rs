/// Formatting options for
/// [`GraphQLParserCanonicalizer`](crate::canonicalizer::GraphQLParserCanonicalizer).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RenderConfig {
    /// Number of spaces per nesting level.
    pub indent: u32,
}
impl RenderConfig {
    pub const DEFAULT_INDENT: u32 = 2;

    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }
}
impl std::default::Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Self::DEFAULT_INDENT,
        }
    }
}
