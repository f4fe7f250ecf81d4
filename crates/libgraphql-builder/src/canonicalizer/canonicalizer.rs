use crate::canonicalizer::RenderError;

/// Turns the raw (syntactically valid, but unformatted) text produced by an
/// [`Operation`](crate::operation::Operation) into its final form.
///
/// [`GraphQLParserCanonicalizer`](crate::canonicalizer::GraphQLParserCanonicalizer)
/// is the implementation used by
/// [`Operation::to_graphql_string()`](crate::operation::Operation::to_graphql_string).
pub trait Canonicalizer {
    fn canonicalize(&self, raw_document: &str) -> Result<String, RenderError>;
}
