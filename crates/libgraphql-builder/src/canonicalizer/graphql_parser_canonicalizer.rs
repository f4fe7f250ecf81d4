use crate::canonicalizer::Canonicalizer;
use crate::canonicalizer::RenderConfig;
use crate::canonicalizer::RenderError;
use crate::canonicalizer::preserved_literals::PreservedLiterals;
use inherent::inherent;
use std::sync::Arc;

/// [`Canonicalizer`] backed by the
/// [`graphql-parser`](https://docs.rs/graphql-parser) crate: the raw document
/// is parsed as an executable document and printed back with one selection
/// per line.
///
/// Float and object value literals are printed exactly as they appear in the
/// raw document (modulo whitespace), so `3.0` stays `3.0` and object fields
/// keep their order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphQLParserCanonicalizer {
    config: RenderConfig,
}

#[inherent]
impl Canonicalizer for GraphQLParserCanonicalizer {
    pub fn canonicalize(&self, raw_document: &str) -> Result<String, RenderError> {
        log::trace!("Canonicalizing raw document: `{raw_document}`");
        let (shielded_document, preserved) = PreservedLiterals::shield(raw_document);
        log::trace!("Preserving {} literal(s) across canonicalization", preserved.len());

        let ast_doc =
            graphql_parser::parse_query::<&str>(shielded_document.as_str())
                .map_err(|error| RenderError::ParseError {
                    error: Arc::new(error),
                    raw_document: raw_document.to_string(),
                })?;

        let mut style = graphql_parser::Style::default();
        style.indent(self.config.indent);
        Ok(preserved.restore(ast_doc.format(&style).as_str()))
    }
}

impl GraphQLParserCanonicalizer {
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}
