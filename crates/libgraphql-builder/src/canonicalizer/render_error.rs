use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum RenderError {
    #[error("Error parsing generated GraphQL document: {error}")]
    ParseError {
        #[source]
        error: Arc<graphql_parser::query::ParseError>,
        raw_document: String,
    },
}
impl RenderError {
    /// The raw document text that could not be canonicalized.
    pub fn raw_document(&self) -> &str {
        match self {
            Self::ParseError { raw_document, .. } => raw_document.as_str(),
        }
    }
}
