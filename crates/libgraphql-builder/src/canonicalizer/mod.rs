#[allow(clippy::module_inception)]
mod canonicalizer;
mod graphql_parser_canonicalizer;
mod literal_token;
mod preserved_literals;
mod render_config;
mod render_error;

pub use canonicalizer::Canonicalizer;
pub use graphql_parser_canonicalizer::GraphQLParserCanonicalizer;
pub use render_config::RenderConfig;
pub use render_error::RenderError;

#[cfg(test)]
mod tests;
