use crate::operation::OperationBuildError;
use std::str::FromStr;

/// The kind of a GraphQL operation this crate can build.
///
/// Parsing an [`OperationKind`] from text is the only place an operation
/// keyword is validated:
///
/// ```
/// use libgraphql_builder::operation::OperationKind;
///
/// assert_eq!("query".parse::<OperationKind>().unwrap(), OperationKind::Query);
/// assert!("subscription".parse::<OperationKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    pub const MUTATION_KEYWORD: &'static str = "mutation";
    pub const QUERY_KEYWORD: &'static str = "query";

    /// The keyword that introduces an operation of this kind in a GraphQL
    /// document.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => Self::MUTATION_KEYWORD,
            Self::Query => Self::QUERY_KEYWORD,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
impl FromStr for OperationKind {
    type Err = OperationBuildError;

    fn from_str(operation_type: &str) -> Result<Self, Self::Err> {
        match operation_type {
            Self::MUTATION_KEYWORD => Ok(Self::Mutation),
            Self::QUERY_KEYWORD => Ok(Self::Query),
            _ => Err(OperationBuildError::InvalidOperationType {
                operation_type: operation_type.to_string(),
            }),
        }
    }
}
