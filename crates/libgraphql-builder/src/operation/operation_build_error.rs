use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OperationBuildError {
    #[error(
        "`{operation_type}` is not a valid operation type. Expected `query` \
        or `mutation`."
    )]
    InvalidOperationType {
        operation_type: String,
    },
}
