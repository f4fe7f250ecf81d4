use crate::operation::OperationBuildError;
use crate::operation::OperationKind;

#[test]
fn parses_query_and_mutation_keywords() {
    assert_eq!("query".parse::<OperationKind>(), Ok(OperationKind::Query));
    assert_eq!("mutation".parse::<OperationKind>(), Ok(OperationKind::Mutation));
}

#[test]
fn rejects_subscription() {
    assert_eq!(
        "subscription".parse::<OperationKind>(),
        Err(OperationBuildError::InvalidOperationType {
            operation_type: "subscription".to_string(),
        }),
    );
}

#[test]
fn keywords_are_case_sensitive() {
    assert!("Query".parse::<OperationKind>().is_err());
    assert!("".parse::<OperationKind>().is_err());
}

#[test]
fn display_is_the_keyword() {
    assert_eq!(OperationKind::Query.to_string(), "query");
    assert_eq!(OperationKind::Mutation.to_string(), "mutation");
}

#[test]
fn invalid_operation_type_error_message_names_the_keyword() {
    let err = "subscription".parse::<OperationKind>().unwrap_err();
    assert!(err.to_string().contains("`subscription`"));
}
