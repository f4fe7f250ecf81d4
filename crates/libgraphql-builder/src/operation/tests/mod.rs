mod fragment_tests;
mod operation_kind_tests;
mod ordering_tests;
