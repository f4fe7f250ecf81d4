mod graphql_parser_canonicalizer_tests;
mod preserved_literals_tests;
