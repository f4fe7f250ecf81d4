use crate::canonicalizer::GraphQLParserCanonicalizer;
use crate::canonicalizer::RenderConfig;
use crate::canonicalizer::RenderError;

#[test]
fn formats_one_field_per_line_with_two_space_indent() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(canonicalizer.config(), &RenderConfig::default());
    assert_eq!(
        canonicalizer.canonicalize("query q { a , b { c } }").unwrap(),
        "query q {\n  a\n  b {\n    c\n  }\n}\n",
    );
}

#[test]
fn honors_configured_indent() {
    let canonicalizer =
        GraphQLParserCanonicalizer::new(RenderConfig::default().with_indent(4));
    assert_eq!(
        canonicalizer.canonicalize("query q { a { b } }").unwrap(),
        "query q {\n    a {\n        b\n    }\n}\n",
    );
}

#[test]
fn separates_definitions_with_a_blank_line() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(
        canonicalizer.canonicalize("query q { ...f }\n\nfragment f on T { id }").unwrap(),
        "query q {\n  ...f\n}\n\nfragment f on T {\n  id\n}\n",
    );
}

#[test]
fn is_idempotent_on_its_own_output() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    let once = canonicalizer
        .canonicalize("mutation m($x: Int!) { doIt(x: $x, flag: true) @include(if: $y) { ok } }")
        .unwrap();
    let twice = canonicalizer.canonicalize(once.as_str()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn syntax_errors_are_reported_with_the_raw_document() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    let err = canonicalizer.canonicalize("query q { a(b: ) }").unwrap_err();
    match &err {
        RenderError::ParseError { raw_document, .. } =>
            assert_eq!(raw_document, "query q { a(b: ) }"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn float_literals_are_printed_as_written() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(
        canonicalizer
            .canonicalize("query q { a(x: 3.0, y: 1.0e20, z: [1.5, 2]) { id } }")
            .unwrap(),
        "query q {\n  a(x: 3.0, y: 1.0e20, z: [1.5, 2]) {\n    id\n  }\n}\n",
    );
}

#[test]
fn object_fields_keep_their_order() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    let expected =
        "query q {\n  a(where: {zeta: 1, alpha: {b: 2.50, a: [$v, ENUM]}})\n}\n";
    assert_eq!(
        canonicalizer
            .canonicalize("query q { a(where: {zeta: 1, alpha: {b: 2.50, a: [$v, ENUM]}}) }")
            .unwrap(),
        expected,
    );
    assert_eq!(
        canonicalizer
            .canonicalize("query q { a(where: { zeta:1 , alpha : {b:2.50 a:[$v ENUM]} }) }")
            .unwrap(),
        expected,
    );
}

#[test]
fn objects_in_lists_and_default_values_keep_their_order() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(
        canonicalizer
            .canonicalize("query q($w: In = {z: 1, a: 2.0}) { a(w: $w, l: [{b: 1.0}, {a: 2}]) }")
            .unwrap(),
        "query q($w: In = {z: 1, a: 2.0}) {\n  a(w: $w, l: [{b: 1.0}, {a: 2}])\n}\n",
    );
}

#[test]
fn literal_look_alikes_inside_strings_are_untouched() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(
        canonicalizer
            .canonicalize("query q { a(s: \"3.0 {b: 1, a: 2}\", f: 0.5) }")
            .unwrap(),
        "query q {\n  a(s: \"3.0 {b: 1, a: 2}\", f: 0.5)\n}\n",
    );
}

#[test]
fn enum_values_shaped_like_placeholders_survive() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    assert_eq!(
        canonicalizer
            .canonicalize("query q { a(e: __preserved_literal_0__, f: 1.5) }")
            .unwrap(),
        "query q {\n  a(e: __preserved_literal_0__, f: 1.5)\n}\n",
    );
}

#[test]
fn preserved_literals_are_idempotent() {
    let canonicalizer = GraphQLParserCanonicalizer::default();
    let once = canonicalizer
        .canonicalize("query q { a(x: 1.0e20, o: {z: 0.5, a: [1.0]}) @skip(if: $s) { b } }")
        .unwrap();
    let twice = canonicalizer.canonicalize(once.as_str()).unwrap();
    assert_eq!(once, twice);
}
