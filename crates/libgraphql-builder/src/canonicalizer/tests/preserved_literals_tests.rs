use crate::canonicalizer::literal_token::LiteralTokenKind;
use crate::canonicalizer::literal_token::tokenize;
use crate::canonicalizer::preserved_literals::PreservedLiterals;

#[test]
fn tokenizer_skips_ignored_tokens() {
    let kinds: Vec<LiteralTokenKind> =
        tokenize("\u{feff}{ a, # comment 1.0\n ...b }")
            .into_iter()
            .map(|token| token.kind)
            .collect();
    assert_eq!(kinds, vec![
        LiteralTokenKind::Punctuator('{'),
        LiteralTokenKind::Name,
        LiteralTokenKind::Spread,
        LiteralTokenKind::Name,
        LiteralTokenKind::Punctuator('}'),
    ]);
}

#[test]
fn tokenizer_classifies_numbers() {
    let source = "1 -2 3.0 4e5 -6.5E-7";
    let tokens: Vec<(LiteralTokenKind, &str)> =
        tokenize(source)
            .into_iter()
            .map(|token| (token.kind, &source[token.span]))
            .collect();
    assert_eq!(tokens, vec![
        (LiteralTokenKind::Int, "1"),
        (LiteralTokenKind::Int, "-2"),
        (LiteralTokenKind::Float, "3.0"),
        (LiteralTokenKind::Float, "4e5"),
        (LiteralTokenKind::Float, "-6.5E-7"),
    ]);
}

#[test]
fn tokenizer_keeps_strings_whole() {
    let source = r#"a("x \" 1.0", """block "" {}""") b"#;
    let tokens: Vec<&str> =
        tokenize(source)
            .into_iter()
            .map(|token| &source[token.span])
            .collect();
    assert_eq!(
        tokens,
        vec!["a", "(", r#""x \" 1.0""#, r#""""block "" {}""""#, ")", "b"],
    );
}

#[test]
fn shield_replaces_floats_and_outermost_objects() {
    let (shielded, preserved) =
        PreservedLiterals::shield("{ a(x: 3.0, o: { k: [1.5] }, i: 2) { b } }");
    assert_eq!(
        shielded,
        "{ a(x: __preserved_literal_0__, o: __preserved_literal_1__, i: 2) { b } }",
    );
    assert_eq!(preserved.len(), 2);
    assert_eq!(
        preserved.restore("a(x: __preserved_literal_0__, o: __preserved_literal_1__)"),
        "a(x: 3.0, o: {k: [1.5]})",
    );
}

#[test]
fn shield_leaves_selection_sets_alone() {
    let raw = "query q($v: [Int] = [1]) { a @include(if: $v) { b } ...f }";
    let (shielded, preserved) = PreservedLiterals::shield(raw);
    assert_eq!(shielded, raw);
    assert_eq!(preserved.len(), 0);
    assert_eq!(preserved.restore(raw), raw);
}

#[test]
fn placeholder_prefix_avoids_names_in_the_document() {
    let (shielded, preserved) =
        PreservedLiterals::shield("{ a(e: __preserved_literal_0__, f: 1.5) }");
    assert_eq!(
        shielded,
        "{ a(e: __preserved_literal_0__, f: __preserved_literal__0__) }",
    );
    assert_eq!(
        preserved.restore(shielded.as_str()),
        "{ a(e: __preserved_literal_0__, f: 1.5) }",
    );
}
