use crate::canonicalizer::literal_token::LiteralToken;
use crate::canonicalizer::literal_token::LiteralTokenKind;
use crate::canonicalizer::literal_token::tokenize;

const PLACEHOLDER_PREFIX: &str = "__preserved_literal_";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Nesting {
    Block,
    List,
    Object,
    Parens,
}

/// Value literals whose source text must survive a parse/print round trip
/// through `graphql_parser` unchanged.
///
/// `graphql_parser` stores floats as `f64` (so `3.0` prints back as `3`)
/// and object values as a `BTreeMap` (so keys print back sorted). Before
/// parsing, [`PreservedLiterals::shield`] swaps every float literal and every
/// outermost object value for a placeholder enum value. After printing,
/// [`PreservedLiterals::restore`] swaps the original text back in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct PreservedLiterals {
    literals: Vec<String>,
    placeholder_prefix: String,
}
impl PreservedLiterals {
    fn literal_for(&self, name: &str) -> Option<&str> {
        let index = name
            .strip_prefix(self.placeholder_prefix.as_str())?
            .strip_suffix("__")?
            .parse::<usize>()
            .ok()?;
        self.literals.get(index).map(String::as_str)
    }

    pub(super) fn len(&self) -> usize {
        self.literals.len()
    }

    pub(super) fn restore(&self, formatted: &str) -> String {
        if self.literals.is_empty() {
            return formatted.to_string();
        }

        let mut restored = String::with_capacity(formatted.len());
        let mut copied_to = 0;
        for token in tokenize(formatted) {
            if token.kind != LiteralTokenKind::Name {
                continue;
            }
            let Some(literal) = self.literal_for(&formatted[token.span.clone()]) else {
                continue;
            };
            restored.push_str(&formatted[copied_to..token.span.start]);
            restored.push_str(literal);
            copied_to = token.span.end;
        }
        restored.push_str(&formatted[copied_to..]);
        restored
    }

    /// Returns `raw_document` with its float and object literals replaced by
    /// placeholders, along with what is needed to put them back.
    pub(super) fn shield(raw_document: &str) -> (String, Self) {
        let mut placeholder_prefix = PLACEHOLDER_PREFIX.to_string();
        while raw_document.contains(placeholder_prefix.as_str()) {
            placeholder_prefix.push('_');
        }
        let mut preserved = Self {
            literals: vec![],
            placeholder_prefix,
        };

        let tokens = tokenize(raw_document);
        let mut shielded = String::with_capacity(raw_document.len());
        let mut copied_to = 0;
        let mut nesting = vec![];
        let mut object_start = None;
        let mut prev_kind = None;
        for (index, token) in tokens.iter().enumerate() {
            let mut replaced = None;
            match token.kind {
                LiteralTokenKind::Punctuator('{') => {
                    let is_value =
                        matches!(
                            prev_kind,
                            Some(LiteralTokenKind::Punctuator(':' | '[' | '=')),
                        ) || nesting.last() == Some(&Nesting::List);
                    if is_value {
                        object_start.get_or_insert(index);
                        nesting.push(Nesting::Object);
                    } else {
                        nesting.push(Nesting::Block);
                    }
                },

                LiteralTokenKind::Punctuator('}') => {
                    let closed = nesting.pop();
                    if closed == Some(Nesting::Object) && !nesting.contains(&Nesting::Object) {
                        replaced = object_start.take().map(|start| {
                            let object_tokens = &tokens[start..=index];
                            (
                                tokens[start].span.start..token.span.end,
                                render_value(raw_document, object_tokens),
                            )
                        });
                    }
                },

                LiteralTokenKind::Punctuator('[') => nesting.push(Nesting::List),
                LiteralTokenKind::Punctuator('(') => nesting.push(Nesting::Parens),
                LiteralTokenKind::Punctuator(']' | ')') => {
                    nesting.pop();
                },

                LiteralTokenKind::Float if object_start.is_none() => {
                    replaced = Some((
                        token.span.clone(),
                        raw_document[token.span.clone()].to_string(),
                    ));
                },

                _ => (),
            }

            if let Some((span, literal)) = replaced {
                shielded.push_str(&raw_document[copied_to..span.start]);
                shielded.push_str(preserved.placeholder_prefix.as_str());
                shielded.push_str(preserved.literals.len().to_string().as_str());
                shielded.push_str("__");
                preserved.literals.push(literal);
                copied_to = span.end;
            }
            prev_kind = Some(token.kind);
        }
        shielded.push_str(&raw_document[copied_to..]);

        (shielded, preserved)
    }
}

/// Lay out the tokens of a single value the way `graphql_parser` prints
/// values: `{a: 1, b: [2, 3]}`.
fn render_value(source: &str, tokens: &[LiteralToken]) -> String {
    let mut rendered = String::new();
    let mut prev_kind: Option<LiteralTokenKind> = None;
    for token in tokens {
        if prev_kind.is_some_and(LiteralTokenKind::ends_item) && token.kind.starts_item() {
            rendered.push_str(", ");
        }
        rendered.push_str(&source[token.span.clone()]);
        if token.kind == LiteralTokenKind::Punctuator(':') {
            rendered.push(' ');
        }
        prev_kind = Some(token.kind);
    }
    rendered
}
