use std::ops::Range;

/// The coarse token classes needed to find value literals in GraphQL
/// source text. Ignored tokens (whitespace, commas, comments, BOM) are never
/// produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LiteralTokenKind {
    Float,
    Int,
    Name,
    Punctuator(char),
    Spread,
    String,
    Unknown,
}
impl LiteralTokenKind {
    /// Whether a token of this kind can be the last token of a value or of
    /// an object field.
    pub(super) fn ends_item(self) -> bool {
        matches!(
            self,
            Self::Float
                | Self::Int
                | Self::Name
                | Self::String
                | Self::Punctuator(']' | '}'),
        )
    }

    /// Whether a token of this kind can be the first token of a value or of
    /// an object field.
    pub(super) fn starts_item(self) -> bool {
        matches!(
            self,
            Self::Float
                | Self::Int
                | Self::Name
                | Self::String
                | Self::Punctuator('$' | '[' | '{'),
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct LiteralToken {
    pub kind: LiteralTokenKind,
    /// Byte range of the token within the tokenized source.
    pub span: Range<usize>,
}

/// Split `source` into [`LiteralToken`]s.
///
/// Never fails: malformed input (unterminated strings, stray characters)
/// still produces tokens so that the real parser can report the error.
pub(super) fn tokenize(source: &str) -> Vec<LiteralToken> {
    let bytes = source.as_bytes();
    let mut tokens = vec![];
    let mut pos = 0;
    while pos < bytes.len() {
        let start = pos;
        let kind = match bytes[pos] {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => {
                pos += 1;
                continue;
            },

            b'#' => {
                while pos < bytes.len() && !matches!(bytes[pos], b'\n' | b'\r') {
                    pos += 1;
                }
                continue;
            },

            b'"' => {
                pos = string_end(bytes, pos);
                LiteralTokenKind::String
            },

            b'.' if bytes[pos..].starts_with(b"...") => {
                pos += 3;
                LiteralTokenKind::Spread
            },

            b'-' | b'0'..=b'9' => {
                let (end, is_float) = number_end(bytes, pos);
                pos = end;
                if is_float {
                    LiteralTokenKind::Float
                } else {
                    LiteralTokenKind::Int
                }
            },

            b'_' | b'a'..=b'z' | b'A'..=b'Z' => {
                pos += 1;
                while pos < bytes.len()
                    && (bytes[pos] == b'_' || bytes[pos].is_ascii_alphanumeric()) {
                    pos += 1;
                }
                LiteralTokenKind::Name
            },

            punctuator @ (b'!' | b'$' | b'&' | b'(' | b')' | b':' | b'='
                | b'@' | b'[' | b']' | b'{' | b'}' | b'|') => {
                pos += 1;
                LiteralTokenKind::Punctuator(punctuator as char)
            },

            _ => {
                let ch = source[pos..].chars().next().unwrap_or('\0');
                pos += ch.len_utf8();
                if ch == '\u{feff}' {
                    continue;
                }
                LiteralTokenKind::Unknown
            },
        };
        tokens.push(LiteralToken { kind, span: start..pos });
    }
    tokens
}

fn number_end(bytes: &[u8], start: usize) -> (usize, bool) {
    let skip_digits = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut pos = start;
    if bytes[pos] == b'-' {
        pos += 1;
    }
    pos = skip_digits(pos);

    let mut is_float = false;
    if pos < bytes.len() && bytes[pos] == b'.' && !bytes[pos..].starts_with(b"...") {
        is_float = true;
        pos = skip_digits(pos + 1);
    }
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        is_float = true;
        pos += 1;
        if pos < bytes.len() && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        pos = skip_digits(pos);
    }
    (pos, is_float)
}

fn string_end(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut pos = start + 3;
        while pos < bytes.len() {
            if bytes[pos..].starts_with(b"\\\"\"\"") {
                pos += 4;
            } else if bytes[pos..].starts_with(b"\"\"\"") {
                return pos + 3;
            } else {
                pos += 1;
            }
        }
        return bytes.len();
    }

    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            b'\n' | b'\r' => return pos,
            _ => pos += 1,
        }
    }
    bytes.len()
}
