use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{classify, Token, TokenKind};

/// Multi-line comment markers. A `/*` without its closer on the same line
/// opens a span that absorbs every following raw line until a `*/` is found.
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

lazy_static! {
    // Splits a line into maximal lexemes. Alternatives are tried left to
    // right at each position: comment-to-end-of-line, string literal,
    // data-binding markers, two-character operators, word runs, then any
    // single non-space character. Whitespace between lexemes is skipped.
    static ref SPLITTER: Regex = Regex::new(
        r#"#.*|"[^"\\]*(?:\\.[^"\\]*)*"|<%|%>|\+\+|--|\+=|-=|\*=|/=|%=|~=|==|!=|>=|<=|\|\||&&|\w+|\S"#
    )
    .unwrap();
}

/// Splits one line into lexemes and classifies each against the priority
/// table. Blind to multi-line comment markers; `tokenize` strips those
/// before this runs. A `#` lexeme swallows the rest of the physical line,
/// so the comment arrives here as a single lexeme.
pub fn classify_line(line: &str, line_no: usize) -> Vec<Token> {
    SPLITTER
        .find_iter(line)
        .map(|m| Token::new(classify(m.as_str()), m.as_str(), line_no))
        .collect()
}

/// Tokenizes a whole source text, tracking multi-line comment spans across
/// lines. The span interior becomes exactly one comment token attributed to
/// the closing line; text outside the markers on boundary lines is
/// classified normally. The scan state lives only inside this loop.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut span: Option<String> = None;

    for (line_no, raw) in source.split('\n').enumerate() {
        let mut line = raw;

        if let Some(mut pending) = span.take() {
            match line.find(BLOCK_CLOSE) {
                Some(end) => {
                    pending.push_str(&line[..end]);
                    tokens.push(Token::new(TokenKind::BlockComment, pending, line_no));
                    line = &line[end + BLOCK_CLOSE.len()..];
                }
                None => {
                    pending.push_str(line);
                    pending.push('\n');
                    span = Some(pending);
                    continue;
                }
            }
        }

        while let Some(start) = line.find(BLOCK_OPEN) {
            tokens.extend(classify_line(&line[..start], line_no));
            let after_open = &line[start + BLOCK_OPEN.len()..];
            match after_open.find(BLOCK_CLOSE) {
                Some(end) => {
                    tokens.push(Token::new(
                        TokenKind::BlockComment,
                        &after_open[..end],
                        line_no,
                    ));
                    line = &after_open[end + BLOCK_CLOSE.len()..];
                }
                None => {
                    let mut pending = String::from(after_open);
                    pending.push('\n');
                    span = Some(pending);
                    line = "";
                    break;
                }
            }
        }

        tokens.extend(classify_line(line, line_no));
    }

    tokens
}
