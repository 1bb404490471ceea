use crate::analyzer::analyzer::{validate, Diagnostic};
use crate::lexer::lexer::{classify_line, tokenize};
use crate::lexer::tokens::Token;

/// One line of the source with its diagnostic.
#[derive(Debug, Clone)]
pub struct LineReport {
    pub text: String,
    pub diagnostic: Diagnostic,
}

/// The full analysis of one source text: the comment-span-aware token
/// stream plus one report per physical line.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub tokens: Vec<Token>,
    pub lines: Vec<LineReport>,
}

/// Runs both core operations over a source text. Tokenization sees the
/// whole text (so multi-line comment spans are honored); validation is
/// line-independent, each line re-classified on its own exactly as it will
/// be judged.
pub fn analyze(source: &str) -> SourceReport {
    let tokens = tokenize(source);

    let lines = source
        .split('\n')
        .enumerate()
        .map(|(line_no, text)| LineReport {
            text: text.to_string(),
            diagnostic: validate(&classify_line(text, line_no)),
        })
        .collect();

    SourceReport { tokens, lines }
}

impl SourceReport {
    /// Reports for lines that carry any content, in source order with their
    /// original line numbers. The CLI listings skip whitespace-only lines.
    pub fn content_lines(&self) -> impl Iterator<Item = (usize, &LineReport)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, report)| !report.text.trim().is_empty())
    }
}
