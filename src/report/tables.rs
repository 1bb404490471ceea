use crate::lexer::tokens::Token;

use super::report::SourceReport;

/// Renders a two-column table: header row, dashed underline, left-aligned
/// columns sized to the widest cell.
fn render_table(headers: [&str; 2], rows: &[[String; 2]]) -> String {
    let mut widths = [headers[0].len(), headers[1].len()];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:w0$}  {:w1$}\n",
        headers[0],
        headers[1],
        w0 = widths[0],
        w1 = widths[1]
    ));
    out.push_str(&format!(
        "{}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1])
    ));
    for row in rows {
        out.push_str(&format!(
            "{:w0$}  {:w1$}\n",
            row[0],
            row[1],
            w0 = widths[0],
            w1 = widths[1]
        ));
    }

    out
}

/// The lexeme/token table for the whole source.
pub fn token_table(tokens: &[Token]) -> String {
    let rows: Vec<[String; 2]> = tokens
        .iter()
        .map(|t| [t.lexeme.clone(), t.kind.to_string()])
        .collect();

    render_table(["Lexemes", "Tokens"], &rows)
}

/// The line/diagnostic table, one row per content line.
pub fn result_table(report: &SourceReport) -> String {
    let rows: Vec<[String; 2]> = report
        .content_lines()
        .map(|(_, line)| [line.text.trim().to_string(), line.diagnostic.to_string()])
        .collect();

    render_table(["Code", "Parser Result"], &rows)
}

/// The error listing printed before the result table: one block per line
/// whose diagnostic is a syntax error.
pub fn error_listing(report: &SourceReport) -> String {
    let mut out = String::new();
    for (line_no, line) in report.content_lines() {
        if line.diagnostic.is_error() {
            out.push_str(&format!(
                "Invalid Syntax on line {}: {}\n{}\n",
                line_no + 1,
                line.text.trim(),
                line.diagnostic.message()
            ));
        }
    }

    out
}
