//! Unit tests for the per-line syntax validator.
//!
//! Each statement shape is exercised on its success path and on every
//! distinct failure point, always through the real classifier so the token
//! kinds match what the validator sees in production.

use super::analyzer::{validate, Diagnostic};
use crate::lexer::lexer::classify_line;

fn diagnose(line: &str) -> Diagnostic {
    validate(&classify_line(line, 0))
}

fn assert_valid(line: &str, expected: &str) {
    assert_eq!(diagnose(line), Diagnostic::Valid(expected.to_string()), "{line}");
}

fn assert_error(line: &str, expected: &str) {
    assert_eq!(
        diagnose(line),
        Diagnostic::SyntaxError(expected.to_string()),
        "{line}"
    );
}

#[test]
fn test_int_declaration() {
    assert_valid("int x = 5;", "Valid Integer declaration");
    assert_valid("int x = 5", "Valid Integer declaration");
    assert_valid("int x;", "Valid Integer declaration");
    assert_valid("int x", "Valid Integer declaration");
}

#[test]
fn test_declarations_of_every_type() {
    assert_valid("string s;", "Valid String declaration");
    assert_valid(r#"string s = "hi";"#, "Valid String declaration");
    assert_valid("char c;", "Valid Char declaration");
    assert_valid("float f = 1;", "Valid Float declaration");
    assert_valid("double d = 2;", "Valid Double declaration");
    assert_valid("bool b = true;", "Valid Boolean declaration");
    assert_valid("bool b = false;", "Valid Boolean declaration");
    assert_valid("long l = 10;", "Valid Long declaration");
}

#[test]
fn test_declaration_missing_identifier() {
    assert_error("int = 5;", "Expected an identifier after 'int' declaration");
    assert_error("int", "Expected an identifier after 'int' declaration");
}

#[test]
fn test_declaration_missing_assignment_operator() {
    assert_error(
        "int x 5;",
        "Expected an assignment operator '=' after 'int' declaration",
    );
}

#[test]
fn test_declaration_literal_type_mismatch() {
    assert_error(
        r#"int x = "5";"#,
        "int declaration should have int literal value",
    );
    assert_error(
        "string s = 5;",
        "string declaration should have string literal value",
    );
    assert_error(
        "bool b = 1;",
        "bool declaration should have bool literal value",
    );
    // No literal kind matches char, so any initializer is a mismatch.
    assert_error(
        "char c = 'x';",
        "char declaration should have char literal value",
    );
    assert_error("int x =", "int declaration should have int literal value");
}

#[test]
fn test_declaration_flag_priority() {
    // Two flags on one line report in type priority order, int first.
    assert_valid("string s; int i;", "Valid Integer declaration");
    assert_valid("long l; float f;", "Valid Float declaration");
}

#[test]
fn test_conditional_statement() {
    assert_valid("if (x > 5)", "Valid conditional Statement");
    assert_valid("if (3 == y)", "Valid conditional Statement");
    assert_valid("elif (x != y)", "Valid conditional Statement");
}

#[test]
fn test_conditional_missing_relational_operator() {
    assert_error(
        "if (x 5)",
        "Expected a relational operator after the conditional expression",
    );
}

#[test]
fn test_conditional_missing_right_operand() {
    assert_error(
        "if (x >)",
        "Expected an expression after the relational operator",
    );
    assert_error(
        "if (x >",
        "Expected an expression after the relational operator",
    );
}

#[test]
fn test_conditional_missing_close_paren() {
    assert_error("if (x > 5", "Expected ')' after the conditional expression");
    assert_error(
        "if (x > 5 {",
        "Expected ')' after the conditional expression",
    );
}

#[test]
fn test_conditional_without_open_paren_falls_through() {
    // Missing '(' is not this checker's error; the line just ends generic.
    assert_eq!(diagnose("if x > 5"), Diagnostic::Invalid);
}

#[test]
fn test_else_statement() {
    assert_valid("else {", "Valid else syntax");
    assert_valid("else print", "Valid else syntax");
    assert_error("else", "Incomplete 'else' statement");
}

#[test]
fn test_else_if_defers_to_conditional() {
    assert_valid("else if (x > 5)", "Valid conditional Statement");
    assert_error(
        "else if (x 5)",
        "Expected a relational operator after the conditional expression",
    );
}

#[test]
fn test_for_loop() {
    assert_valid("for (i=0; i<10; i++)", "Valid 'for' loop statement");
    assert_valid("for (;;)", "Valid 'for' loop statement");
}

#[test]
fn test_for_loop_failure_points() {
    assert_error("for i=0", "Missing opening parenthesis '(' in 'for' loop");
    assert_error(
        "for (i=0)",
        "Missing first semicolon ';' in 'for' loop",
    );
    assert_error(
        "for (i=0; i<10)",
        "Missing second semicolon ';' in 'for' loop",
    );
    assert_error(
        "for (i=0; i<10; i++",
        "Missing closing parenthesis ')' in 'for' loop",
    );
}

#[test]
fn test_while_loop() {
    assert_valid("while (x < 10)", "Valid 'while' loop statement");
    assert_valid("while (anything at all)", "Valid 'while' loop statement");
    assert_error("while x", "Missing opening parenthesis '(' in 'while' loop");
    assert_error(
        "while (x < 10",
        "Missing closing parenthesis ')' in 'while' loop",
    );
}

#[test]
fn test_data_binding() {
    assert_valid("<% account_holder %>", "Valid data binding syntax");
    assert_error(
        "<% account_holder",
        "Missing closing delimiter '%' for data binding",
    );
}

#[test]
fn test_reserved_word_invocation() {
    assert_valid("kadd(a,b,c)", "Valid invocation of reserved word 'kadd'");
    assert_valid("brdeposit(500)", "Valid invocation of reserved word 'brdeposit'");
    assert_valid("ktotal()", "Valid invocation of reserved word 'ktotal'");
}

#[test]
fn test_reserved_word_failure_points() {
    assert_error(
        "kadd(a,b,c",
        "Missing closing parenthesis ')' after reserved word 'kadd'",
    );
    assert_error(
        "ksub a,b",
        "Missing opening parenthesis '(' after reserved word 'ksub'",
    );
    assert_error(
        "baccount",
        "Missing opening parenthesis '(' after reserved word 'baccount'",
    );
}

#[test]
fn test_print_statement() {
    assert_valid(r#"print("hello")"#, "Valid 'print' statement");
    assert_valid("print(42)", "Valid 'print' statement");
    assert_valid("print(x)", "Valid 'print' statement");
}

#[test]
fn test_print_failure_points() {
    assert_error(
        "print x",
        "Missing opening parenthesis '(' for 'print' statement",
    );
    assert_error(
        "print(+)",
        "Missing or invalid string literal argument for 'print' statement",
    );
    assert_error(
        "print()",
        "Missing or invalid string literal argument for 'print' statement",
    );
    assert_error(
        r#"print("hello""#,
        "Missing closing parenthesis ')' after string literal",
    );
}

#[test]
fn test_generic_invalid_syntax() {
    assert_eq!(diagnose("x + y"), Diagnostic::Invalid);
    assert_eq!(diagnose(""), Diagnostic::Invalid);
    assert_eq!(diagnose("@ $"), Diagnostic::Invalid);
    assert_eq!(diagnose("# only a comment"), Diagnostic::Invalid);
}

#[test]
fn test_first_definitive_outcome_wins() {
    // The declaration sets a flag but the later print checker returns first.
    assert_valid("int x = 5; print(x)", "Valid 'print' statement");
    // An earlier definitive success ends the scan before the declaration.
    assert_valid("for (int i = 0; i < 3; i++)", "Valid 'for' loop statement");
}

#[test]
fn test_validator_is_line_local() {
    // The validator only sees the tokens it was handed; identical token
    // lists always produce identical diagnostics.
    let tokens = classify_line("kadd(a,b)", 7);
    assert_eq!(validate(&tokens), validate(&tokens));
}

#[test]
fn test_diagnostic_display() {
    assert_eq!(diagnose("int x;").to_string(), "Valid Integer declaration");
    assert_eq!(
        diagnose("kadd(a").to_string(),
        "Syntax Error: Missing closing parenthesis ')' after reserved word 'kadd'"
    );
    assert_eq!(diagnose("x + y").to_string(), "Invalid Syntax");
}
