use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

/// Control-flow and primitive-type words of the language.
pub const KEYWORDS: &[&str] = &[
    "int", "string", "char", "float", "double", "bool", "long", "if", "else", "while", "scan",
    "break", "default", "print", "false", "none", "true", "and", "as", "assert", "continue",
    "def", "del", "elif", "except", "finally", "for", "from", "global", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "with", "yield",
];

/// Banking/financial domain vocabulary, invocable only as `name(args)`.
pub const RESERVED_WORDS: &[&str] = &[
    "kdelete",
    "kremove",
    "kupdate",
    "ksection",
    "ktotal",
    "kadd",
    "ksub",
    "financial_statement",
    "asset",
    "liability",
    "equity",
    "revenues",
    "expenses",
    "gains",
    "losses",
    "net_income",
    "operating",
    "investing",
    "financing",
    "ocbalance",
    "ccbalance",
    "bank_system",
    "baccount",
    "bafreeze",
    "baclose",
    "account_number",
    "account_holder",
    "credit",
    "debit",
    "account_balance",
    "brdeposit",
    "brwithdraw",
    "brtransfer",
    "bcpayroll",
    "bcrollout",
    "bcemployee",
    "rate",
    "overtime",
    "earnings",
    "net_pay",
    "deductions",
    "taxes",
    "benefits",
    "biloan",
    "biinvest",
    "principal",
    "interest_rate",
    "time_period",
    "compound_interest",
    "simple_interest",
    "return_on_investment",
    "loan_amount",
    "installment_amount",
    "loan_term",
    "total_payment",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    AssignmentOp,
    UnaryOp,
    ArithmeticOp,
    LogicOp,
    RelationalOp,
    Keyword,
    ReservedWord,
    IntLiteral,
    StringLiteral,
    Identifier,
    LineComment,
    BlockComment,
    Comma,
    Colon,
    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    BindOpen,
    BindClose,
    Whitespace,
    Newline,
    Unknown,
}

impl TokenKind {
    /// Display/wire name of the kind, as shown in the token table and the
    /// `/analyze` response.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::AssignmentOp => "OPERATOR_ASSIGNMENT",
            TokenKind::UnaryOp => "UNARY_OPERATOR",
            TokenKind::ArithmeticOp => "OPERATOR_ARITHMETIC",
            TokenKind::LogicOp => "OPERATOR_LOGIC",
            TokenKind::RelationalOp => "OPERATOR_RELATION",
            TokenKind::Keyword => "KEYWORDS",
            TokenKind::ReservedWord => "RESERVEDWORDS",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LineComment => "SINGLE_LINE_COMMENT",
            TokenKind::BlockComment => "MULTI_LINE_COMMENT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenBrace => "LBRACE",
            TokenKind::CloseBrace => "RBRACE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::BindOpen => "DATA_BINDING_START",
            TokenKind::BindClose => "DATA_BINDING_END",
            TokenKind::Whitespace => "WHITE_SPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.lexeme)
    }
}

fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!(r"\A(?:{})\z", pattern)).unwrap()
}

lazy_static! {
    /// The classification table: ordered `(kind, pattern)` pairs evaluated
    /// in sequence against a whole lexeme. Earlier entries win on ties, so
    /// precedence is exactly the order written here: compound assignment
    /// before bare `=`, keywords before reserved words, reserved words
    /// before identifiers.
    pub static ref CLASSIFICATION: Vec<(TokenKind, Regex)> = vec![
        (TokenKind::AssignmentOp, full_match(r"\+=|-=|\*=|/=|%=|~=|=")),
        (TokenKind::UnaryOp, full_match(r"\+\+|--")),
        (TokenKind::ArithmeticOp, full_match(r"\+|-|\*|/|%|~|\^")),
        (TokenKind::LogicOp, full_match(r"!|\|\||&&")),
        (TokenKind::RelationalOp, full_match(r"==|!=|>=|<=|>|<")),
        (TokenKind::Keyword, full_match(&KEYWORDS.join("|"))),
        (TokenKind::ReservedWord, full_match(&RESERVED_WORDS.join("|"))),
        (TokenKind::IntLiteral, full_match(r"[0-9]+")),
        (TokenKind::StringLiteral, full_match(r#""[^"\\]*(?:\\.[^"\\]*)*""#)),
        (TokenKind::Identifier, full_match(r"[a-zA-Z_][a-zA-Z0-9_]*")),
        (TokenKind::LineComment, full_match(r"#.*")),
        (TokenKind::Comma, full_match(r",")),
        (TokenKind::Colon, full_match(r":")),
        (TokenKind::Semicolon, full_match(r";")),
        (TokenKind::OpenBrace, full_match(r"\{")),
        (TokenKind::CloseBrace, full_match(r"\}")),
        (TokenKind::OpenParen, full_match(r"\(")),
        (TokenKind::CloseParen, full_match(r"\)")),
        (TokenKind::OpenBracket, full_match(r"\[")),
        (TokenKind::CloseBracket, full_match(r"\]")),
        (TokenKind::BindOpen, full_match(r"<%")),
        (TokenKind::BindClose, full_match(r"%>")),
        (TokenKind::Whitespace, full_match(r"\s+")),
        (TokenKind::Newline, full_match(r"\n")),
    ];
}

/// Classifies a single lexeme: first full match in the table wins, anything
/// unmatched degrades to `Unknown`.
pub fn classify(lexeme: &str) -> TokenKind {
    for (kind, pattern) in CLASSIFICATION.iter() {
        if pattern.is_match(lexeme) {
            return *kind;
        }
    }

    TokenKind::Unknown
}
