//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Lox lexer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal payload carried by number and string tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenLiteral {
    /// Numeric literal, always materialized as a double
    Number(f64),
    /// String literal contents (without the surrounding quotes)
    String(String),
}

impl fmt::Display for TokenLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenLiteral::Number(n) => write!(f, "{}", n),
            TokenLiteral::String(s) => write!(f, "{}", s),
        }
    }
}

/// Token type produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text of this token
    pub lexeme: String,
    /// Literal payload for numbers and strings
    pub literal: Option<TokenLiteral>,
    /// Source line (1-based)
    pub line: usize,
}

impl Token {
    /// Create a new token without a literal payload
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Create a new token carrying a literal payload
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: TokenLiteral,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    /// Synthesize an identifier token (used for host-side lookups)
    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::Identifier, name, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {}", self.kind, self.lexeme),
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    // Operators
    /// `-` (subtraction or negation)
    Minus,
    /// `+` (addition or concatenation)
    Plus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `!` (logical not)
    Bang,
    /// `!=`
    BangEqual,
    /// `=` (assignment)
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal ("hello")
    String,
    /// Number literal (42, 3.14)
    Number,

    // Keywords
    /// `and`
    And,
    /// `break`
    Break,
    /// `class` (reserved)
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super` (reserved)
    Super,
    /// `this` (reserved)
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    // Special
    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        match s {
            "and" => Some(TokenKind::And),
            "break" => Some(TokenKind::Break),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Get the canonical upper-case name of this token kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Break => "BREAK",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new(TokenKind::Identifier, "answer", 3);
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "answer");
        assert_eq!(token.literal, None);
        assert_eq!(token.line, 3);
    }

    #[test]
    fn test_keyword_detection() {
        assert_eq!(TokenKind::is_keyword("and"), Some(TokenKind::And));
        assert_eq!(TokenKind::is_keyword("break"), Some(TokenKind::Break));
        assert_eq!(TokenKind::is_keyword("fun"), Some(TokenKind::Fun));
        assert_eq!(TokenKind::is_keyword("nil"), Some(TokenKind::Nil));
        assert_eq!(TokenKind::is_keyword("print"), Some(TokenKind::Print));
        assert_eq!(TokenKind::is_keyword("while"), Some(TokenKind::While));
    }

    #[test]
    fn test_reserved_keywords() {
        assert_eq!(TokenKind::is_keyword("class"), Some(TokenKind::Class));
        assert_eq!(TokenKind::is_keyword("super"), Some(TokenKind::Super));
        assert_eq!(TokenKind::is_keyword("this"), Some(TokenKind::This));
    }

    #[test]
    fn test_non_keyword() {
        assert_eq!(TokenKind::is_keyword("foo"), None);
        assert_eq!(TokenKind::is_keyword("fn"), None);
        assert_eq!(TokenKind::is_keyword("Var"), None); // Case-sensitive
    }

    #[test]
    fn test_token_display() {
        let number = Token::with_literal(TokenKind::Number, "1.5", TokenLiteral::Number(1.5), 1);
        assert_eq!(number.to_string(), "NUMBER 1.5 1.5");

        let string = Token::with_literal(
            TokenKind::String,
            "\"hi\"",
            TokenLiteral::String("hi".to_string()),
            1,
        );
        assert_eq!(string.to_string(), "STRING \"hi\" hi");

        let paren = Token::new(TokenKind::LeftParen, "(", 1);
        assert_eq!(paren.to_string(), "LEFT_PAREN (");
    }

    #[test]
    fn test_token_kind_as_str() {
        assert_eq!(TokenKind::LessEqual.as_str(), "LESS_EQUAL");
        assert_eq!(TokenKind::Eof.as_str(), "EOF");
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
    }
}
