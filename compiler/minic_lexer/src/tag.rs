//! Token kinds produced by the scanner.
//!
//! [`TokenKind`] is a closed, one-byte enumeration. Discriminants are grouped
//! by category so a raw `u8` coming from a trace or a test fixture can be
//! mapped back with [`TokenKind::from_u8`] or named with [`token_kind_name`].
//!
//! | Range  | Category                      |
//! |--------|-------------------------------|
//! | 0-17   | single-character punctuation  |
//! | 18-23  | two-character operators       |
//! | 24-36  | keywords                      |
//! | 37-39  | literals and identifiers      |
//! | 40-41  | error and end-of-input        |

use std::fmt;

/// Name returned by [`token_kind_name`] for bytes outside the token set.
pub const UNRECOGNIZED_KIND_NAME: &str = "Unrecognized token type";

/// Kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Single-character tokens (0-17) ===
    /// `(`
    LeftParen = 0,
    /// `)`
    RightParen = 1,
    /// `{`
    LeftBrace = 2,
    /// `}`
    RightBrace = 3,
    /// `;`
    Semicolon = 4,
    /// `,`
    Comma = 5,
    /// `+`
    Plus = 6,
    /// `-`
    Minus = 7,
    /// `*`
    Star = 8,
    /// `/`
    Slash = 9,
    /// `%`
    Modulo = 10,
    /// `<`
    Less = 11,
    /// `>`
    Greater = 12,
    /// `=`
    Equal = 13,
    /// `!`
    Bang = 14,
    /// `[`
    LeftBracket = 15,
    /// `]`
    RightBracket = 16,
    /// `.`
    Dot = 17,

    // === Two-character operators (18-23) ===
    /// `<=`
    LessEqual = 18,
    /// `>=`
    GreaterEqual = 19,
    /// `==`
    EqualEqual = 20,
    /// `!=`
    BangEqual = 21,
    /// `||`
    PipePipe = 22,
    /// `&&`
    AmpAmp = 23,

    // === Keywords (24-36) ===
    If = 24,
    Else = 25,
    While = 26,
    Return = 27,
    Break = 28,
    New = 29,
    Size = 30,
    Void = 31,
    Bool = 32,
    Int = 33,
    Float = 34,
    True = 35,
    False = 36,

    // === Literals (37-39) ===
    /// Decimal integer literal, e.g. `42`.
    IntLit = 37,
    /// Decimal float literal with a fractional part, e.g. `3.14`.
    FloatLit = 38,
    /// Identifier that is not a keyword.
    Ident = 39,

    // === Special (40-41) ===
    /// Unexpected character. The token's lexeme is a fixed message.
    Error = 40,
    /// End of input. Always zero-length.
    Eof = 41,
}

/// Every kind, in discriminant order.
const ALL_KINDS: [TokenKind; 42] = [
    TokenKind::LeftParen,
    TokenKind::RightParen,
    TokenKind::LeftBrace,
    TokenKind::RightBrace,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Modulo,
    TokenKind::Less,
    TokenKind::Greater,
    TokenKind::Equal,
    TokenKind::Bang,
    TokenKind::LeftBracket,
    TokenKind::RightBracket,
    TokenKind::Dot,
    TokenKind::LessEqual,
    TokenKind::GreaterEqual,
    TokenKind::EqualEqual,
    TokenKind::BangEqual,
    TokenKind::PipePipe,
    TokenKind::AmpAmp,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Return,
    TokenKind::Break,
    TokenKind::New,
    TokenKind::Size,
    TokenKind::Void,
    TokenKind::Bool,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::True,
    TokenKind::False,
    TokenKind::IntLit,
    TokenKind::FloatLit,
    TokenKind::Ident,
    TokenKind::Error,
    TokenKind::Eof,
];

impl TokenKind {
    /// All token kinds, in discriminant order.
    pub const ALL: &'static [TokenKind] = &ALL_KINDS;

    /// Map a raw discriminant back to its kind.
    pub fn from_u8(raw: u8) -> Option<TokenKind> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Canonical name used in token traces, e.g. `TOKEN_LEFT_PAREN`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "TOKEN_LEFT_PAREN",
            Self::RightParen => "TOKEN_RIGHT_PAREN",
            Self::LeftBrace => "TOKEN_LEFT_BRACE",
            Self::RightBrace => "TOKEN_RIGHT_BRACE",
            Self::Semicolon => "TOKEN_SEMICOLON",
            Self::Comma => "TOKEN_COMMA",
            Self::Plus => "TOKEN_PLUS",
            Self::Minus => "TOKEN_MINUS",
            Self::Star => "TOKEN_STAR",
            Self::Slash => "TOKEN_SLASH",
            Self::Modulo => "TOKEN_MODULO",
            Self::Less => "TOKEN_LESS",
            Self::Greater => "TOKEN_GREATER",
            Self::Equal => "TOKEN_EQUAL",
            Self::Bang => "TOKEN_BANG",
            Self::LeftBracket => "TOKEN_LEFT_BRACKET",
            Self::RightBracket => "TOKEN_RIGHT_BRACKET",
            Self::Dot => "TOKEN_DOT",
            Self::LessEqual => "TOKEN_LE",
            Self::GreaterEqual => "TOKEN_GE",
            Self::EqualEqual => "TOKEN_EQ",
            Self::BangEqual => "TOKEN_NE",
            Self::PipePipe => "TOKEN_OR",
            Self::AmpAmp => "TOKEN_AND",
            Self::If => "TOKEN_IF",
            Self::Else => "TOKEN_ELSE",
            Self::While => "TOKEN_WHILE",
            Self::Return => "TOKEN_RETURN",
            Self::Break => "TOKEN_BREAK",
            Self::New => "TOKEN_NEW",
            Self::Size => "TOKEN_SIZE",
            Self::Void => "TOKEN_VOID",
            Self::Bool => "TOKEN_BOOL",
            Self::Int => "TOKEN_INT",
            Self::Float => "TOKEN_FLOAT",
            Self::True => "TOKEN_TRUE",
            Self::False => "TOKEN_FALSE",
            Self::IntLit => "TOKEN_INT_LIT",
            Self::FloatLit => "TOKEN_FLOAT_LIT",
            Self::Ident => "TOKEN_IDENT",
            Self::Error => "TOKEN_ERROR",
            Self::Eof => "TOKEN_EOF",
        }
    }

    /// Returns the fixed source text for tokens that always spell the same.
    ///
    /// `None` for literals, identifiers, errors, and EOF.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Modulo => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::Bang => "!",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Dot => ".",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::PipePipe => "||",
            Self::AmpAmp => "&&",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Return => "return",
            Self::Break => "break",
            Self::New => "new",
            Self::Size => "size",
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::True => "true",
            Self::False => "false",
            Self::IntLit | Self::FloatLit | Self::Ident | Self::Error | Self::Eof => {
                return None;
            }
        };
        Some(text)
    }

    /// Single- or two-character punctuation and operators.
    pub const fn is_operator(self) -> bool {
        (self as u8) <= (Self::AmpAmp as u8)
    }

    /// Reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 24..=36)
    }

    /// Integer and float literals, plus `true`/`false`.
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::IntLit | Self::FloatLit | Self::True | Self::False)
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> {
        Self::from_u8(raw).ok_or(raw)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the token kind with raw discriminant `raw`.
///
/// Returns [`UNRECOGNIZED_KIND_NAME`] for any value outside the token set.
pub fn token_kind_name(raw: u8) -> &'static str {
    TokenKind::from_u8(raw).map_or(UNRECOGNIZED_KIND_NAME, TokenKind::name)
}

#[cfg(test)]
mod tests;
