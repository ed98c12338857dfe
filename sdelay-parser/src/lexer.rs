//! # Lexer for delay-loop listings

use logos::Logos;

/// Tokens of a single listing line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Comment text after `;`, trimmed
    #[regex(r";[^\n]*", |lex| lex.slice()[1..].trim().to_string())]
    Comment(String),

    /// Register (s0-sF, any case)
    #[regex(r"[sS][0-9a-fA-F]", |lex| lex.slice().to_string(), priority = 3)]
    Register(String),

    /// Identifier (mnemonics, conditions, labels)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Hexadecimal number
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u64::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u64),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u64),

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,
}
