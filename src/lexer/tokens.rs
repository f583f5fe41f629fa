use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("loop", TokenKind::Loop);
        map.insert("do", TokenKind::Do);
        map.insert("until", TokenKind::Until);
        map.insert("for", TokenKind::For);
        map.insert("call", TokenKind::Call);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfFile,
    Identifier,
    NumberConstant,
    StringConstant,

    // Relational
    Less,
    LessEquals,
    Equals,
    NotEquals, // /=
    Greater,
    GreaterEquals,

    // Arithmetic
    Plus,
    Minus,
    Times,
    Divide,

    Becomes, // :=
    Semicolon,
    Comma,
    LeftParenthesis,
    RightParenthesis,

    // Reserved
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Loop,
    Do,
    Until,
    For,
    Call,
}

impl TokenKind {
    /// Kinds whose literal text is part of the trace output.
    pub fn carries_text(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::NumberConstant | TokenKind::StringConstant
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.carries_text() {
            write!(f, "{} '{}' on line {}", self.kind, self.value, self.line)
        } else {
            write!(f, "{} on line {}", self.kind, self.line)
        }
    }
}
