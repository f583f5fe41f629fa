use std::io::Read;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostic, Fault},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A source of classified tokens, pulled one at a time by the parser.
pub trait TokenStream {
    /// Returns the next token. Once the input is exhausted every call
    /// yields an `EndOfFile` token.
    fn next_token(&mut self) -> Result<Token, Diagnostic>;
}

/// Handles a pattern match at the lexer's position. Returns `None` for
/// input that produces no token, such as whitespace.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Patterns are anchored and tried in order, so longer operators
    // must come before their one character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"\\n]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Becomes, ":=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "/=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Times, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Divide, "/") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParenthesis, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParenthesis, ")") },
    ];
}

#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
        }
    }

    /// Reads the whole of `reader` up front; a read failure is an `Io` fault.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Lexer, Diagnostic> {
        let mut source = String::new();
        reader.read_to_string(&mut source).map_err(|error| {
            Diagnostic::new(
                Fault::Io {
                    message: error.to_string(),
                },
                0,
            )
        })?;

        Ok(Lexer::new(source))
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

impl TokenStream for Lexer {
    fn next_token(&mut self) -> Result<Token, Diagnostic> {
        while !self.at_eof() {
            let handler = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            let Some(pattern) = handler else {
                let token = self.at().map(String::from).unwrap_or_default();
                return Err(Diagnostic::new(Fault::UnrecognisedToken { token }, self.line));
            };

            if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                trace!("lexed {}", token);
                return Ok(token);
            }
        }

        Ok(MK_TOKEN!(TokenKind::EndOfFile, String::from("EOF"), self.line))
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());

    Some(MK_TOKEN!(TokenKind::NumberConstant, matched, lexer.line))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());

    None
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());

    let literal = matched[1..matched.len() - 1].to_string();
    Some(MK_TOKEN!(TokenKind::StringConstant, literal, lexer.line))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = lexer.matched(regex);
    lexer.advance_n(value.len());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, value, lexer.line))
}

/// Drains a lexer over `source`, returning every token up to and
/// including `EndOfFile`.
pub fn tokenize(source: impl Into<String>) -> Result<Vec<Token>, Diagnostic> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
