//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Number and string constants
//! - Relational, arithmetic and assignment operators
//! - Line tracking
//! - Error cases

use std::io::{self, Read};

use super::{
    lexer::{tokenize, Lexer, TokenStream},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("begin end if then else while loop do until for call").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::End);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Then);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::Loop);
    assert_eq!(tokens[7].kind, TokenKind::Do);
    assert_eq!(tokens[8].kind, TokenKind::Until);
    assert_eq!(tokens[9].kind, TokenKind::For);
    assert_eq!(tokens[10].kind, TokenKind::Call);
    assert_eq!(tokens[11].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo beginning x_1 _tmp End").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "beginning");
    assert_eq!(tokens[2].value, "x_1");
    assert_eq!(tokens[3].value, "_tmp");
    // keywords are case sensitive
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_constants() {
    let tokens = tokenize(r#"42 3.14 "hello world" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::NumberConstant);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::NumberConstant);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::StringConstant);
    assert_eq!(tokens[2].value, "hello world");
    assert_eq!(tokens[3].kind, TokenKind::StringConstant);
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("< <= = /= > >= + - * / := ; , ( )").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Divide,
            TokenKind::Becomes,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::LeftParenthesis,
            TokenKind::RightParenthesis,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("x:=y/=2;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Becomes);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::NotEquals);
    assert_eq!(tokens[4].kind, TokenKind::NumberConstant);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_line_numbers() {
    let tokens = tokenize("begin\n  x := 1;\n\n  y := \"a\"\nend\n").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[4].line, 2);
    assert_eq!(tokens[5].line, 4);
    assert_eq!(tokens[7].line, 4);
    assert_eq!(tokens[8].kind, TokenKind::End);
    assert_eq!(tokens[8].line, 5);
    assert_eq!(tokens[9].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[9].line, 6);
}

#[test]
fn test_end_of_file_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("x := @").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("x := \"abc\ny").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("count ;").unwrap();

    assert_eq!(tokens[0].to_string(), "Identifier 'count' on line 1");
    assert_eq!(tokens[1].to_string(), "Semicolon on line 1");
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_from_reader_failure() {
    let error = Lexer::from_reader(BrokenReader).err().unwrap();

    assert_eq!(error.get_error_name(), "Io");
}

#[test]
fn test_from_reader() {
    let mut lexer = Lexer::from_reader("begin end".as_bytes()).unwrap();

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Begin);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
}
