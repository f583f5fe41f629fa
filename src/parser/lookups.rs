use std::collections::HashMap;

use crate::{errors::errors::Diagnostic, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<(), Diagnostic>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

pub const RELATIONAL_OPERATORS: [TokenKind; 6] = [
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::Equals,
    TokenKind::NotEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
];

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Call, parse_procedure_stmt);
    parser.stmt(TokenKind::Do, parse_until_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
}
