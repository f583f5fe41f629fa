use crate::{
    errors::errors::{Diagnostic, Fault},
    lexer::tokens::TokenKind,
    type_checker::scope::{VarType, Variable},
};

use super::{expr::parse_isolated_expression, lookups::RELATIONAL_OPERATORS, parser::Parser};

pub fn parse_statement_part(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("StatementPart", |parser| {
        parser.accept_terminal(TokenKind::Begin)?;
        parse_statement_list(parser)?;
        parser.accept_terminal(TokenKind::End)?;
        Ok(())
    })
}

/// A `;` continues the list only when a statement follows it, so a
/// trailing separator before a closing keyword is accepted.
pub fn parse_statement_list(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("StatementList", |parser| {
        parse_stmt(parser)?;

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.accept_terminal(TokenKind::Semicolon)?;
            if parser.at_statement_start() {
                parse_statement_list(parser)?;
            }
        }

        Ok(())
    })
}

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("Statement", |parser| {
        let kind = parser.current_token_kind();
        let Some(handler) = parser.get_stmt_handler(kind) else {
            return Err(parser.invalid_token());
        };

        if kind != TokenKind::For {
            return handler(parser);
        }

        // The loop header and body share one scope, dropped at `end loop`.
        parser.enter_loop_scope();
        let result = handler(parser);
        parser.exit_loop_scope(result.is_ok());
        result
    })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("AssignmentStatement", |parser| {
        let identifier = parser.accept_terminal(TokenKind::Identifier)?.value;
        parser.accept_terminal(TokenKind::Becomes)?;

        let var_type = match parser.current_token_kind() {
            TokenKind::NumberConstant => {
                parse_isolated_expression(parser)?;
                VarType::Number
            }
            TokenKind::Identifier | TokenKind::LeftParenthesis => {
                parse_isolated_expression(parser)?
            }
            TokenKind::StringConstant => {
                parser.accept_terminal(TokenKind::StringConstant)?;
                VarType::String
            }
            _ => return Err(parser.invalid_token()),
        };

        parser.declare_variable(Variable::new(identifier, var_type));
        Ok(())
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("IfStatement", |parser| {
        parser.accept_terminal(TokenKind::If)?;
        parse_condition(parser)?;
        parser.accept_terminal(TokenKind::Then)?;
        parse_statement_list(parser)?;

        match parser.current_token_kind() {
            TokenKind::End => {}
            TokenKind::Else => {
                parser.accept_terminal(TokenKind::Else)?;
                parse_statement_list(parser)?;
            }
            _ => return Err(parser.invalid_token()),
        }

        parser.accept_terminal(TokenKind::End)?;
        parser.accept_terminal(TokenKind::If)?;
        Ok(())
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("WhileStatement", |parser| {
        parser.accept_terminal(TokenKind::While)?;
        parse_condition(parser)?;
        parser.accept_terminal(TokenKind::Loop)?;
        parse_statement_list(parser)?;
        parser.accept_terminal(TokenKind::End)?;
        parser.accept_terminal(TokenKind::Loop)?;
        Ok(())
    })
}

pub fn parse_until_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("UntilStatement", |parser| {
        parser.accept_terminal(TokenKind::Do)?;
        parse_statement_list(parser)?;
        parser.accept_terminal(TokenKind::Until)?;
        parse_condition(parser)?;
        Ok(())
    })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("ForStatement", |parser| {
        parser.accept_terminal(TokenKind::For)?;
        parser.accept_terminal(TokenKind::LeftParenthesis)?;
        parse_assignment_stmt(parser)?;
        parser.accept_terminal(TokenKind::Semicolon)?;
        parse_condition(parser)?;
        parser.accept_terminal(TokenKind::Semicolon)?;
        parse_assignment_stmt(parser)?;
        parser.accept_terminal(TokenKind::RightParenthesis)?;
        parser.accept_terminal(TokenKind::Do)?;
        parse_statement_list(parser)?;
        parser.accept_terminal(TokenKind::End)?;
        parser.accept_terminal(TokenKind::Loop)?;
        Ok(())
    })
}

pub fn parse_procedure_stmt(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("ProcedureStatement", |parser| {
        parser.accept_terminal(TokenKind::Call)?;
        // procedure names are not variables and are never looked up
        parser.accept_terminal(TokenKind::Identifier)?;
        parser.accept_terminal(TokenKind::LeftParenthesis)?;
        parse_argument_list(parser)?;
        parser.accept_terminal(TokenKind::RightParenthesis)?;
        Ok(())
    })
}

pub fn parse_argument_list(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("ArgumentList", |parser| {
        parser.accept_variable()?;

        if parser.current_token_kind() == TokenKind::Comma {
            parser.accept_terminal(TokenKind::Comma)?;
            parse_argument_list(parser)?;
        }

        Ok(())
    })
}

pub fn parse_condition(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("Condition", |parser| {
        parser.accept_variable()?;
        parse_conditional_operator(parser)?;

        match parser.current_token_kind() {
            TokenKind::Identifier => {
                parser.accept_variable()?;
            }
            TokenKind::NumberConstant => {
                parser.accept_terminal(TokenKind::NumberConstant)?;
            }
            TokenKind::StringConstant => {
                parser.accept_terminal(TokenKind::StringConstant)?;
            }
            _ => return Err(parser.invalid_token()),
        }

        Ok(())
    })
}

pub fn parse_conditional_operator(parser: &mut Parser) -> Result<(), Diagnostic> {
    parser.nonterminal("ConditionalOperator", |parser| {
        let kind = parser.current_token_kind();
        if !RELATIONAL_OPERATORS.contains(&kind) {
            let fault = Fault::UnexpectedToken {
                expected: String::from("< or <= or = or /= or > or >="),
                received: parser.current_token().value.clone(),
            };
            return Err(parser.report(fault));
        }

        parser.accept_terminal(kind)?;
        Ok(())
    })
}
