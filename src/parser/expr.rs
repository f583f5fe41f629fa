use crate::{
    errors::errors::Diagnostic,
    lexer::tokens::TokenKind,
    type_checker::{scope::VarType, type_checker::ExpressionTypeChecker},
};

use super::parser::Parser;

/// `Expression := Term (('+' | '-') Expression)?`
///
/// `operator` is the additive operator that led into this link, if any.
/// Once this link's term is known it is checked against the previous one.
pub fn parse_expression(
    parser: &mut Parser,
    operator: Option<TokenKind>,
) -> Result<VarType, Diagnostic> {
    parser.nonterminal("Expression", |parser| {
        parser.get_expression_mut().enter_expression();

        let operand_token = parser.current_token().clone();
        let term_type = parse_term(parser)?;
        parser.get_expression_mut().record_operand(term_type);

        if let Some(operator) = operator {
            if let Err(fault) = parser.get_expression().check_additive(operator) {
                return Err(parser.report_at(fault, &operand_token));
            }
        }

        let kind = parser.current_token_kind();
        if matches!(kind, TokenKind::Plus | TokenKind::Minus) {
            parser.accept_terminal(kind)?;
            parse_expression(parser, Some(kind))?;
        }

        Ok(parser.get_expression().resolved_type())
    })
}

/// `Term := Factor (('*' | '/') Term)?`
pub fn parse_term(parser: &mut Parser) -> Result<VarType, Diagnostic> {
    parser.nonterminal("Term", |parser| {
        let factor_type = parse_factor(parser)?;

        let operator = parser.current_token_kind();
        if !matches!(operator, TokenKind::Times | TokenKind::Divide) {
            return Ok(factor_type);
        }

        check_multiplicative(parser, operator, factor_type)?;
        parser.accept_terminal(operator)?;

        // The right operand is checked from the lookahead before descending,
        // then again once its full type is known.
        let lookahead_type = match parser.current_token_kind() {
            TokenKind::Identifier => parser
                .get_scopes()
                .lookup(&parser.current_token().value)
                .map(|variable| variable.var_type),
            TokenKind::StringConstant => Some(VarType::String),
            _ => None,
        };
        if let Some(lookahead_type) = lookahead_type {
            check_multiplicative(parser, operator, lookahead_type)?;
        }

        let term_type = parse_term(parser)?;
        check_multiplicative(parser, operator, term_type)?;

        Ok(VarType::Number)
    })
}

/// `Factor := identifier | number-constant | '(' Expression ')'`
pub fn parse_factor(parser: &mut Parser) -> Result<VarType, Diagnostic> {
    parser.nonterminal("Factor", |parser| match parser.current_token_kind() {
        TokenKind::Identifier => parser.accept_variable(),
        TokenKind::NumberConstant => {
            parser.accept_terminal(TokenKind::NumberConstant)?;
            Ok(VarType::Number)
        }
        TokenKind::LeftParenthesis => {
            parser.accept_terminal(TokenKind::LeftParenthesis)?;
            let var_type = parse_isolated_expression(parser)?;
            parser.accept_terminal(TokenKind::RightParenthesis)?;
            Ok(var_type)
        }
        _ => Err(parser.invalid_token()),
    })
}

/// Parses an expression with a type checker of its own and returns the
/// expression's resolved type. The caller's checker is restored after.
pub fn parse_isolated_expression(parser: &mut Parser) -> Result<VarType, Diagnostic> {
    let outer = parser.replace_expression(ExpressionTypeChecker::new());
    let result = parse_expression(parser, None);
    parser.replace_expression(outer);
    result
}

fn check_multiplicative(
    parser: &mut Parser,
    operator: TokenKind,
    operand: VarType,
) -> Result<(), Diagnostic> {
    parser
        .get_expression()
        .check_multiplicative(operator, operand)
        .map_err(|fault| parser.report(fault))
}
