use crate::{errors::errors::Fault, lexer::tokens::TokenKind};

use super::scope::VarType;

/// How far the current right-recursive `Expression` chain has descended.
///
/// `NestedExpression` is sticky: every deeper link stays nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpressionDepth {
    #[default]
    NoExpression,
    FirstExpression,
    SecondExpression,
    NestedExpression,
}

/// Follows operand types along one expression chain.
///
/// `left` and `right` hold the types of the last two terms seen. A
/// parenthesised sub-expression gets a checker of its own, see
/// `Parser::replace_expression`.
#[derive(Debug, Clone)]
pub struct ExpressionTypeChecker {
    depth: ExpressionDepth,
    left: VarType,
    right: VarType,
}

impl Default for ExpressionTypeChecker {
    fn default() -> Self {
        ExpressionTypeChecker {
            depth: ExpressionDepth::NoExpression,
            left: VarType::Unknown,
            right: VarType::Unknown,
        }
    }
}

impl ExpressionTypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_depth(&self) -> ExpressionDepth {
        self.depth
    }

    /// Called on entry to every `Expression` link.
    pub fn enter_expression(&mut self) {
        self.depth = match self.depth {
            ExpressionDepth::NoExpression => ExpressionDepth::FirstExpression,
            ExpressionDepth::FirstExpression => ExpressionDepth::SecondExpression,
            ExpressionDepth::SecondExpression | ExpressionDepth::NestedExpression => {
                ExpressionDepth::NestedExpression
            }
        };
    }

    /// Stores the type of the term parsed at the current depth.
    pub fn record_operand(&mut self, var_type: VarType) {
        match self.depth {
            ExpressionDepth::NoExpression | ExpressionDepth::FirstExpression => {
                self.left = var_type
            }
            ExpressionDepth::SecondExpression => self.right = var_type,
            ExpressionDepth::NestedExpression => {
                self.left = self.right;
                self.right = var_type;
            }
        }
    }

    /// Checks `left <operator> right` for `+` and `-`. Nothing is compared
    /// until a second operand has been recorded.
    pub fn check_additive(&self, operator: TokenKind) -> Result<(), Fault> {
        if matches!(
            self.depth,
            ExpressionDepth::NoExpression | ExpressionDepth::FirstExpression
        ) {
            return Ok(());
        }

        if self.left != self.right {
            return Err(Fault::TypeMatchError {
                operator: operator_symbol(operator).to_string(),
                left: self.left,
                right: self.right,
            });
        }

        if operator == TokenKind::Minus && self.left == VarType::String {
            return Err(Fault::OperandTypeError {
                operator: operator_symbol(operator).to_string(),
                operand: VarType::String,
            });
        }

        Ok(())
    }

    /// Checks one operand of `*` or `/`, neither accepts strings.
    pub fn check_multiplicative(&self, operator: TokenKind, operand: VarType) -> Result<(), Fault> {
        if operand == VarType::String {
            Err(Fault::OperandTypeError {
                operator: operator_symbol(operator).to_string(),
                operand,
            })
        } else {
            Ok(())
        }
    }

    /// The type of the chain so far: the most recent term once two have
    /// been compared, the single term otherwise.
    pub fn resolved_type(&self) -> VarType {
        match self.depth {
            ExpressionDepth::NoExpression => VarType::Unknown,
            ExpressionDepth::FirstExpression => self.left,
            ExpressionDepth::SecondExpression | ExpressionDepth::NestedExpression => self.right,
        }
    }
}

fn operator_symbol(operator: TokenKind) -> &'static str {
    match operator {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Times => "*",
        TokenKind::Divide => "/",
        _ => "?",
    }
}
