//! Parser state and the `analyse` entry point.
//!
//! The `Parser` owns the single lookahead token, the scope stack and the
//! expression type checker. It borrows the token stream and the trace
//! sink for the duration of one analysis.

use std::collections::HashMap;

use log::debug;

use crate::{
    errors::errors::{Diagnostic, Fault},
    lexer::{
        lexer::{Lexer, TokenStream},
        tokens::{Token, TokenKind},
    },
    trace::trace::TraceSink,
    type_checker::{
        scope::{ScopeStack, VarType, Variable},
        type_checker::ExpressionTypeChecker,
    },
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_statement_part,
};

/// The analyser's state for one run over a token stream.
pub struct Parser<'a> {
    /// Source of tokens, pulled one at a time
    tokens: &'a mut dyn TokenStream,
    /// Receiver of the parse trace
    sink: &'a mut dyn TraceSink,
    /// The lookahead token
    next_token: Token,
    /// Global and loop-local variables
    scopes: ScopeStack,
    /// Operand types of the expression being parsed
    expression: ExpressionTypeChecker,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser and pulls the first lookahead token.
    pub fn new(
        tokens: &'a mut dyn TokenStream,
        sink: &'a mut dyn TraceSink,
    ) -> Result<Self, Diagnostic> {
        let next_token = tokens.next_token()?;

        let mut parser = Parser {
            tokens,
            sink,
            next_token,
            scopes: ScopeStack::new(),
            expression: ExpressionTypeChecker::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the lookahead token.
    pub fn current_token(&self) -> &Token {
        &self.next_token
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.next_token.kind
    }

    pub fn get_scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn get_expression(&self) -> &ExpressionTypeChecker {
        &self.expression
    }

    pub fn get_expression_mut(&mut self) -> &mut ExpressionTypeChecker {
        &mut self.expression
    }

    /// Installs `checker` for the expression about to be parsed and
    /// returns the one it replaces.
    pub fn replace_expression(&mut self, checker: ExpressionTypeChecker) -> ExpressionTypeChecker {
        std::mem::replace(&mut self.expression, checker)
    }

    /// Returns the handler for statements starting with `kind`.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Whether the lookahead can start a statement.
    pub fn at_statement_start(&self) -> bool {
        self.stmt_lookup.contains_key(&self.next_token.kind)
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Runs `production` between a begin and an end event. A fault raised
    /// inside is wrapped in a trace link naming the production; the end
    /// event is still reported so the trace stays balanced.
    pub fn nonterminal<T>(
        &mut self,
        name: &'static str,
        production: impl FnOnce(&mut Self) -> Result<T, Diagnostic>,
    ) -> Result<T, Diagnostic> {
        self.sink.begin(name);
        let result = production(self).map_err(|cause| self.trace(name, cause));
        self.sink.end(name);
        result
    }

    /// Consumes the lookahead if it is of kind `expected`, reporting it as
    /// a terminal and pulling the next token.
    pub fn accept_terminal(&mut self, expected: TokenKind) -> Result<Token, Diagnostic> {
        if self.next_token.kind != expected {
            let fault = Fault::UnexpectedToken {
                expected: expected.to_string(),
                received: self.next_token.value.clone(),
            };
            return Err(self.report(fault));
        }

        self.sink.terminal(&self.next_token);
        self.advance()
    }

    /// Consumes an identifier that must name a visible variable and
    /// returns the variable's type.
    pub fn accept_variable(&mut self) -> Result<VarType, Diagnostic> {
        if self.next_token.kind == TokenKind::Identifier {
            let found = self
                .scopes
                .lookup(&self.next_token.value)
                .map(|variable| variable.var_type);

            match found {
                Some(var_type) => {
                    self.accept_terminal(TokenKind::Identifier)?;
                    return Ok(var_type);
                }
                None => {
                    let fault = Fault::VariableNotDeclared {
                        variable: self.next_token.value.clone(),
                    };
                    return Err(self.report(fault));
                }
            }
        }

        self.accept_terminal(TokenKind::Identifier)?;
        Ok(VarType::Unknown)
    }

    /// Declares `variable` in the innermost open scope.
    pub fn declare_variable(&mut self, variable: Variable) {
        self.sink.variable_added(&variable);
        self.scopes.declare(variable);
    }

    pub fn enter_loop_scope(&mut self) {
        self.scopes.enter_loop_scope();
    }

    /// Closes the innermost loop scope. Dropped variables are only
    /// reported when the loop was parsed successfully.
    pub fn exit_loop_scope(&mut self, report: bool) {
        let removed = self.scopes.exit_loop_scope();
        if report {
            for variable in &removed {
                self.sink.variable_removed(variable);
            }
        }
    }

    /// Reports `fault` at the lookahead token and returns it as a diagnostic.
    pub fn report(&mut self, fault: Fault) -> Diagnostic {
        let token = self.next_token.clone();
        self.report_at(fault, &token)
    }

    /// Reports `fault` at an already consumed `token`.
    pub fn report_at(&mut self, fault: Fault, token: &Token) -> Diagnostic {
        self.sink.error(token, &fault.to_string(), None);
        Diagnostic::new(fault, token.line)
    }

    /// Reports the lookahead as unable to start the current production.
    pub fn invalid_token(&mut self) -> Diagnostic {
        let fault = Fault::InvalidToken {
            token: self.next_token.value.clone(),
        };
        self.report(fault)
    }

    fn trace(&mut self, production: &str, cause: Diagnostic) -> Diagnostic {
        let fault = Fault::Trace {
            production: production.to_string(),
        };
        self.sink
            .error(&self.next_token, &fault.to_string(), Some(&cause));
        Diagnostic::traced(production, self.next_token.line, cause)
    }

    fn advance(&mut self) -> Result<Token, Diagnostic> {
        let next = match self.tokens.next_token() {
            Ok(token) => token,
            Err(diagnostic) => {
                self.sink
                    .error(&self.next_token, &diagnostic.get_fault().to_string(), None);
                return Err(diagnostic);
            }
        };

        Ok(std::mem::replace(&mut self.next_token, next))
    }
}

/// Analyses a whole program: `StatementPart` followed by the end of input.
///
/// This is the main entry point. The first fault aborts the analysis and
/// is returned with one trace link per production it unwound through.
pub fn analyse(tokens: &mut dyn TokenStream, sink: &mut dyn TraceSink) -> Result<(), Diagnostic> {
    let mut parser = Parser::new(tokens, sink)?;

    parse_statement_part(&mut parser)?;
    parser.accept_terminal(TokenKind::EndOfFile)?;

    debug!("analysis finished without faults");
    Ok(())
}

/// Lexes and analyses `source` in one go.
pub fn analyse_source(source: &str, sink: &mut dyn TraceSink) -> Result<(), Diagnostic> {
    let mut lexer = Lexer::new(source);
    analyse(&mut lexer, sink)
}
