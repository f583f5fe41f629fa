use std::fmt::Display;

use thiserror::Error;

use crate::type_checker::scope::VarType;

/// A fault and the line it was raised on, optionally wrapping the
/// lower-level diagnostic that caused it.
#[derive(Error, Debug, Clone)]
#[error("{fault} (line {line})")]
pub struct Diagnostic {
    fault: Fault,
    line: u32,
    #[source]
    cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
    pub fn new(fault: Fault, line: u32) -> Self {
        Diagnostic {
            fault,
            line,
            cause: None,
        }
    }

    /// Wraps `cause` in a trace link naming the production it passed through.
    pub fn traced(production: &str, line: u32, cause: Diagnostic) -> Self {
        Diagnostic {
            fault: Fault::Trace {
                production: production.to_string(),
            },
            line,
            cause: Some(Box::new(cause)),
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_fault(&self) -> &Fault {
        &self.fault
    }

    pub fn get_cause(&self) -> Option<&Diagnostic> {
        self.cause.as_deref()
    }

    pub fn kind(&self) -> FaultKind {
        self.fault.kind()
    }

    /// The innermost diagnostic of the chain, i.e. the original fault.
    pub fn root_cause(&self) -> &Diagnostic {
        let mut current = self;
        while let Some(cause) = current.get_cause() {
            current = cause;
        }
        current
    }

    /// Iterates the chain from the outermost link down to the root cause.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.fault {
            Fault::UnrecognisedToken { .. } => "UnrecognisedToken",
            Fault::UnexpectedToken { .. } => "UnexpectedToken",
            Fault::InvalidToken { .. } => "InvalidToken",
            Fault::VariableNotDeclared { .. } => "VariableNotDeclared",
            Fault::TypeMatchError { .. } => "TypeMatchError",
            Fault::OperandTypeError { .. } => "OperandTypeError",
            Fault::Trace { .. } => "Trace",
            Fault::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.fault {
            Fault::UnrecognisedToken { .. } => ErrorTip::None,
            Fault::UnexpectedToken { expected, .. } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, is a keyword or separator missing?",
                expected
            )),
            Fault::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start this construct",
                token
            )),
            Fault::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Assign a value to `{}` before using it, loop variables are dropped at `end loop`",
                variable
            )),
            Fault::TypeMatchError { left, right, .. } => ErrorTip::Suggestion(format!(
                "Both operands must have the same type, found `{}` and `{}`",
                left, right
            )),
            Fault::OperandTypeError { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` is not defined for `{}` operands",
                operator, operand
            )),
            Fault::Trace { .. } => ErrorTip::None,
            Fault::Io { .. } => ErrorTip::None,
        }
    }
}

/// Iterator over a diagnostic chain, see [`Diagnostic::chain`].
pub struct Chain<'a> {
    next: Option<&'a Diagnostic>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.get_cause();
        Some(current)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Fault categories reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Lexical,
    Syntax,
    UndeclaredVariable,
    TypeMismatch,
    Trace,
    Io,
}

#[derive(Error, Debug, Clone)]
pub enum Fault {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid token, expected {expected:?} but got {received:?}")]
    UnexpectedToken { expected: String, received: String },
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("types do not match for {operator:?}: {left} and {right}")]
    TypeMatchError {
        operator: String,
        left: VarType,
        right: VarType,
    },
    #[error("operator {operator:?} cannot be applied to {operand}")]
    OperandTypeError { operator: String, operand: VarType },
    #[error("error caught in {production:?}")]
    Trace { production: String },
    #[error("failed to read input: {message}")]
    Io { message: String },
}

impl Fault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::UnrecognisedToken { .. } => FaultKind::Lexical,
            Fault::UnexpectedToken { .. } | Fault::InvalidToken { .. } => FaultKind::Syntax,
            Fault::VariableNotDeclared { .. } => FaultKind::UndeclaredVariable,
            Fault::TypeMatchError { .. } | Fault::OperandTypeError { .. } => {
                FaultKind::TypeMismatch
            }
            Fault::Trace { .. } => FaultKind::Trace,
            Fault::Io { .. } => FaultKind::Io,
        }
    }
}
