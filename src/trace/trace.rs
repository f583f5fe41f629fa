use crate::{
    errors::errors::Diagnostic, lexer::tokens::Token, type_checker::scope::Variable,
};

/// Receives the parse trace. Nesting depth is the sink's own concern;
/// each production reports exactly one `begin` and one `end`.
pub trait TraceSink {
    fn begin(&mut self, name: &str);
    fn end(&mut self, name: &str);
    fn terminal(&mut self, token: &Token);
    fn variable_added(&mut self, variable: &Variable);
    fn variable_removed(&mut self, variable: &Variable);
    /// Called right before the parser returns a fault. `cause` is set for
    /// trace links wrapping a lower fault.
    fn error(&mut self, token: &Token, message: &str, cause: Option<&Diagnostic>);
}

#[derive(Debug, Clone)]
pub enum TraceEvent {
    Begin(String),
    End(String),
    Terminal(Token),
    VariableAdded(Variable),
    VariableRemoved(Variable),
    Error {
        token: Token,
        message: String,
        cause: Option<Diagnostic>,
    },
}

/// A sink that keeps every event in order.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    pub events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminals(&self) -> impl Iterator<Item = &Token> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Terminal(token) => Some(token),
            _ => None,
        })
    }

    pub fn added_variables(&self) -> impl Iterator<Item = &Variable> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::VariableAdded(variable) => Some(variable),
            _ => None,
        })
    }

    pub fn removed_variables(&self) -> impl Iterator<Item = &Variable> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::VariableRemoved(variable) => Some(variable),
            _ => None,
        })
    }
}

impl TraceSink for TraceRecorder {
    fn begin(&mut self, name: &str) {
        self.events.push(TraceEvent::Begin(name.to_string()));
    }

    fn end(&mut self, name: &str) {
        self.events.push(TraceEvent::End(name.to_string()));
    }

    fn terminal(&mut self, token: &Token) {
        self.events.push(TraceEvent::Terminal(token.clone()));
    }

    fn variable_added(&mut self, variable: &Variable) {
        self.events.push(TraceEvent::VariableAdded(variable.clone()));
    }

    fn variable_removed(&mut self, variable: &Variable) {
        self.events.push(TraceEvent::VariableRemoved(variable.clone()));
    }

    fn error(&mut self, token: &Token, message: &str, cause: Option<&Diagnostic>) {
        self.events.push(TraceEvent::Error {
            token: token.clone(),
            message: message.to_string(),
            cause: cause.cloned(),
        });
    }
}

/// A sink that drops every event.
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn begin(&mut self, _name: &str) {}
    fn end(&mut self, _name: &str) {}
    fn terminal(&mut self, _token: &Token) {}
    fn variable_added(&mut self, _variable: &Variable) {}
    fn variable_removed(&mut self, _variable: &Variable) {}
    fn error(&mut self, _token: &Token, _message: &str, _cause: Option<&Diagnostic>) {}
}
