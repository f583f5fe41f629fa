use crate::{
    errors::errors::Diagnostic, lexer::tokens::Token, type_checker::scope::Variable,
};

use super::trace::TraceSink;

/// Renders the trace as text, one line per event, indented with one tab
/// per open production.
#[derive(Debug, Default)]
pub struct IndentedTrace {
    output: String,
    depth: usize,
}

impl IndentedTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(&"\t".repeat(self.depth));
        self.output.push_str(text);
        self.output.push('\n');
    }
}

impl TraceSink for IndentedTrace {
    fn begin(&mut self, name: &str) {
        self.line(&format!("BEGIN {}", name));
        self.depth += 1;
    }

    fn end(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("END {}", name));
    }

    fn terminal(&mut self, token: &Token) {
        self.line(&format!("TOKEN {}", token));
    }

    fn variable_added(&mut self, variable: &Variable) {
        self.line(&format!("ADD {}", variable));
    }

    fn variable_removed(&mut self, variable: &Variable) {
        self.line(&format!("REMOVE {}", variable));
    }

    fn error(&mut self, token: &Token, message: &str, _cause: Option<&Diagnostic>) {
        self.line(&format!("ERROR on line {}: {}", token.line, message));
    }
}
