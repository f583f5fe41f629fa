use std::{collections::BTreeMap, fmt::Display};

use log::{debug, warn};

/// Semantic type of a variable or expression operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Number,
    String,
    Unknown,
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Number => write!(f, "NUMBER"),
            VarType::String => write!(f, "STRING"),
            VarType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub identifier: String,
    pub var_type: VarType,
}

impl Variable {
    pub fn new(identifier: impl Into<String>, var_type: VarType) -> Self {
        Variable {
            identifier: identifier.into(),
            var_type,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.identifier, self.var_type)
    }
}

/// Variables declared in one lexical region, ordered by identifier.
#[derive(Debug, Default)]
pub struct Scope {
    pub variable_lookup: BTreeMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_variable(&mut self, variable: Variable) {
        self.variable_lookup
            .insert(variable.identifier.clone(), variable);
    }

    pub fn get_variable(&self, identifier: &str) -> Option<&Variable> {
        self.variable_lookup.get(identifier)
    }

    pub fn into_variables(self) -> Vec<Variable> {
        self.variable_lookup.into_values().collect()
    }
}

/// The global scope plus one scope per open `for` loop.
///
/// Loop scopes form a strict stack: index 0 is the outermost open loop.
#[derive(Debug, Default)]
pub struct ScopeStack {
    global: Scope,
    loops: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open loop scopes.
    pub fn depth(&self) -> usize {
        self.loops.len()
    }

    /// Declares into the innermost open loop scope, or the global scope
    /// outside of any loop. Redeclaring overwrites the stored type.
    pub fn declare(&mut self, variable: Variable) {
        match self.loops.last_mut() {
            Some(scope) => scope.declare_variable(variable),
            None => self.global.declare_variable(variable),
        }
    }

    /// Searches every open loop scope, outermost first, then the globals.
    ///
    /// An outer loop's variable therefore hides an inner loop's variable
    /// of the same name.
    pub fn lookup(&self, identifier: &str) -> Option<&Variable> {
        self.loops
            .iter()
            .find_map(|scope| scope.get_variable(identifier))
            .or_else(|| self.global.get_variable(identifier))
    }

    pub fn enter_loop_scope(&mut self) {
        self.loops.push(Scope::new());
        debug!("entered loop scope at depth {}", self.depth());
    }

    /// Closes the innermost loop scope and yields the variables it held,
    /// in identifier order.
    pub fn exit_loop_scope(&mut self) -> Vec<Variable> {
        match self.loops.pop() {
            Some(scope) => {
                debug!("left loop scope at depth {}", self.depth() + 1);
                scope.into_variables()
            }
            None => {
                warn!("attempted to leave a loop scope while none is open");
                vec![]
            }
        }
    }
}
