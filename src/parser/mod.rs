//! Recursive-descent analyser for the statement language.
//!
//! This module contains the grammar engine that consumes a token stream
//! and, in the same pass, checks it semantically. It handles:
//!
//! - One method per grammar production, each reporting begin/end events
//! - Terminal consumption through a single `accept_terminal` primitive
//! - Declaration and lookup of variables across global and loop scopes
//! - Operand type checking for `+ - * /`
//! - Fail-fast error propagation, each production adding a trace link
//!
//! Statement dispatch goes through a lookup table from the lookahead
//! kind to the production handler.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
