//! Semantic state for the single-pass analysis.
//!
//! This module holds the state the parser consults while it descends:
//!
//! - The scope stack: a global table plus one table per open `for` loop
//! - Variables and their inferred types
//! - The expression type checker that follows operand types through the
//!   right-recursive expression grammar
//!
//! Loop-local variables are dropped when their loop closes, and lookups
//! search every open loop scope before falling back to the globals.

pub mod scope;
pub mod type_checker;
