//! Parse trace output.
//!
//! The parser reports its progress as an ordered stream of events:
//! production begin/end markers, consumed terminals, declared and dropped
//! variables, and the fault links raised while unwinding. This module
//! defines the sink contract and the sinks shipped with the crate:
//!
//! - `TraceRecorder` keeps the events for later inspection
//! - `IndentedTrace` renders them as text, nested by production depth
//! - `NullTrace` discards them

pub mod render;
pub mod trace;

#[cfg(test)]
mod tests;
