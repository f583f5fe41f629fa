//! Diagnostics produced while analysing a program.
//!
//! This module defines the error types used throughout the analysis.
//! It includes:
//!
//! - A chained `Diagnostic` carrying the line of the fault
//! - Specific fault variants for lexing, syntax and semantic checks
//! - Trace links added by each grammar production while unwinding
//! - Helpful suggestions for the user

pub mod errors;
