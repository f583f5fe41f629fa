#![allow(clippy::module_inception)]

use crate::errors::errors::{Diagnostic, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod trace;
pub mod type_checker;

extern crate regex;

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}


/// Formats a diagnostic for the terminal: the root fault with its tip,
/// the offending source line, then the whole chain outermost first.
pub fn display_error(error: &Diagnostic, source: &str, file: &str) -> String {
    /*
        Error: VariableNotDeclared (tip)
        -> prog.txt
          |
        3 | call foo(x);
          |
          = error caught in "StatementPart" (line 3)
          = variable "x" not declared (line 3)
    */

    let root = error.root_cause();
    let line_string = root.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = root.get_tip() {
        output.push_str(&format!("Error: {}\n", root.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            root.get_error_name(),
            root.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));
    output.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_source_line(source, root.get_line()) {
        output.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        output.push_str(&format!("{:>padding$}\n", "|"));
    }

    for link in error.chain() {
        output.push_str(&format!("{:>padding$} {}\n", "=", link));
    }

    output
}
