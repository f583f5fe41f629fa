use crate::{
    errors::errors::Diagnostic,
    lexer::tokens::{Token, TokenKind},
    parser::parser::analyse_source,
    type_checker::scope::{VarType, Variable},
};

use super::{
    render::IndentedTrace,
    trace::{NullTrace, TraceEvent, TraceRecorder, TraceSink},
};

#[test]
fn test_indented_rendering() {
    let mut trace = IndentedTrace::new();
    trace.begin("StatementPart");
    trace.terminal(&Token {
        kind: TokenKind::Begin,
        value: "begin".to_string(),
        line: 1,
    });
    trace.begin("StatementList");
    trace.variable_added(&Variable::new("x", VarType::Number));
    trace.end("StatementList");
    trace.end("StatementPart");

    assert_eq!(
        trace.as_str(),
        "BEGIN StatementPart\n\
         \tTOKEN Begin on line 1\n\
         \tBEGIN StatementList\n\
         \t\tADD x: NUMBER\n\
         \tEND StatementList\n\
         END StatementPart\n"
    );
}

#[test]
fn test_rendered_analysis() {
    let mut trace = IndentedTrace::new();
    analyse_source("begin\nx := \"hi\"\nend", &mut trace).unwrap();
    let output = trace.into_output();

    assert!(output.starts_with("BEGIN StatementPart\n\tTOKEN Begin on line 1\n"));
    assert!(output.contains("\t\t\t\tTOKEN StringConstant 'hi' on line 2\n"));
    assert!(output.contains("\t\t\t\tADD x: STRING\n"));
    assert!(output.ends_with("END StatementPart\nTOKEN EndOfFile on line 3\n"));
}

#[test]
fn test_rendered_error() {
    let mut trace = IndentedTrace::new();
    let error = analyse_source("begin call p(q) end", &mut trace).unwrap_err();

    assert!(trace
        .as_str()
        .contains("ERROR on line 1: variable \"q\" not declared"));
    assert_eq!(error.root_cause().get_line(), 1);
}

#[test]
fn test_recorder_keeps_order() {
    let mut recorder = TraceRecorder::new();
    let token = Token {
        kind: TokenKind::Identifier,
        value: "x".to_string(),
        line: 4,
    };
    let cause = Diagnostic::new(
        crate::errors::errors::Fault::InvalidToken {
            token: "x".to_string(),
        },
        4,
    );

    recorder.begin("Factor");
    recorder.error(&token, "broken", Some(&cause));
    recorder.end("Factor");

    assert_eq!(recorder.events.len(), 3);
    assert!(matches!(&recorder.events[0], TraceEvent::Begin(name) if name == "Factor"));
    assert!(matches!(&recorder.events[1], TraceEvent::Error { cause: Some(_), .. }));
    assert!(matches!(&recorder.events[2], TraceEvent::End(name) if name == "Factor"));
}

#[test]
fn test_null_trace() {
    let mut trace = NullTrace;

    assert!(analyse_source("begin x := 1 end", &mut trace).is_ok());
}
