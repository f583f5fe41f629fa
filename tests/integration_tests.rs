//! Integration tests for end-to-end analysis.
//!
//! These tests drive the complete pipeline, from program text through
//! tokenization to the fused parse and semantic checks, and inspect the
//! resulting trace events and diagnostics.

use analyser::{
    display_error,
    errors::errors::{Diagnostic, FaultKind},
    lexer::lexer::tokenize,
    parser::parser::analyse_source,
    trace::{
        render::IndentedTrace,
        trace::{TraceEvent, TraceRecorder},
    },
    type_checker::scope::VarType,
};

fn run(source: &str) -> (TraceRecorder, Result<(), Diagnostic>) {
    let mut recorder = TraceRecorder::new();
    let result = analyse_source(source, &mut recorder);
    (recorder, result)
}

fn assert_well_nested(recorder: &TraceRecorder) {
    let mut depth: i64 = 0;
    for event in &recorder.events {
        match event {
            TraceEvent::Begin(_) => depth += 1,
            TraceEvent::End(_) => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0, "end event without matching begin");
    }
    assert_eq!(depth, 0, "unbalanced begin/end events");
}

const PROGRAM: &str = r#"
begin
    total := 0;
    name := "counter";
    for (i := 1; i <= 10; i := i + 1) do
        total := total + i * 2;
        if total > 100 then
            call report(name, total)
        else
            step := (total - i) / 2
        end if
    end loop;
    while total > 0 loop
        total := total - 1
    end loop;
    do
        total := total + 1
    until total = 5;
    call report(name, total);
end
"#;

#[test]
fn test_scenario_a_clean_parse() {
    let (recorder, result) = run("begin x:=1; y:=2; z:=x+y; end");

    assert!(result.is_ok());
    let added: Vec<(&str, VarType)> = recorder
        .added_variables()
        .map(|variable| (variable.identifier.as_str(), variable.var_type))
        .collect();
    assert_eq!(
        added,
        vec![
            ("x", VarType::Number),
            ("y", VarType::Number),
            ("z", VarType::Number),
        ]
    );
}

#[test]
fn test_scenario_b_undeclared_argument() {
    let (_, result) = run("begin call foo(x); end");
    let error = result.unwrap_err();

    assert_eq!(error.root_cause().kind(), FaultKind::UndeclaredVariable);
    assert_eq!(error.root_cause().get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_scenario_c_loop_variable_dropped() {
    let (recorder, result) =
        run("begin for(i:=1;i<10;i:=i+1) do x:=i; end loop; call foo(x); end");
    let error = result.unwrap_err();

    assert_eq!(error.root_cause().kind(), FaultKind::UndeclaredVariable);
    let removed: Vec<&str> = recorder
        .removed_variables()
        .map(|variable| variable.identifier.as_str())
        .collect();
    assert_eq!(removed, vec!["i", "x"]);
}

#[test]
fn test_scenario_d_string_subtraction() {
    let (_, result) = run(r#"begin a:="hi"; b:=a-a; end"#);

    assert_eq!(
        result.unwrap_err().root_cause().kind(),
        FaultKind::TypeMismatch
    );
}

#[test]
fn test_scenario_e_mixed_addition() {
    let (_, result) = run(r#"begin a:=1; b:="x"; c:=a+b; end"#);

    assert_eq!(
        result.unwrap_err().root_cause().kind(),
        FaultKind::TypeMismatch
    );
}

#[test]
fn test_full_program() {
    let (recorder, result) = run(PROGRAM);

    assert!(result.is_ok(), "{:?}", result);
    assert_well_nested(&recorder);

    let removed: Vec<&str> = recorder
        .removed_variables()
        .map(|variable| variable.identifier.as_str())
        .collect();
    assert_eq!(removed, vec!["i", "step", "total"]);
}

#[test]
fn test_every_token_consumed_once() {
    let (recorder, result) = run(PROGRAM);
    assert!(result.is_ok());

    let tokens = tokenize(PROGRAM).unwrap();
    let terminals: Vec<_> = recorder.terminals().cloned().collect();

    assert_eq!(terminals, tokens);
}

#[test]
fn test_nesting_balanced_on_failure() {
    let sources = [
        "begin call foo(x); end",
        r#"begin a:="hi"; b:=a-a; end"#,
        "begin for(i:=1;i<10;i:=i+1) do x:=i end loop; call foo(x) end",
        "begin x := (1 + 2 end",
        "begin if x",
    ];

    for source in sources {
        let (recorder, result) = run(source);
        assert!(result.is_err());
        assert_well_nested(&recorder);
    }
}

#[test]
fn test_one_error_event_per_chain_link() {
    let (recorder, result) = run("begin x := 1; call p(x, y) end");
    let error = result.unwrap_err();

    let error_events = recorder
        .events
        .iter()
        .filter(|event| matches!(event, TraceEvent::Error { .. }))
        .count();
    assert_eq!(error_events, error.chain().count());
}

#[test]
fn test_trace_is_deterministic() {
    let mut first = IndentedTrace::new();
    let mut second = IndentedTrace::new();

    analyse_source(PROGRAM, &mut first).unwrap();
    analyse_source(PROGRAM, &mut second).unwrap();

    assert_eq!(first.as_str(), second.as_str());
    assert!(!first.as_str().is_empty());
}

#[test]
fn test_display_full_chain() {
    let source = "begin\n  x := 1;\n  call foo(x, y)\nend";
    let (_, result) = run(source);
    let error = result.unwrap_err();

    let rendered = display_error(&error, source, "prog.txt");

    assert!(rendered.starts_with("Error: VariableNotDeclared"));
    assert!(rendered.contains("3 | call foo(x, y)"));
    assert!(rendered.contains("error caught in \"StatementPart\""));
    assert!(rendered.contains("error caught in \"ArgumentList\""));
    assert_eq!(rendered.lines().count(), 5 + error.chain().count());
}
