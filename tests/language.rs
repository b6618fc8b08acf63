use std::fs;

use pretty_assertions::assert_eq;
use treelox::{Session, error::Error, run};
use walkdir::WalkDir;

/// Runs every script under `tests/scripts` and compares what it prints with
/// its `// expect: <line>` annotations. A script that should fail carries
/// `// error: <diagnostic>` annotations, one per diagnostic line.
#[test]
fn scripts_match_their_expectations() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let expected_output = annotations(&source, "// expect: ");
        let expected_errors = annotations(&source, "// error: ");

        let mut out = Vec::new();
        let result = run(&source, &mut out);
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.lines().collect::<Vec<_>>(),
                   expected_output,
                   "unexpected output from {path:?}");
        match result {
            Ok(()) => assert!(expected_errors.is_empty(), "{path:?} was expected to fail"),
            Err(e) => assert_eq!(e.to_string().lines().collect::<Vec<_>>(),
                                 expected_errors,
                                 "unexpected error from {path:?}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn annotations<'a>(source: &'a str, marker: &str) -> Vec<&'a str> {
    source.lines()
          .filter_map(|line| line.find(marker).map(|i| &line[i + marker.len()..]))
          .collect()
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, Vec::new()) {
        panic!("Script failed: {e}");
    }
}

fn failure_of(src: &str) -> Error {
    match run(src, Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_follows_double_precision() {
    assert_eq!(output_of("print 1 + 2 * 3;"), "7\n");
    assert_eq!(output_of("print (1 + 2) * 3;"), "9\n");
    assert_eq!(output_of("print 10 - 4 - 3;"), "3\n");
    assert_eq!(output_of("print 8 / 4 / 2;"), "1\n");
    assert_eq!(output_of("print -2 * -(3 - 5);"), "-4\n");
    assert_eq!(output_of("print 0.1 + 0.2;"), format!("{}\n", 0.1 + 0.2));
    assert_eq!(output_of("print 1 / 3;"), format!("{}\n", 1.0 / 3.0));
}

#[test]
fn equality_does_not_coerce() {
    assert_eq!(output_of("print nil == nil;"), "true\n");
    assert_eq!(output_of("print nil == true;"), "false\n");
    assert_eq!(output_of("print 1 == 1.0;"), "true\n");
    assert_eq!(output_of("print \"a\" == \"a\";"), "true\n");
    assert_eq!(output_of("print 1 == \"1\";"), "false\n");
    assert_eq!(output_of("print false != nil;"), "true\n");
}

#[test]
fn truthiness() {
    assert_eq!(output_of("print !nil; print !false; print !0; print !\"\";"),
               "true\ntrue\nfalse\nfalse\n");
    assert_eq!(output_of("print 0 ? \"yes\" : \"no\";"), "yes\n");
    assert_eq!(output_of("print nil ? \"yes\" : \"no\";"), "no\n");
}

#[test]
fn block_scoping() {
    assert_success("var a = 1; { a = 2; var b = 4; }");

    let mut session = Session::new(Vec::new());
    session.run("var a = 1; { a = 2; var b = 4; }").unwrap();
    session.run("print a;").unwrap();
    assert!(matches!(session.run("print b;"), Err(Error::Runtime(_))));
    assert_eq!(session.into_output(), b"2\n");

    assert_eq!(output_of("var a = 1; { var a = 2; print a; } print a;"), "2\n1\n");
}

#[test]
fn division_by_zero_is_reported_at_the_slash() {
    assert_eq!(failure_of("1/0;").to_string(),
               "[line 1]: Error at '/': Dividing by zero");
}

#[test]
fn adding_a_string_to_a_number_fails() {
    assert_eq!(failure_of("1+\"2\";").to_string(),
               "[line 1]: Error at '+': Operands must be numbers");
}

#[test]
fn unterminated_string() {
    let error = failure_of("\"abc");

    assert!(matches!(error, Error::Lex(_)));
    assert_eq!(error.to_string(), "[line 1]: Error at end: unterminated string: \"abc");
}

#[test]
fn missing_close_paren() {
    assert_eq!(failure_of("(1 + 1").to_string(),
               "[line 1]: Error at end: expected ')' after expression");
}

#[test]
fn independent_syntax_errors_are_all_reported() {
    let Error::Parse(errors) = failure_of("print 1 +;\nvar = 2;\nprint 3;") else {
        panic!("expected syntax errors");
    };

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.to_string(),
               "[line 1]: Error at ';': expected expression\n\
                [line 2]: Error at '=': expected variable name");
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let mut out = Vec::new();

    assert!(run("print 1; print ;", &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn runtime_errors_keep_earlier_effects() {
    let mut out = Vec::new();

    let error = run("print \"before\";\nprint -nil;\nprint \"after\";", &mut out).unwrap_err();

    assert_eq!(error.to_string(), "[line 2]: Error at '-': Operand must be a number");
    assert_eq!(out, b"before\n");
}

#[test]
fn sessions_recover_from_errors() {
    let mut session = Session::new(Vec::new());

    assert!(session.run("var x = ;").is_err());
    assert!(session.run("\"open").is_err());
    session.run("var x = 3;").unwrap();
    session.run("print x * x;").unwrap();

    assert_eq!(session.into_output(), b"9\n");
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let depth = 10_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));

    let Error::Parse(errors) = failure_of(&source) else {
        panic!("expected a syntax error");
    };

    assert_eq!(errors.to_string(), "[line 1]: Error at '(': nested too deeply");
}

#[test]
fn nested_blocks_and_groupings_run() {
    let depth = 100;
    let source = format!("var a = 1;{}print {}a + 1{};{}",
                         "{ var a = a + 1; ".repeat(depth),
                         "(".repeat(depth),
                         ")".repeat(depth),
                         " }".repeat(depth));

    assert_eq!(output_of(&source), format!("{}\n", depth + 2));
}
