// Integration tests for the pseudo-Java interpreter

use javaterm::interpreter::errors::{ErrorKind, InterpreterError};
use javaterm::interpreter::{start_session, submit_line, Outcome};
use javaterm::memory::environment::Environment;
use javaterm::memory::value::Value;

fn output(env: &mut Environment, line: &str) -> String {
    match submit_line(env, line) {
        Outcome::Output { text, terminate } => {
            assert!(!terminate, "unexpected terminate for {:?}", line);
            text
        }
        other => panic!("expected output for {:?}, got {:?}", line, other),
    }
}

fn error(env: &mut Environment, line: &str) -> InterpreterError {
    match submit_line(env, line) {
        Outcome::Error(err) => err,
        other => panic!("expected error for {:?}, got {:?}", line, other),
    }
}

#[test]
fn test_blank_lines_are_empty() {
    let mut env = start_session();
    assert_eq!(submit_line(&mut env, ""), Outcome::Empty);
    assert_eq!(submit_line(&mut env, "   \t "), Outcome::Empty);
    assert!(env.history().is_empty());
}

#[test]
fn test_exit_any_case_no_mutation() {
    let mut env = Environment::with_seed(1);
    submit_line(&mut env, "x = 1;");
    let history_before = env.history().len();

    for line in ["exit()", "  EXIT()  ", "Exit()"] {
        assert_eq!(submit_line(&mut env, line), Outcome::Exit);
    }

    assert_eq!(env.history().len(), history_before);
    assert_eq!(env.var_count(), 1);
}

#[test]
fn test_missing_terminator() {
    let mut env = start_session();
    for line in ["x = 5", "System.out.println(x)", "{ {", "foo }"] {
        let err = error(&mut env, line);
        assert_eq!(err.kind(), ErrorKind::SyntaxIncomplete);
        assert_eq!(err.to_string(), "';' expected");
    }
}

#[test]
fn test_assign_then_read() {
    let mut env = start_session();
    assert_eq!(output(&mut env, "x = 5;"), "");
    assert_eq!(output(&mut env, "x;"), "5");
}

#[test]
fn test_typed_declarations() {
    let mut env = start_session();
    output(&mut env, "int count = 3;");
    output(&mut env, "double ratio = 0.75;");
    output(&mut env, "boolean done = false;");
    output(&mut env, r#"String greeting = "hello";"#);
    assert_eq!(output(&mut env, "count;"), "3");
    assert_eq!(output(&mut env, "ratio;"), "0.75");
    assert_eq!(output(&mut env, "done;"), "false");
    assert_eq!(output(&mut env, "greeting;"), "hello");
}

#[test]
fn test_last_write_wins() {
    let mut env = start_session();
    output(&mut env, "x = 1;");
    output(&mut env, r#"x = "now a string";"#);
    assert_eq!(env.get_var("x"), Some(&Value::Str("now a string".to_string())));
}

#[test]
fn test_print_variable() {
    let mut env = start_session();
    output(&mut env, r#"s = "hi";"#);
    assert_eq!(output(&mut env, "System.out.println(s);"), "hi");
    assert_eq!(output(&mut env, "System.out.print(s);"), "hi");
}

#[test]
fn test_print_literal_and_raw() {
    let mut env = start_session();
    assert_eq!(
        output(&mut env, r#"System.out.println("Hello, World!");"#),
        "Hello, World!"
    );
    assert_eq!(output(&mut env, "System.out.println(unknown);"), "unknown");
}

#[test]
fn test_invalid_print() {
    let mut env = start_session();
    let err = error(&mut env, "System.out.println;");
    assert_eq!(err, InterpreterError::InvalidPrint);
    assert_eq!(err.kind(), ErrorKind::InvalidStatementShape);
}

#[test]
fn test_import_idempotent() {
    let mut env = start_session();
    let before = env.imports_sorted().len();
    assert_eq!(output(&mut env, "import java.util.Scanner;"), "");
    assert_eq!(output(&mut env, "import java.util.Scanner;"), "");
    assert_eq!(env.imports_sorted().len(), before + 1);
    assert!(env.imports_sorted().contains(&"java.util.Scanner"));
}

#[test]
fn test_invalid_import() {
    let mut env = start_session();
    assert_eq!(
        error(&mut env, "import java.util.List"),
        InterpreterError::MissingTerminator
    );
    assert_eq!(error(&mut env, "import ;"), InterpreterError::InvalidImport);
}

#[test]
fn test_class_redefinition() {
    let mut env = start_session();
    assert_eq!(output(&mut env, "class Point { int x; }"), "Defined class Point");
    assert_eq!(
        output(&mut env, "public class Point { int x; int y; }"),
        "Defined class Point"
    );
    assert_eq!(env.class_count(), 1);
    assert_eq!(
        env.class_source("Point"),
        Some("public class Point { int x; int y; }")
    );
}

#[test]
fn test_unknown_class_construction() {
    let mut env = start_session();
    let err = error(&mut env, "a = new Frobnicator();");
    assert_eq!(err.kind(), ErrorKind::UnresolvedSymbol);
    assert_eq!(err.to_string(), "Cannot find symbol: class Frobnicator");
    assert!(!env.has_var("a"));
}

#[test]
fn test_invalid_construction() {
    let mut env = start_session();
    assert_eq!(
        error(&mut env, "new ArrayList();"),
        InterpreterError::InvalidConstruction
    );
}

#[test]
fn test_list_methods() {
    let mut env = start_session();
    assert_eq!(output(&mut env, "list = new ArrayList();"), "");
    assert_eq!(output(&mut env, "list.add(1);"), "true");
    assert_eq!(output(&mut env, "list.size();"), "1");
    assert_eq!(output(&mut env, "list.get(0);"), "null");
    assert_eq!(output(&mut env, "list.sort();"), "null");
}

#[test]
fn test_map_and_string_methods() {
    let mut env = start_session();
    output(&mut env, "HashMap<String, Integer> m = new HashMap<>();");
    assert_eq!(output(&mut env, r#"m.put("a", 1);"#), "null");
    assert_eq!(output(&mut env, "m.size();"), "0");

    output(&mut env, r#"s = "hello";"#);
    assert_eq!(output(&mut env, "s.length();"), "0");
    assert_eq!(output(&mut env, "s.charAt(0);"), "");
}

#[test]
fn test_boolean_receiver_uses_string_methods() {
    let mut env = start_session();
    output(&mut env, "b = true;");
    assert_eq!(output(&mut env, "b.length();"), "0");
    assert_eq!(output(&mut env, "b.isEmpty();"), "true");
    assert_eq!(output(&mut env, "b;"), "true");
}

#[test]
fn test_declared_class_does_not_borrow_builtin_responses() {
    let mut env = start_session();
    output(&mut env, "class ArrayListLike {}");
    output(&mut env, "x = new ArrayListLike();");
    assert_eq!(output(&mut env, "x.add(1);"), "null");
    assert_eq!(output(&mut env, "x.size();"), "null");
}

#[test]
fn test_object_handle_shape() {
    let mut env = Environment::with_seed(99);
    output(&mut env, "sc = new Scanner(System.in);");
    let shown = output(&mut env, "sc;");
    let (class, id) = shown.split_once('@').expect("handle should contain '@'");
    assert_eq!(class, "Scanner");
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_method_call_unbound() {
    let mut env = start_session();
    let err = error(&mut env, "foo.bar();");
    assert_eq!(err.kind(), ErrorKind::UnresolvedSymbol);
    assert_eq!(err.to_string(), "Cannot find symbol: variable foo");
}

#[test]
fn test_system_exit() {
    let mut env = start_session();
    assert_eq!(
        submit_line(&mut env, "System.exit(0);"),
        Outcome::Output {
            text: "Process finished with exit code 0".to_string(),
            terminate: true,
        }
    );
}

#[test]
fn test_failed_assignment_leaves_no_binding() {
    let mut env = start_session();
    let err = error(&mut env, "y = someUndefinedExpr + + ;");
    assert_eq!(err.kind(), ErrorKind::EvaluationFailure);
    assert!(!env.has_var("y"));
}

#[test]
fn test_assignment_from_expression() {
    let mut env = start_session();
    output(&mut env, "a = 6;");
    output(&mut env, "b = a * 7;");
    output(&mut env, r#"msg = "answer: " + b;"#);
    assert_eq!(output(&mut env, "System.out.println(msg);"), "answer: 42");
    assert_eq!(output(&mut env, "b > 40 && b < 50;"), "true");
}

#[test]
fn test_bare_expression_failure() {
    let mut env = start_session();
    let err = error(&mut env, "1 / 0;");
    assert_eq!(err.to_string(), "Cannot evaluate expression: 1 / 0");
    let err = error(&mut env, "{ }");
    assert_eq!(err.kind(), ErrorKind::EvaluationFailure);
}

#[test]
fn test_no_host_evaluation() {
    let mut env = start_session();
    for line in [
        "Runtime.getRuntime().exec(\"rm -rf /\");",
        "x = Runtime.getRuntime();",
        "while (true) { };",
    ] {
        assert!(
            matches!(submit_line(&mut env, line), Outcome::Error(_)),
            "{}",
            line
        );
    }
    assert_eq!(env.var_count(), 0);
}

#[test]
fn test_history_records_submitted_lines() {
    let mut env = start_session();
    submit_line(&mut env, "  x = 1;  ");
    submit_line(&mut env, "oops");
    submit_line(&mut env, "");
    submit_line(&mut env, "exit()");
    assert_eq!(env.history(), ["x = 1;", "oops"]);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = start_session();
    let mut second = start_session();
    output(&mut first, "x = 1;");
    assert!(matches!(submit_line(&mut second, "x;"), Outcome::Error(_)));
}

#[test]
fn test_variable_and_class_share_name() {
    let mut env = start_session();
    output(&mut env, "class Foo {}");
    output(&mut env, "Foo = 3;");
    assert_eq!(output(&mut env, "Foo;"), "3");
    output(&mut env, "f = new Foo();");
    assert!(env.class_source("Foo").is_some());
}
