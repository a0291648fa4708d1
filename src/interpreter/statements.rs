//! Statement handlers
//!
//! One function per [`StatementKind`]. Each takes the trimmed line, checks its
//! shape and either returns the text to display or an [`InterpreterError`].
//! A handler decides everything before touching the environment, so a
//! rejected line never leaves a partial binding behind.
//!
//! [`StatementKind`]: crate::interpreter::classify::StatementKind

use crate::interpreter::constants::PROCESS_FINISHED;
use crate::interpreter::errors::InterpreterError;
use crate::interpreter::expressions::evaluate_source;
use crate::interpreter::methods::{canned_response, ReceiverKind};
use crate::interpreter::patterns::{
    ASSIGNMENT, BOOLEAN_LITERAL, CLASS_NAME, CONSTRUCTION, FLOAT_LITERAL, IMPORT, INTEGER_LITERAL,
    METHOD_CALL, PRINT_CALL, STRING_LITERAL, TERMINATOR,
};
use crate::memory::environment::Environment;
use crate::memory::value::Value;
use tracing::debug;

/// Successful result of a statement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub text: String,
    /// Set by `System.exit(...)`
    pub terminate: bool,
}

impl Reply {
    fn silent() -> Self {
        Reply::default()
    }

    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            terminate: false,
        }
    }
}

pub fn execute_import(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = IMPORT.captures(line).ok_or(InterpreterError::InvalidImport)?;
    let path = &caps[1];
    if env.add_import(path) {
        debug!(path, "import added");
    }
    Ok(Reply::silent())
}

pub fn execute_class(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = CLASS_NAME.captures(line).ok_or(InterpreterError::InvalidClass)?;
    let name = &caps[1];
    env.declare_class(name, line);
    Ok(Reply::text(format!("Defined class {}", name)))
}

pub fn execute_print(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = PRINT_CALL.captures(line).ok_or(InterpreterError::InvalidPrint)?;
    let arg = caps[1].trim();

    let text = if let Some(literal) = STRING_LITERAL.captures(arg) {
        literal[1].to_string()
    } else if let Some(value) = env.get_var(arg) {
        value.to_string()
    } else {
        arg.to_string()
    };

    Ok(Reply::text(text))
}

pub fn execute_construction(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = CONSTRUCTION
        .captures(line)
        .ok_or(InterpreterError::InvalidConstruction)?;
    let (name, class_name) = (&caps[1], &caps[2]);

    let origin = env
        .resolve_class(class_name)
        .ok_or_else(|| InterpreterError::UnknownClass {
            name: class_name.to_string(),
        })?;

    let handle = env.new_handle(class_name, origin);
    debug!(name, %handle, "object constructed");
    env.set_var(name, Value::Object(handle));
    Ok(Reply::silent())
}

pub fn execute_assignment(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = ASSIGNMENT.captures(line).ok_or(InterpreterError::InvalidAssignment)?;
    let (name, source) = (&caps[1], &caps[2]);

    let value = resolve_value(env, source)?;
    env.set_var(name, value);
    Ok(Reply::silent())
}

/// Literal forms first, then variable copy, then the expression evaluator
fn resolve_value(env: &Environment, source: &str) -> Result<Value, InterpreterError> {
    if let Some(literal) = STRING_LITERAL.captures(source) {
        return Ok(Value::Str(literal[1].to_string()));
    }
    if BOOLEAN_LITERAL.is_match(source) {
        return Ok(Value::Bool(source == "true"));
    }
    if INTEGER_LITERAL.is_match(source) {
        if let Ok(n) = source.parse::<i64>() {
            return Ok(Value::Int(n));
        }
    }
    if FLOAT_LITERAL.is_match(source) {
        if let Ok(x) = source.parse::<f64>() {
            return Ok(Value::Float(x));
        }
    }
    if let Some(value) = env.get_var(source) {
        return Ok(value.clone());
    }
    evaluate_or_reject(env, source)
}

pub fn execute_method_call(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let caps = METHOD_CALL
        .captures(line)
        .ok_or(InterpreterError::InvalidMethodCall)?;
    let (object, method) = (&caps[1], &caps[2]);

    if object == "System" && method == "exit" {
        return Ok(Reply {
            text: PROCESS_FINISHED.to_string(),
            terminate: true,
        });
    }

    let receiver = env
        .get_var(object)
        .ok_or_else(|| InterpreterError::UnknownVariable {
            name: object.to_string(),
        })?;

    let kind = ReceiverKind::of(receiver);
    debug!(object, method, ?kind, "method call");
    Ok(Reply::text(canned_response(kind, method)))
}

pub fn execute_expression(env: &mut Environment, line: &str) -> Result<Reply, InterpreterError> {
    let expr = line.strip_suffix(TERMINATOR).unwrap_or(line).trim();

    if let Some(value) = env.get_var(expr) {
        return Ok(Reply::text(value.to_string()));
    }

    evaluate_or_reject(env, expr).map(|value| Reply::text(value.to_string()))
}

fn evaluate_or_reject(env: &Environment, source: &str) -> Result<Value, InterpreterError> {
    evaluate_source(source, env).map_err(|err| {
        debug!(source, %err, "expression rejected");
        InterpreterError::Evaluation {
            expr: source.to_string(),
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::ClassOrigin;

    fn env() -> Environment {
        Environment::with_seed(3)
    }

    #[test]
    fn test_import_is_idempotent() {
        let mut env = env();
        execute_import(&mut env, "import java.time.Duration;").expect("import failed");
        execute_import(&mut env, "import java.time.Duration;").expect("import failed");
        let count = env
            .imports_sorted()
            .into_iter()
            .filter(|i| *i == "java.time.Duration")
            .count();
        assert_eq!(count, 1);
        assert_eq!(
            execute_import(&mut env, "import 1bad;"),
            Err(InterpreterError::InvalidImport)
        );
    }

    #[test]
    fn test_class_overwrites_silently() {
        let mut env = env();
        let first = execute_class(&mut env, "class Dog { int legs; }").expect("class failed");
        let second = execute_class(&mut env, "class Dog { }").expect("class failed");
        assert_eq!(first.text, "Defined class Dog");
        assert_eq!(second.text, "Defined class Dog");
        assert_eq!(env.class_source("Dog"), Some("class Dog { }"));
    }

    #[test]
    fn test_print_resolution_order() {
        let mut env = env();
        env.set_var("s", Value::Str("hi".to_string()));
        let print = |env: &mut Environment, line: &str| {
            execute_print(env, line).expect("print failed").text
        };
        assert_eq!(print(&mut env, r#"System.out.println("s");"#), "s");
        assert_eq!(print(&mut env, "System.out.println(s);"), "hi");
        assert_eq!(print(&mut env, "System.out.print(1 + 2);"), "1 + 2");
        assert_eq!(print(&mut env, r#"System.out.println("a\n");"#), r"a\n");
    }

    #[test]
    fn test_construction_binds_handle() {
        let mut env = env();
        execute_construction(&mut env, "m = new HashMap<>();").expect("construction failed");
        let Some(Value::Object(handle)) = env.get_var("m") else {
            panic!("m should hold an object");
        };
        assert_eq!(handle.class_name, "HashMap");
        assert!(handle.to_string().starts_with("HashMap@"));
    }

    #[test]
    fn test_construction_of_declared_class() {
        let mut env = env();
        execute_class(&mut env, "class Dog {}").expect("class failed");
        execute_construction(&mut env, "Dog d = new Dog(\"rex\", 3);")
            .expect("construction failed");
        let Some(Value::Object(handle)) = env.get_var("d") else {
            panic!("d should hold an object");
        };
        assert_eq!(handle.origin, ClassOrigin::Declared);
    }

    #[test]
    fn test_assignment_literal_kinds() {
        let mut env = env();
        for line in [
            r#"a = "text";"#,
            "b = true;",
            "c = 42;",
            "d = 2.5;",
            "e = c;",
            "f = c * 2;",
        ] {
            execute_assignment(&mut env, line).expect(line);
        }
        assert_eq!(env.get_var("a"), Some(&Value::Str("text".to_string())));
        assert_eq!(env.get_var("b"), Some(&Value::Bool(true)));
        assert_eq!(env.get_var("c"), Some(&Value::Int(42)));
        assert_eq!(env.get_var("d"), Some(&Value::Float(2.5)));
        assert_eq!(env.get_var("e"), Some(&Value::Int(42)));
        assert_eq!(env.get_var("f"), Some(&Value::Int(84)));
    }

    #[test]
    fn test_failed_assignment_does_not_bind() {
        let mut env = env();
        let err = execute_assignment(&mut env, "y = someUndefinedExpr + + ;").unwrap_err();
        assert_eq!(err.to_string(), "Cannot evaluate expression: someUndefinedExpr + +");
        assert!(!env.has_var("y"));
    }

    #[test]
    fn test_system_exit_without_bindings() {
        let mut env = env();
        let reply = execute_method_call(&mut env, "System.exit(0);").expect("exit failed");
        assert_eq!(reply.text, PROCESS_FINISHED);
        assert!(reply.terminate);
    }

    #[test]
    fn test_method_call_on_unbound_name() {
        let mut env = env();
        assert_eq!(
            execute_method_call(&mut env, "foo.bar();"),
            Err(InterpreterError::UnknownVariable {
                name: "foo".to_string()
            })
        );
        assert_eq!(
            execute_method_call(&mut env, "a.b.c();"),
            Err(InterpreterError::InvalidMethodCall)
        );
    }

    #[test]
    fn test_expression_strips_terminator() {
        let mut env = env();
        env.set_var("x", Value::Int(5));
        assert_eq!(execute_expression(&mut env, "x;").expect("expr").text, "5");
        assert_eq!(execute_expression(&mut env, "x + 1 ;").expect("expr").text, "6");
        assert!(execute_expression(&mut env, "nope;").is_err());
    }
}
