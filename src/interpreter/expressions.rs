//! Expression evaluation
//!
//! Evaluates a parsed [`Expr`] against an [`Environment`] without modifying
//! it. The only names an expression can reach are bound variables; there is
//! nothing to call, so evaluation is a single bounded walk of the tree.
//!
//! # Semantics
//!
//! - `int op int` uses checked 64-bit arithmetic; `/` truncates toward zero
//! - mixing `int` and `double` promotes to `double`
//! - `+` concatenates when either side is a string
//! - `== !=` compare values of the same kind, `< <= > >=` compare numbers
//! - `&& || !` require booleans and short-circuit

use crate::interpreter::errors::EvalError;
use crate::memory::environment::Environment;
use crate::memory::value::Value;
use crate::parser::ast::{BinOp, Expr, UnOp};
use crate::parser::parse_expression;
use tracing::trace;

/// Parse and evaluate `source`
pub fn evaluate_source(source: &str, env: &Environment) -> Result<Value, EvalError> {
    let expr = parse_expression(source)?;
    let value = evaluate(&expr, env)?;
    trace!(source, %value, "evaluated expression");
    Ok(value)
}

/// Evaluate an expression tree
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
    match expr {
        Expr::IntLiteral(n) => Ok(Value::Int(*n)),
        Expr::FloatLiteral(x) => Ok(Value::Float(*x)),
        Expr::StringLiteral(s) => Ok(Value::Str(s.clone())),
        Expr::BoolLiteral(b) => Ok(Value::Bool(*b)),
        Expr::Variable(name) => env
            .get_var(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Expr::Unary { op, operand } => {
            let value = evaluate(operand, env)?;
            evaluate_unary(*op, value)
        }
        Expr::Binary { op, left, right } => match op {
            BinOp::And | BinOp::Or => evaluate_logical(*op, left, right, env),
            _ => {
                let l = evaluate(left, env)?;
                let r = evaluate(right, env)?;
                evaluate_binary(*op, &l, &r)
            }
        },
    }
}

fn evaluate_unary(op: UnOp, value: Value) -> Result<Value, EvalError> {
    match (op, value) {
        (UnOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| EvalError::Overflow(format!("-{}", n))),
        (UnOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (op, value) => Err(EvalError::UnaryTypeMismatch {
            op: match op {
                UnOp::Neg => "-",
                UnOp::Not => "!",
            },
            operand: value.kind_name(),
        }),
    }
}

fn evaluate_logical(
    op: BinOp,
    left: &Expr,
    right: &Expr,
    env: &Environment,
) -> Result<Value, EvalError> {
    let l = evaluate(left, env)?;
    let lb = l.as_bool().ok_or(EvalError::TypeMismatch {
        op: op.symbol(),
        left: l.kind_name(),
        right: "boolean",
    })?;

    // Short-circuit
    match (op, lb) {
        (BinOp::And, false) => return Ok(Value::Bool(false)),
        (BinOp::Or, true) => return Ok(Value::Bool(true)),
        _ => {}
    }

    let r = evaluate(right, env)?;
    r.as_bool().map(Value::Bool).ok_or(EvalError::TypeMismatch {
        op: op.symbol(),
        left: l.kind_name(),
        right: r.kind_name(),
    })
}

fn evaluate_binary(op: BinOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    let mismatch = || EvalError::TypeMismatch {
        op: op.symbol(),
        left: left.kind_name(),
        right: right.kind_name(),
    };

    match op {
        BinOp::Add => {
            if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
                return Ok(Value::Str(format!("{}{}", left, right)));
            }
            arithmetic(op, left, right).ok_or_else(mismatch)?
        }
        BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => {
            arithmetic(op, left, right).ok_or_else(mismatch)?
        }
        BinOp::Eq | BinOp::Ne => {
            let equal = values_equal(left, right).ok_or_else(mismatch)?;
            Ok(Value::Bool(if op == BinOp::Eq { equal } else { !equal }))
        }
        BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => {
            let (a, b) = match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(mismatch()),
            };
            let result = match op {
                BinOp::Lt => a < b,
                BinOp::Le => a <= b,
                BinOp::Gt => a > b,
                _ => a >= b,
            };
            Ok(Value::Bool(result))
        }
        BinOp::And | BinOp::Or => Err(mismatch()),
    }
}

/// Numeric arithmetic; `None` when either side is not a number
fn arithmetic(op: BinOp, left: &Value, right: &Value) -> Option<Result<Value, EvalError>> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(int_arithmetic(op, *a, *b)),
        _ => {
            let (a, b) = (left.as_f64()?, right.as_f64()?);
            Some(float_arithmetic(op, a, b))
        }
    }
}

fn int_arithmetic(op: BinOp, a: i64, b: i64) -> Result<Value, EvalError> {
    if matches!(op, BinOp::Div | BinOp::Mod) && b == 0 {
        return Err(EvalError::DivisionByZero);
    }
    let result = match op {
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div => a.checked_div(b),
        BinOp::Mod => a.checked_rem(b),
        _ => None,
    };
    result
        .map(Value::Int)
        .ok_or_else(|| EvalError::Overflow(format!("{} {} {}", a, op.symbol(), b)))
}

fn float_arithmetic(op: BinOp, a: f64, b: f64) -> Result<Value, EvalError> {
    let result = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Mod => a % b,
        _ => {
            return Err(EvalError::TypeMismatch {
                op: op.symbol(),
                left: "double",
                right: "double",
            })
        }
    };
    Ok(Value::Float(result))
}

/// Equality across kinds: numbers compare by value, everything else must
/// share a kind
fn values_equal(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Str(a), Value::Str(b)) => Some(a == b),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Object(a), Value::Object(b)) => Some(a == b),
        _ if left.is_numeric() && right.is_numeric() => {
            Some(left.as_f64()? == right.as_f64()?)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str) -> Result<Value, EvalError> {
        let mut env = Environment::with_seed(7);
        env.set_var("x", Value::Int(5));
        env.set_var("name", Value::Str("Ada".to_string()));
        env.set_var("flag", Value::Bool(true));
        evaluate_source(source, &env)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval("1 + 2 * 3"), Ok(Value::Int(7)));
        assert_eq!(eval("(1 + 2) * 3"), Ok(Value::Int(9)));
        assert_eq!(eval("7 / 2"), Ok(Value::Int(3)));
        assert_eq!(eval("-7 / 2"), Ok(Value::Int(-3)));
        assert_eq!(eval("7 % 3"), Ok(Value::Int(1)));
        assert_eq!(eval("x * x - 1"), Ok(Value::Int(24)));
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(eval("1 + 0.5"), Ok(Value::Float(1.5)));
        assert_eq!(eval("x / 2.0"), Ok(Value::Float(2.5)));
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            eval(r#""Hello, " + name"#),
            Ok(Value::Str("Hello, Ada".to_string()))
        );
        assert_eq!(eval(r#""n=" + x"#), Ok(Value::Str("n=5".to_string())));
        assert_eq!(eval(r#"1 + 2 + "a""#), Ok(Value::Str("3a".to_string())));
    }

    #[test]
    fn test_comparisons_and_logic() {
        assert_eq!(eval("x > 3 && flag"), Ok(Value::Bool(true)));
        assert_eq!(eval("x == 5.0"), Ok(Value::Bool(true)));
        assert_eq!(eval("!flag || x < 0"), Ok(Value::Bool(false)));
        assert_eq!(eval(r#"name != "Bob""#), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_short_circuit_skips_right_side() {
        assert_eq!(eval("false && missing"), Ok(Value::Bool(false)));
        assert_eq!(eval("true || missing"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_failures() {
        assert_eq!(
            eval("missing + 1"),
            Err(EvalError::UndefinedVariable("missing".to_string()))
        );
        assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
        assert!(matches!(eval("9223372036854775807 + 1"), Err(EvalError::Overflow(_))));
        assert!(matches!(eval("flag + 1"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(eval("-flag"), Err(EvalError::UnaryTypeMismatch { .. })));
        assert!(matches!(eval("x && flag"), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(eval(r#"name < 3"#), Err(EvalError::TypeMismatch { .. })));
        assert!(matches!(eval("a + + "), Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_evaluation_does_not_mutate() {
        let env = Environment::with_seed(7);
        let _ = evaluate_source("1 + 1", &env);
        assert_eq!(env.var_count(), 0);
    }
}
