//! Text patterns used by classification and the statement handlers
//!
//! Every regular expression the interpreter matches against lives here, so the
//! accepted shapes can be read (and tested) in one place. Patterns are compiled
//! once on first use.
//!
//! Identifiers follow Java's ASCII rules: a letter, `_` or `$`, then any of
//! those or digits.

use regex::Regex;
use std::sync::LazyLock;

/// Statement terminator
pub const TERMINATOR: char = ';';

/// Substring that marks an import line (must be a prefix)
pub const IMPORT_PREFIX: &str = "import ";

/// Substring that marks a class definition
pub const CLASS_MARKER: &str = "class ";

/// Substring shared by `System.out.print` and `System.out.println`
pub const PRINT_MARKER: &str = "System.out.print";

/// Substring that marks object construction
pub const CONSTRUCTION_MARKER: &str = "new ";

/// Substring that marks an assignment
pub const ASSIGNMENT_MARKER: &str = "=";

fn compile(pattern: &str) -> Regex {
    // Patterns are literals below; a failure here is a programming error
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// `import [static] a.b.C;` or `import a.b.*;`, capturing the path
pub static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^import\s+(?:static\s+)?([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*(?:\.\*)?)\s*;$")
});

/// Identifier following the `class` keyword
pub static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\bclass\s+([A-Za-z_$][\w$]*)"));

/// `System.out.print(...)` / `System.out.println(...)`, capturing the outer argument
pub static PRINT_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^System\.out\.print(?:ln)?\s*\((.*)\)\s*;$"));

/// `[Type] name = new ClassName[<...>](args);`, capturing name, class and args
pub static CONSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:[A-Za-z_$][\w$]*(?:<[^=]*>)?(?:\[\])*\s+)?([A-Za-z_$][\w$]*)\s*=\s*new\s+([A-Za-z_$][\w$]*)\s*(?:<[^>]*>)?\s*\((.*)\)\s*;$",
    )
});

/// `[final] [type] name = value;`, capturing name and value.
/// The value may not start with `=`, so `x == 1;` is not an assignment.
pub static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:final\s+)?(?:(?:int|long|short|byte|double|float|boolean|char|String|Integer|Long|Double|Float|Boolean|Character|Object|var)\s+)?([A-Za-z_$][\w$]*)\s*=\s*([^=\s].*?)\s*;$",
    )
});

/// Loose shape that routes a line to the method-call handler
pub static METHOD_CALL_HINT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)+\s*\("));

/// `object.method(args);`, capturing object, method and args
pub static METHOD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([A-Za-z_$][\w$]*)\.([A-Za-z_$][\w$]*)\s*\((.*)\)\s*;$")
});

/// Double-quoted literal; content is taken verbatim
pub static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r#"^"([^"]*)"$"#));

pub static BOOLEAN_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:true|false)$"));

pub static INTEGER_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+$"));

pub static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+\.\d+$"));

pub static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z_$][\w$]*$"));

/// Equal, non-zero counts of `{` and `}`
pub fn is_balanced_block(text: &str) -> bool {
    let open = text.matches('{').count();
    let close = text.matches('}').count();
    open > 0 && open == close
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures<'a>(re: &Regex, text: &'a str) -> Option<Vec<&'a str>> {
        re.captures(text).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|m| m.map_or("", |m| m.as_str()))
                .collect()
        })
    }

    #[test]
    fn test_all_patterns_compile() {
        for re in [
            &*IMPORT,
            &*CLASS_NAME,
            &*PRINT_CALL,
            &*CONSTRUCTION,
            &*ASSIGNMENT,
            &*METHOD_CALL_HINT,
            &*METHOD_CALL,
            &*STRING_LITERAL,
            &*BOOLEAN_LITERAL,
            &*INTEGER_LITERAL,
            &*FLOAT_LITERAL,
            &*IDENTIFIER,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_import() {
        assert_eq!(captures(&IMPORT, "import java.util.List;"), Some(vec!["java.util.List"]));
        assert_eq!(captures(&IMPORT, "import java.util.*;"), Some(vec!["java.util.*"]));
        assert_eq!(
            captures(&IMPORT, "import static java.lang.Math.max;"),
            Some(vec!["java.lang.Math.max"])
        );
        assert!(IMPORT.captures("import ;").is_none());
        assert!(IMPORT.captures("import java..util;").is_none());
    }

    #[test]
    fn test_class_name() {
        assert_eq!(
            captures(&CLASS_NAME, "public class Dog { }"),
            Some(vec!["Dog"])
        );
        assert!(CLASS_NAME.captures("class 1Dog {}").is_none());
    }

    #[test]
    fn test_print_call() {
        assert_eq!(
            captures(&PRINT_CALL, r#"System.out.println("a (b)");"#),
            Some(vec![r#""a (b)""#])
        );
        assert_eq!(captures(&PRINT_CALL, "System.out.print(x);"), Some(vec!["x"]));
        assert!(PRINT_CALL.captures("System.out.println x;").is_none());
    }

    #[test]
    fn test_construction() {
        assert_eq!(
            captures(&CONSTRUCTION, "list = new ArrayList();"),
            Some(vec!["list", "ArrayList", ""])
        );
        assert_eq!(
            captures(&CONSTRUCTION, "ArrayList<String> list = new ArrayList<>();"),
            Some(vec!["list", "ArrayList", ""])
        );
        assert_eq!(
            captures(&CONSTRUCTION, "Map<String, Integer> m = new HashMap<>(16);"),
            Some(vec!["m", "HashMap", "16"])
        );
        assert!(CONSTRUCTION.captures("new ArrayList();").is_none());
    }

    #[test]
    fn test_assignment() {
        assert_eq!(captures(&ASSIGNMENT, "x = 5;"), Some(vec!["x", "5"]));
        assert_eq!(captures(&ASSIGNMENT, "int x = 5 ;"), Some(vec!["x", "5"]));
        assert_eq!(
            captures(&ASSIGNMENT, r#"final String s = "a;b";"#),
            Some(vec!["s", r#""a;b""#])
        );
        assert!(ASSIGNMENT.captures("x == 5;").is_none());
        assert!(ASSIGNMENT.captures("x = ;").is_none());
        assert!(ASSIGNMENT.captures("1x = 5;").is_none());
    }

    #[test]
    fn test_method_call() {
        assert_eq!(
            captures(&METHOD_CALL, "list.add(1);"),
            Some(vec!["list", "add", "1"])
        );
        assert!(METHOD_CALL_HINT.is_match("a.b.c();"));
        assert!(METHOD_CALL.captures("a.b.c();").is_none());
        assert!(!METHOD_CALL_HINT.is_match("x + 1;"));
    }

    #[test]
    fn test_literals() {
        assert!(INTEGER_LITERAL.is_match("042"));
        assert!(!INTEGER_LITERAL.is_match("-1"));
        assert!(FLOAT_LITERAL.is_match("3.14"));
        assert!(!FLOAT_LITERAL.is_match("3."));
        assert!(BOOLEAN_LITERAL.is_match("false"));
        assert!(!BOOLEAN_LITERAL.is_match("False"));
        assert!(STRING_LITERAL.is_match(r#""""#));
        assert_eq!(
            captures(&STRING_LITERAL, r#""hello world""#),
            Some(vec!["hello world"])
        );
        assert!(!STRING_LITERAL.is_match(r#""a" + "b""#));
    }

    #[test]
    fn test_balanced_block() {
        assert!(is_balanced_block("{ }"));
        assert!(is_balanced_block("if (x) { y(); }"));
        assert!(!is_balanced_block("{ {"));
        assert!(!is_balanced_block("no braces"));
    }
}
