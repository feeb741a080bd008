// Heuristic language detection
//
// Regex guesses over the raw snippet, checked in a fixed order. Best
// effort only: a wrong guess costs nothing but a mislabeled fence tag,
// and the result never overrides a language the caller supplied.

use once_cell::sync::Lazy;
use regex::Regex;

static JAVA_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+[A-Z]").unwrap());
static JAVA_MAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"public\s+static\s+void\s+main").unwrap());
static PYTHON_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^def\s+\w+").unwrap());
static PYTHON_PRINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\(.+\)").unwrap());
static C_INCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#include\s+<stdio\.h>").unwrap());
static C_MAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"int\s+main\s*\(").unwrap());
static CPP_INCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#include\s+<iostream>").unwrap());
static CPP_COUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"std::cout").unwrap());
static TS_INTERFACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"interface\s+\w+").unwrap());
static TS_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*\w+").unwrap());
static JS_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+\w+").unwrap());

/// Guess the language of a code snippet.
///
/// Returns `None` when no pattern matches; the caller decides the
/// fallback.
pub fn detect_language(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();

    if JAVA_CLASS.is_match(trimmed) || JAVA_MAIN.is_match(trimmed) {
        return Some("java");
    }

    if PYTHON_DEF.is_match(trimmed)
        || PYTHON_PRINT.is_match(trimmed)
        || (trimmed.contains("import ") && trimmed.contains("as"))
    {
        return Some("python");
    }

    if C_INCLUDE.is_match(trimmed) || (C_MAIN.is_match(trimmed) && trimmed.contains(';')) {
        return Some("c");
    }

    if CPP_INCLUDE.is_match(trimmed) || CPP_COUT.is_match(trimmed) {
        return Some("cpp");
    }

    if trimmed.starts_with("package ") || trimmed.contains("func main()") {
        return Some("go");
    }

    if TS_INTERFACE.is_match(trimmed) || (TS_ANNOTATION.is_match(trimmed) && trimmed.contains("=>"))
    {
        return Some("typescript");
    }

    if JS_FUNCTION.is_match(trimmed) || trimmed.contains("console.log") || trimmed.contains("=>") {
        return Some("javascript");
    }

    None
}
