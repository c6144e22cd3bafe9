//! # rill
//!
//! rill is a small, dynamically typed scripting language written in Rust.
//! It lexes, parses, and evaluates programs with support for integers,
//! strings, booleans, arrays, hashes, first-class functions with closures,
//! and a handful of builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Evaluator, parser::core::Parser, value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps node payloads well-typed so the evaluator can match
///   exhaustively without re-validation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries detailed information about failures, including error kinds,
/// descriptions, and source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a complete program, returning its final value.
///
/// The source is tokenized and parsed up front; evaluation only starts on
/// a syntactically valid program. The result is the value of the last
/// value-producing statement, or `null` for an empty program.
///
/// # Errors
/// Returns the first syntax error or runtime error encountered, boxed as a
/// trait object so both phases share one error channel.
///
/// # Examples
/// ```
/// use rill::{interpreter::value::core::Value, run};
///
/// let result = run("let double = fn (x) { x * 2 }; double(21)").unwrap();
/// assert_eq!(result, Value::Int(42));
///
/// // 'y' is never defined, so evaluation fails.
/// assert!(run("let x = y + 1").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let program = Parser::from_source(source).parse()?;

    let mut evaluator = Evaluator::new();
    let result = evaluator.eval_program(&program)?;

    Ok(result)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string. If execution succeeds, it returns `Ok(())`; otherwise, it
/// returns an error with details about the failure. With `auto_print` set,
/// the program's final value is printed to standard output unless it is
/// `null`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if any runtime
/// error occurs.
///
/// # Examples
/// ```
/// use rill::get_result;
///
/// // Simple program: the result will be calculated and no error should occur.
/// let source = "let result = 2 + 2";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = run(source)?;

    if auto_print && !result.is_null() {
        println!("{result}");
    }

    Ok(())
}
