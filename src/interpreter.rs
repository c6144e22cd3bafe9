/// Walks the AST and computes values.
///
/// This module implements the tree-walking evaluator: statement and
/// expression dispatch, the lexically-scoped environment chain, operator
/// semantics, collection construction and indexing, function application
/// with closure capture, and the builtin function table.
///
/// # Responsibilities
/// - Evaluates programs statement by statement, threading the environment.
/// - Realizes the language's strict typing rules as runtime errors.
/// - Propagates return signals out of blocks and absorbs them at call
///   boundaries.
pub mod evaluator;
/// Turns source text into a token stream.
///
/// This module derives the tokenizer and wraps it in a stream that tracks
/// line numbers, collapses blank-line runs into a single token, and
/// normalizes lexical errors and end of input so the parser never deals
/// with `Option` or `Result` tokens.
///
/// # Responsibilities
/// - Recognizes every token kind of the language, keywords included.
/// - Skips whitespace and `//` comments while counting lines.
/// - Yields `Illegal` for unrecognizable input and `Eof` forever at the
///   end.
pub mod lexer;
/// Builds the AST from the token stream.
///
/// This module implements recursive-descent statement parsing combined
/// with precedence-climbing expression parsing over two tokens of state.
///
/// # Responsibilities
/// - Parses all statement and expression forms into [`crate::ast`] nodes.
/// - Enforces the operator precedence ladder and left associativity.
/// - Aborts on the first syntax error with the offending line number.
pub mod parser;
/// Runtime value representations.
///
/// This module defines the dynamic value union the evaluator computes
/// with, the restricted key type for hashes, and the display formatting
/// used when results are printed.
pub mod value;
