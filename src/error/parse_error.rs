#[derive(Debug)]
/// Represents all errors that can occur during parsing.
///
/// Any parse error aborts the whole parse: no partial program is returned
/// and no statement is silently dropped.
pub enum ParseError {
    /// An expected-token check failed.
    UnexpectedToken {
        /// The kind name of the token the parser expected.
        expected: String,
        /// The kind name of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression appeared in expression
    /// position.
    NoPrefixRule {
        /// The kind name of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer produced an `Illegal` token.
    IllegalToken {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => write!(f,
                                                                      "Error on line {line}: expected next token to be {expected}, got {found} instead."),

            Self::NoPrefixRule { token, line } => {
                write!(f, "Error on line {line}: no prefix parse rule for {token}.")
            },

            Self::IllegalToken { line } => {
                write!(f, "Error on line {line}: illegal character sequence in input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
