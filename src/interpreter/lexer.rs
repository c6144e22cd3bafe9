use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; binding or parameter names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens, such as `"hello"`. No escape sequences are
    /// recognized; an unterminated string lexes as `Illegal`.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// A character sequence the lexer does not recognize.
    Illegal,
    /// A run of two or more newlines, produced by at least one blank line
    /// in the source. Parses as a no-op blank statement.
    ///
    /// The pattern also covers a single newline, which the callback
    /// filters out as skipped trivia; one rule owning every newline run
    /// keeps the lexer from committing to a blank-line match it cannot
    /// finish on normally-indented code.
    #[regex(r"\n([ \t\r]*\n)*", newline_run)]
    Blank,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// `=`
    #[token("=")]
    Assign,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `.`
    #[token(".")]
    Dot,
    /// `let`
    #[token("let")]
    Let,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    LessThan,
    /// `<=`
    #[token("<=")]
    LessThanEqual,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `>=`
    #[token(">=")]
    GreaterThanEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,
    /// `fn`
    #[token("fn")]
    Func,
    /// `return`
    #[token("return")]
    Return,
    /// `import`
    #[token("import")]
    Import,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, and carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the token's kind name as used in syntax error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "Ident",
            Self::Int(_) => "Int",
            Self::Bool(_) => "Bool",
            Self::Str(_) => "String",
            Self::Illegal => "Illegal",
            Self::Blank => "Blank",
            Self::Eof => "Eof",
            Self::Assign => "Assign",
            Self::If => "If",
            Self::Else => "Else",
            Self::While => "While",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Bang => "Bang",
            Self::Asterisk => "Asterisk",
            Self::Slash => "Slash",
            Self::Caret => "Caret",
            Self::Dot => "Dot",
            Self::Let => "Let",
            Self::Percent => "Percent",
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::LessThanEqual => "LessThanEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanEqual => "GreaterThanEqual",
            Self::Comma => "Comma",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Lparen => "Lparen",
            Self::Rparen => "Rparen",
            Self::Lbrace => "Lbrace",
            Self::Rbrace => "Rbrace",
            Self::Lbracket => "Lbracket",
            Self::Rbracket => "Rbracket",
            Self::Func => "Func",
            Self::Return => "Return",
            Self::Import => "Import",
            Self::Comment => "Comment",
            Self::Ignored => "Ignored",
        }
    }

    /// Tests whether two tokens have the same kind, ignoring any literal
    /// payload.
    #[must_use]
    pub fn is_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &mut logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a string literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the delimiting quotes.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Counts the newlines in a newline run and decides whether the run is
/// trivia or a blank token.
///
/// A single newline is an ordinary line break and is skipped; two or more
/// mean at least one blank line, which surfaces as `Token::Blank`. Line
/// tracking is updated either way.
fn newline_run(lex: &mut logos::Lexer<Token>) -> logos::Filter<()> {
    let newlines = lex.slice().matches('\n').count();
    lex.extras.line += newlines;

    if newlines > 1 {
        logos::Filter::Emit(())
    } else {
        logos::Filter::Skip
    }
}

/// A pull-based producer of `(Token, line)` pairs over a source string.
///
/// This is the interface the parser consumes: one token per [`next`] call,
/// lines are 1-based, lexically invalid input surfaces as `Token::Illegal`,
/// and once the input is exhausted every further call returns `Token::Eof`.
///
/// [`next`]: TokenStream::next
///
/// # Example
/// ```
/// use rill::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("let x");
/// assert_eq!(tokens.next(), (Token::Let, 1));
/// assert_eq!(tokens.next(), (Token::Ident("x".to_string()), 1));
/// assert_eq!(tokens.next(), (Token::Eof, 1));
/// assert_eq!(tokens.next(), (Token::Eof, 1));
/// ```
pub struct TokenStream<'a> {
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> TokenStream<'a> {
    /// Creates a token stream over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Produces the next token together with the line it was read on.
    ///
    /// # Returns
    /// - `(token, line)` for the next meaningful token in the input.
    /// - `(Token::Illegal, line)` when the input cannot be tokenized.
    /// - `(Token::Eof, line)` forever once the input is exhausted.
    pub fn next(&mut self) -> (Token, usize) {
        match self.lexer.next() {
            Some(Ok(token)) => (token, self.lexer.extras.line),
            Some(Err(())) => (Token::Illegal, self.lexer.extras.line),
            None => (Token::Eof, self.lexer.extras.line),
        }
    }
}
