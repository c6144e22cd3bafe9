use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The binding strength of an operator in the precedence ladder.
///
/// Ordered lowest to highest: equality, comparison, additive,
/// multiplicative, prefix, call, index. `parse_expr` keeps consuming infix
/// operators while the caller's precedence is strictly lower than the next
/// token's, which makes operators of equal precedence left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The caller precedence used for full expressions.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `<=`, `>`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-`, `+`, `!`
    Prefix,
    /// `callee(...)`
    Call,
    /// `left[...]`
    Index,
}

/// Consumes a token stream and builds the program AST.
///
/// The parser keeps exactly two tokens of state, `current` and
/// `lookahead`; `bump` shifts the lookahead into current and pulls the
/// next token from the stream. Statement parsing is recursive descent;
/// expression parsing is precedence climbing.
///
/// Any expected-token mismatch aborts the whole parse: no statement-level
/// recovery is attempted and no partial program is returned.
pub struct Parser<'a> {
    tokens:    TokenStream<'a>,
    current:   (Token, usize),
    lookahead: (Token, usize),
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token stream, priming `current` and
    /// `lookahead` from it.
    #[must_use]
    pub fn new(mut tokens: TokenStream<'a>) -> Self {
        let current = tokens.next();
        let lookahead = tokens.next();

        Self { tokens,
               current,
               lookahead }
    }

    /// Creates a parser directly over source text.
    #[must_use]
    pub fn from_source(source: &'a str) -> Self {
        Self::new(TokenStream::new(source))
    }

    /// Shifts the lookahead token into current and pulls the next token.
    pub(crate) fn bump(&mut self) {
        self.current = std::mem::replace(&mut self.lookahead, self.tokens.next());
    }

    /// The token currently being parsed.
    pub(crate) const fn current(&self) -> &Token {
        &self.current.0
    }

    /// The one token of lookahead beyond current.
    pub(crate) const fn lookahead(&self) -> &Token {
        &self.lookahead.0
    }

    /// The source line of the current token.
    pub(crate) const fn line(&self) -> usize {
        self.current.1
    }

    /// Tests whether the current token has the given kind.
    pub(crate) fn current_is(&self, token: &Token) -> bool {
        self.current.0.is_kind(token)
    }

    /// Tests whether the lookahead token has the given kind.
    pub(crate) fn lookahead_is(&self, token: &Token) -> bool {
        self.lookahead.0.is_kind(token)
    }

    /// Requires the lookahead token to have the given kind and consumes
    /// it, making it the current token.
    ///
    /// # Errors
    /// `UnexpectedToken` naming the expected and actual kinds when the
    /// check fails. This is the error that aborts parsing on malformed
    /// input.
    pub(crate) fn expect_lookahead(&mut self, token: &Token) -> ParseResult<()> {
        if self.lookahead_is(token) {
            self.bump();
            return Ok(());
        }

        Err(ParseError::UnexpectedToken { expected: token.kind_name().to_string(),
                                          found:    self.lookahead.0.kind_name().to_string(),
                                          line:     self.lookahead.1, })
    }

    /// Maps a token to the precedence it binds with as an infix operator.
    ///
    /// Tokens that cannot continue an expression map to `Lowest`, which
    /// ends the infix loop.
    pub(crate) const fn precedence_of(token: &Token) -> Precedence {
        match token {
            Token::Equal | Token::NotEqual => Precedence::Equals,
            Token::LessThan
            | Token::LessThanEqual
            | Token::GreaterThan
            | Token::GreaterThanEqual => Precedence::LessGreater,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Slash | Token::Asterisk => Precedence::Product,
            Token::Lparen => Precedence::Call,
            Token::Lbracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }

    /// The precedence the lookahead token would bind with.
    pub(crate) const fn lookahead_precedence(&self) -> Precedence {
        Self::precedence_of(&self.lookahead.0)
    }

    /// Parses the whole token stream into a program.
    ///
    /// Statements are parsed until the end-of-input token; the stream may
    /// be read past that point, since the tokenizer returns `Eof` forever.
    ///
    /// # Returns
    /// The ordered statement sequence making up the program.
    ///
    /// # Errors
    /// The first syntax error encountered; no partial program is returned.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut program = Vec::new();

        while !self.current_is(&Token::Eof) {
            program.push(self.parse_stmt()?);
            self.bump();
        }

        Ok(program)
    }

    /// Parses one expression at the given caller precedence.
    ///
    /// The current token selects a prefix rule that produces the left
    /// operand. The infix loop then keeps extending it: while the next
    /// token is not a statement-ending semicolon and binds strictly
    /// tighter than the caller, the matching infix rule (operator
    /// application, call, or index) consumes it and wraps `left`.
    ///
    /// Equal precedence does not continue the loop, which is exactly what
    /// makes `a - b - c` parse as `(a - b) - c`.
    ///
    /// # Parameters
    /// - `precedence`: The binding strength of the enclosing construct.
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Errors
    /// `NoPrefixRule` when the current token cannot start an expression,
    /// `IllegalToken` for lexically invalid input, or any error raised by
    /// a sub-rule.
    pub(crate) fn parse_expr(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let token = self.current().clone();
        let line = self.line();

        let mut left = match token {
            Token::Ident(name) => Expr::Ident { name, line },
            Token::Int(value) => Expr::IntLiteral { value, line },
            Token::Str(value) => Expr::StringLiteral { value, line },
            Token::Bool(value) => Expr::BoolLiteral { value, line },
            Token::Lbracket => self.parse_array_expr()?,
            Token::Lbrace => self.parse_hash_expr()?,
            Token::Bang | Token::Minus | Token::Plus => self.parse_prefix_expr()?,
            Token::Lparen => self.parse_grouped_expr()?,
            Token::If => self.parse_if_expr()?,
            Token::Func => self.parse_func_expr()?,
            Token::Illegal => return Err(ParseError::IllegalToken { line }),
            token => {
                return Err(ParseError::NoPrefixRule { token: token.kind_name().to_string(),
                                                      line });
            },
        };

        while !self.lookahead_is(&Token::Semicolon) && precedence < self.lookahead_precedence() {
            left = match self.lookahead() {
                Token::Plus
                | Token::Minus
                | Token::Slash
                | Token::Asterisk
                | Token::Equal
                | Token::NotEqual
                | Token::LessThan
                | Token::LessThanEqual
                | Token::GreaterThan
                | Token::GreaterThanEqual => {
                    self.bump();
                    self.parse_infix_expr(left)?
                },
                Token::Lbracket => {
                    self.bump();
                    self.parse_index_expr(left)?
                },
                Token::Lparen => {
                    self.bump();
                    self.parse_call_expr(left)?
                },
                _ => return Ok(left),
            };
        }

        Ok(left)
    }
}
