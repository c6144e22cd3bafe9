use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses an array literal `[<expr>, ...]`.
    ///
    /// Entered with the current token on the opening `[`. Elements may be
    /// arbitrary expressions; a trailing comma is not accepted.
    pub(crate) fn parse_array_expr(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        let elements = self.parse_expr_list(&Token::Rbracket)?;

        Ok(Expr::ArrayLiteral { elements, line })
    }

    /// Parses a hash literal `{<key>: <value>, ...}`.
    ///
    /// Entered with the current token on the opening `{`. Keys and values
    /// are arbitrary expressions; whether a key is hashable is checked at
    /// evaluation time, not here. As in every other comma-separated list,
    /// a trailing comma is not accepted.
    ///
    /// # Errors
    /// `UnexpectedToken` when a `:` between key and value, a `,` between
    /// pairs, or the closing `}` is missing.
    pub(crate) fn parse_hash_expr(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        let mut pairs = Vec::new();

        if self.lookahead_is(&Token::Rbrace) {
            self.bump();
            return Ok(Expr::HashLiteral { pairs, line });
        }

        self.bump();
        pairs.push(self.parse_hash_pair()?);

        while self.lookahead_is(&Token::Comma) {
            self.bump();
            self.bump();
            pairs.push(self.parse_hash_pair()?);
        }

        self.expect_lookahead(&Token::Rbrace)?;

        Ok(Expr::HashLiteral { pairs, line })
    }

    /// Parses one `<key>: <value>` pair of a hash literal, entered with
    /// the current token on the first token of the key.
    fn parse_hash_pair(&mut self) -> ParseResult<(Expr, Expr)> {
        let key = self.parse_expr(Precedence::Lowest)?;

        self.expect_lookahead(&Token::Colon)?;
        self.bump();
        let value = self.parse_expr(Precedence::Lowest)?;

        Ok((key, value))
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// Entered with the current token on the opening delimiter. Shared by
    /// array literals and call argument lists; leaves the current token on
    /// the terminator.
    pub(crate) fn parse_expr_list(&mut self, end: &Token) -> ParseResult<Vec<Expr>> {
        let mut exprs = Vec::new();

        if self.lookahead_is(end) {
            self.bump();
            return Ok(exprs);
        }

        self.bump();
        exprs.push(self.parse_expr(Precedence::Lowest)?);

        while self.lookahead_is(&Token::Comma) {
            self.bump();
            self.bump();
            exprs.push(self.parse_expr(Precedence::Lowest)?);
        }

        self.expect_lookahead(end)?;

        Ok(exprs)
    }
}
