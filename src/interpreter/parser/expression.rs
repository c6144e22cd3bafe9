use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a prefix operator expression.
    ///
    /// Entered with the current token on `!`, `-`, or `+`. The operand is
    /// parsed at `Prefix` precedence, so `-a + b` groups as `(-a) + b`
    /// while `-f(x)` still binds the call to `f`.
    pub(crate) fn parse_prefix_expr(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        let op = match self.current() {
            Token::Bang => PrefixOperator::Not,
            Token::Minus => PrefixOperator::Minus,
            Token::Plus => PrefixOperator::Plus,
            // parse_expr only dispatches here on those three tokens.
            _ => unreachable!(),
        };

        self.bump();
        let operand = self.parse_expr(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          operand: Box::new(operand),
                          line })
    }

    /// Parses the right-hand side of an infix operator expression.
    ///
    /// Entered with the current token on the operator and `left` already
    /// parsed. The right operand is parsed at the operator's own
    /// precedence, which gives left associativity for equal-precedence
    /// chains.
    pub(crate) fn parse_infix_expr(&mut self, left: Expr) -> ParseResult<Expr> {
        let line = self.line();
        let op = match self.current() {
            Token::Plus => InfixOperator::Plus,
            Token::Minus => InfixOperator::Minus,
            Token::Asterisk => InfixOperator::Multiply,
            Token::Slash => InfixOperator::Divide,
            Token::Equal => InfixOperator::Equal,
            Token::NotEqual => InfixOperator::NotEqual,
            Token::LessThan => InfixOperator::LessThan,
            Token::LessThanEqual => InfixOperator::LessThanEqual,
            Token::GreaterThan => InfixOperator::GreaterThan,
            Token::GreaterThanEqual => InfixOperator::GreaterThanEqual,
            // The infix loop only dispatches here on operator tokens.
            _ => unreachable!(),
        };

        let precedence = Self::precedence_of(self.current());
        self.bump();
        let right = self.parse_expr(precedence)?;

        Ok(Expr::Infix { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         line })
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner expression is returned as-is; grouping only affects how
    /// the surrounding expression associates, it adds no AST node.
    ///
    /// # Errors
    /// `UnexpectedToken` when the closing `)` is missing.
    pub(crate) fn parse_grouped_expr(&mut self) -> ParseResult<Expr> {
        self.bump();
        let inner = self.parse_expr(Precedence::Lowest)?;
        self.expect_lookahead(&Token::Rparen)?;

        Ok(inner)
    }

    /// Parses `if (<cond>) { ... }` with an optional `else { ... }`.
    ///
    /// The parentheses around the condition and the braces around both
    /// branches are mandatory.
    pub(crate) fn parse_if_expr(&mut self) -> ParseResult<Expr> {
        let line = self.line();

        self.expect_lookahead(&Token::Lparen)?;
        self.bump();
        let cond = self.parse_expr(Precedence::Lowest)?;
        self.expect_lookahead(&Token::Rparen)?;

        self.expect_lookahead(&Token::Lbrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.lookahead_is(&Token::Else) {
            self.bump();
            self.expect_lookahead(&Token::Lbrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { cond: Box::new(cond),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses a function literal `fn (<params>) { ... }`.
    ///
    /// The literal starts out anonymous; `let` binding fills in the name
    /// afterwards.
    pub(crate) fn parse_func_expr(&mut self) -> ParseResult<Expr> {
        let line = self.line();

        self.expect_lookahead(&Token::Lparen)?;
        let params = self.parse_func_params()?;

        self.expect_lookahead(&Token::Lbrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Func { params,
                        body,
                        name: None,
                        line })
    }

    /// Parses a comma-separated parameter name list up to `)`.
    ///
    /// Entered with the current token on the opening `(`.
    fn parse_func_params(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();

        if self.lookahead_is(&Token::Rparen) {
            self.bump();
            return Ok(params);
        }

        self.expect_lookahead(&Token::Ident(String::new()))?;
        params.push(self.current_ident());

        while self.lookahead_is(&Token::Comma) {
            self.bump();
            self.expect_lookahead(&Token::Ident(String::new()))?;
            params.push(self.current_ident());
        }

        self.expect_lookahead(&Token::Rparen)?;

        Ok(params)
    }

    /// The name carried by the current token, which must be an identifier.
    fn current_ident(&self) -> String {
        match self.current() {
            Token::Ident(name) => name.clone(),
            // Callers verify the kind with expect_lookahead first.
            _ => unreachable!(),
        }
    }

    /// Parses the argument list of a call expression.
    ///
    /// Entered with the current token on the opening `(` and the callee
    /// already parsed.
    pub(crate) fn parse_call_expr(&mut self, callee: Expr) -> ParseResult<Expr> {
        let line = self.line();
        let args = self.parse_expr_list(&Token::Rparen)?;

        Ok(Expr::Call { callee: Box::new(callee),
                        args,
                        line })
    }

    /// Parses the bracketed index of an index expression.
    ///
    /// Entered with the current token on the opening `[` and the indexed
    /// expression already parsed.
    ///
    /// # Errors
    /// `UnexpectedToken` when the closing `]` is missing.
    pub(crate) fn parse_index_expr(&mut self, left: Expr) -> ParseResult<Expr> {
        let line = self.line();

        self.bump();
        let index = self.parse_expr(Precedence::Lowest)?;
        self.expect_lookahead(&Token::Rbracket)?;

        Ok(Expr::Index { left: Box::new(left),
                         index: Box::new(index),
                         line })
    }
}
