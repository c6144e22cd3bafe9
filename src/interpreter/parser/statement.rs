use crate::{
    ast::{Expr, Stmt},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// - `let` starts a binding statement.
    /// - `return` starts a return statement.
    /// - `import` starts an import statement.
    /// - A blank-line token becomes the no-op `Blank` statement.
    /// - Anything else is parsed as an expression statement.
    ///
    /// Every statement form accepts an optional trailing semicolon;
    /// semicolons are terminators, never required.
    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.current() {
            Token::Let => self.parse_let_stmt(),
            Token::Return => self.parse_return_stmt(),
            Token::Import => self.parse_import_stmt(),
            Token::Blank => Ok(Stmt::Blank),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses `let <ident> = <expr> [;]`.
    ///
    /// A missing identifier after `let`, or a missing `=` after the
    /// identifier, is a syntax error naming the expected token. When the
    /// initializer is a function literal, the bound name is recorded on
    /// the function node.
    fn parse_let_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.line();

        self.expect_lookahead(&Token::Ident(String::new()))?;
        let name = match self.current() {
            Token::Ident(name) => name.clone(),
            // expect_lookahead just verified the kind.
            _ => unreachable!(),
        };

        self.expect_lookahead(&Token::Assign)?;
        self.bump();

        let expr = match self.parse_expr(Precedence::Lowest)? {
            Expr::Func { params, body, name: _, line } => {
                Expr::Func { params,
                             body,
                             name: Some(name.clone()),
                             line }
            },
            expr => expr,
        };

        if self.lookahead_is(&Token::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Let { name, expr, line })
    }

    /// Parses `return <expr> [;]`.
    fn parse_return_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.line();
        self.bump();

        let expr = self.parse_expr(Precedence::Lowest)?;

        if self.lookahead_is(&Token::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Return { expr, line })
    }

    /// Parses `import "<name>" [;]`.
    ///
    /// The grammar recognizes the statement shape; resolution is left to
    /// the evaluator, which reports imports as unsupported.
    fn parse_import_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.line();

        self.expect_lookahead(&Token::Str(String::new()))?;
        let name = match self.current() {
            Token::Str(name) => name.clone(),
            // expect_lookahead just verified the kind.
            _ => unreachable!(),
        };

        if self.lookahead_is(&Token::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Import { name, line })
    }

    /// Parses an expression used as a statement.
    fn parse_expr_stmt(&mut self) -> ParseResult<Stmt> {
        let line = self.line();
        let expr = self.parse_expr(Precedence::Lowest)?;

        if self.lookahead_is(&Token::Semicolon) {
            self.bump();
        }

        Ok(Stmt::Expression { expr, line })
    }
}
