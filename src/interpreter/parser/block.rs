use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::{ParseResult, Parser}},
};

impl Parser<'_> {
    /// Parses a brace-delimited statement block.
    ///
    /// Entered with the current token on the opening `{`; leaves the
    /// current token on the closing `}`. Running out of input before the
    /// closing brace is a syntax error, never a silently truncated block.
    ///
    /// # Returns
    /// The statements between the braces, possibly empty.
    ///
    /// # Errors
    /// `UnexpectedToken` when end of input is reached before `}`, or any
    /// error from a contained statement.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut block = Vec::new();
        self.bump();

        while !self.current_is(&Token::Rbrace) {
            if self.current_is(&Token::Eof) {
                return Err(ParseError::UnexpectedToken { expected: Token::Rbrace.kind_name()
                                                                                .to_string(),
                                                         found:    Token::Eof.kind_name()
                                                                             .to_string(),
                                                         line:     self.line(), });
            }

            block.push(self.parse_stmt()?);
            self.bump();
        }

        Ok(block)
    }
}
