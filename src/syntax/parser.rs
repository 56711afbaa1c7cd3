use std::{iter::Peekable, vec};

use crate::error::{EvalError, EvalResult};

use super::{
    lexer::tokenize,
    token::{Spanned, Token},
    ExprParser, Expression,
};

// Parentheses, calls and unary minus.
const MAX_DEPTH: usize = 256;
// Every operator adds a level to the left spine of the tree, so this also
// bounds the depth of evaluation.
const MAX_TOKENS: usize = 1024;

pub(crate) struct Parser<'src> {
    tokens: Peekable<vec::IntoIter<Spanned<'src>>>,
    depth: usize,
    open_parens: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> EvalResult<Self> {
        let tokens = tokenize(src)?;
        if tokens.len() > MAX_TOKENS {
            log::debug!("{} tokens exceed the limit of {MAX_TOKENS}", tokens.len());
            return Err(EvalError::TooLong);
        }
        log::trace!("tokens: {tokens:?}");

        Ok(Self {
            tokens: tokens.into_iter().peekable(),
            depth: 0,
            open_parens: 0,
        })
    }

    pub fn parse(&mut self) -> EvalResult<Box<Expression>> {
        let expr = match self.parse_expr()? {
            None => return Err(EvalError::Empty),
            Some(expr) => expr,
        };

        match self.tokens.next() {
            None => Ok(expr),
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Err(EvalError::UnbalancedParens),
            Some(spanned) => Err(EvalError::UnexpectedToken(spanned.pos)),
        }
    }

    #[inline]
    pub(super) fn peek(&mut self) -> Option<&Token<'src>> {
        self.tokens.peek().map(|spanned| &spanned.token)
    }

    #[inline(always)]
    pub(super) fn bump(&mut self) {
        let _ = self.tokens.next();
    }

    pub(super) fn next(&mut self) -> Option<Spanned<'src>> {
        self.tokens.next()
    }

    /// The error for input that ends where an operand is still required.
    pub(super) fn end_of_input(&self) -> EvalError {
        if self.open_parens > 0 {
            EvalError::UnbalancedParens
        } else {
            EvalError::UnexpectedEnd
        }
    }

    pub(super) fn expect_expr(&mut self) -> EvalResult<Box<Expression>> {
        match self.parse_expr()? {
            Some(expr) => Ok(expr),
            None => Err(self.end_of_input()),
        }
    }

    pub(super) fn expect_closing(&mut self) -> EvalResult<()> {
        match self.tokens.next() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => {
                self.open_parens -= 1;
                self.leave();
                Ok(())
            }
            None => Err(EvalError::UnbalancedParens),
            Some(spanned) => Err(EvalError::UnexpectedToken(spanned.pos)),
        }
    }

    pub(super) fn open_paren(&mut self) -> EvalResult<()> {
        self.enter()?;
        self.open_parens += 1;
        Ok(())
    }

    pub(super) fn has_open_parens(&self) -> bool {
        self.open_parens > 0
    }

    pub(super) fn enter(&mut self) -> EvalResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            log::debug!("nesting exceeds {MAX_DEPTH} levels");
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }
}
