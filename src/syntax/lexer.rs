use std::{iter::Peekable, str::CharIndices};

use super::token::{Constant, Function, Operator, Spanned, Token};
use crate::error::{EvalError, EvalResult};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    // Character index of the next char, not its byte offset.
    pos: usize,
    prev: Option<Token<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Spanned<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let spanned = self.scan()?;
        self.prev = Some(spanned.token);
        Some(spanned)
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            pos: 0,
            prev: None,
        }
    }

    fn scan(&mut self) -> Option<Spanned<'src>> {
        loop {
            let pos = self.pos;
            let (off, c) = self.bump()?;

            let token = match c {
                '+' => Token::Op(Operator::Plus),
                '*' => Token::Op(Operator::Mul),
                '/' => Token::Op(Operator::Div),
                '(' => Token::LParen,
                ')' => Token::RParen,
                '-' => {
                    if self.signed_number_allowed() && Self::starts_number(&self.src[off + 1..]) {
                        self.read_number(off)
                    } else {
                        Token::Op(Operator::Minus)
                    }
                }
                c if c.is_whitespace() => continue,
                _ if Self::starts_number(&self.src[off..]) => self.read_number(off),
                c if c.is_ascii_alphabetic() => self.read_word(off),
                c => Token::Invalid(c),
            };

            return Some(Spanned::new(pos, token));
        }
    }

    #[inline]
    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next()?;
        self.pos += 1;
        Some(next)
    }

    fn slice_while<P>(&mut self, from_off: usize, mut predicate: P) -> &'src str
    where
        P: FnMut(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if !predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    // `-` folds into a literal only at the start or after an operator or `(`.
    fn signed_number_allowed(&self) -> bool {
        self.prev.map_or(true, |token| token.allows_signed_number())
    }

    fn starts_number(rest: &str) -> bool {
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        let mut seen_dot = self.src[from_off..].starts_with('.');
        let s = self.slice_while(from_off, |c| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                return true;
            }
            c.is_ascii_digit()
        });

        match s.parse::<f64>() {
            Ok(v) => Token::Number(v),
            Err(_) => Token::Invalid(s.chars().next().unwrap_or('.')),
        }
    }

    fn read_word(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_while(from_off, |c| c.is_ascii_alphabetic());

        if let Some(function) = Function::from_name(s) {
            return Token::Func(function);
        }
        if let Some(constant) = Constant::from_name(s) {
            return Token::Const(constant);
        }
        Token::Ident(s)
    }
}

/// Scans the whole input up front, failing at the first character or word
/// that is not part of the expression language.
pub(crate) fn tokenize(src: &str) -> EvalResult<Vec<Spanned<'_>>> {
    Lexer::new(src)
        .map(|spanned| match spanned.token {
            Token::Invalid(c) => {
                log::debug!("invalid character {c:?} at {}", spanned.pos);
                Err(EvalError::InvalidToken(spanned.pos))
            }
            Token::Ident(id) => {
                log::debug!("unknown name `{id}` at {}", spanned.pos);
                Err(EvalError::InvalidToken(spanned.pos))
            }
            _ => Ok(spanned),
        })
        .collect()
}
