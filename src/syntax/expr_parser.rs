use crate::error::{EvalError, EvalResult};

use super::{
    token::{Assoc, Function, Precedence, Token},
    ExprParser, Expression, Operator, Parser,
};

impl<'src> ExprParser for Parser<'src> {
    fn parse_expr(&mut self) -> EvalResult<Option<Box<Expression>>> {
        self.parse_expr_with_precedence(1)
    }

    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> EvalResult<Option<Box<Expression>>> {
        let mut lhs = match self.parse_expr_lhs()? {
            None => return Ok(None),
            Some(expr) => expr,
        };

        while let Some(Token::Op(op)) = self.peek() {
            let op = *op;
            let (prec, assoc) = op.get();

            if prec < min_prec {
                break;
            }
            self.bump();

            let new_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };

            let rhs = match self.parse_expr_with_precedence(new_min_prec)? {
                None => return Err(self.end_of_input()),
                Some(expr) => expr,
            };

            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(Some(lhs))
    }

    fn parse_expr_lhs(&mut self) -> EvalResult<Option<Box<Expression>>> {
        let spanned = match self.next() {
            None => return Ok(None),
            Some(spanned) => spanned,
        };

        match spanned.token {
            Token::Number(v) => Ok(Some(Box::new(Expression::Number(v)))),
            Token::Const(c) => Ok(Some(Box::new(Expression::Constant(c)))),
            Token::Func(func) => Ok(Some(self.parse_call_expr(func)?)),
            Token::LParen => Ok(Some(self.parse_grouping_expr()?)),
            Token::Op(Operator::Minus) => Ok(Some(self.parse_unary_expr()?)),
            Token::RParen if !self.has_open_parens() => Err(EvalError::UnbalancedParens),
            other => {
                log::debug!("expected operand, found {other:?} at {}", spanned.pos);
                Err(EvalError::UnexpectedToken(spanned.pos))
            }
        }
    }

    fn parse_grouping_expr(&mut self) -> EvalResult<Box<Expression>> {
        self.open_paren()?;
        let expression = self.expect_expr()?;
        self.expect_closing()?;

        Ok(Box::new(Expression::Grouping(expression)))
    }

    fn parse_unary_expr(&mut self) -> EvalResult<Box<Expression>> {
        self.enter()?;
        let operand = match self.parse_expr_lhs()? {
            Some(expression) => expression,
            None => return Err(self.end_of_input()),
        };
        self.leave();

        Ok(Box::new(Expression::Unary(operand)))
    }

    fn parse_call_expr(&mut self, func: Function) -> EvalResult<Box<Expression>> {
        match self.peek() {
            Some(Token::LParen) => self.bump(),
            _ => return Err(EvalError::MissingArgument(func.name())),
        }
        // `sin(` with nothing after it is what a function key leaves behind.
        if let None | Some(Token::RParen) = self.peek() {
            return Err(EvalError::MissingArgument(func.name()));
        }

        self.open_paren()?;
        let arg = self.expect_expr()?;
        self.expect_closing()?;

        Ok(Box::new(Expression::Call { func, arg }))
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use crate::syntax::{
        expr::Expression,
        token::{Constant, Function, Operator},
    };

    fn parse(src: &str) -> Box<Expression> {
        Parser::new(src).unwrap().parse().unwrap()
    }

    #[test]
    fn parse_binary_expr() {
        use Expression::*;
        use Operator::*;

        let expected = Box::new(Binary {
            lhs: Box::new(Unary(Box::new(Grouping(Box::new(Number(5.0)))))),
            op: Plus,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(4.0)),
                op: Mul,
                rhs: Box::new(Number(7.0)),
            }),
        });

        assert_eq!(parse("-(5) + 4 * 7"), expected);
    }

    #[test]
    fn parse_binary_expr_2() {
        use Expression::*;
        use Operator::*;

        let expected = Box::new(Binary {
            lhs: Box::new(Grouping(Box::new(Binary {
                lhs: Box::new(Number(-5.0)),
                op: Plus,
                rhs: Box::new(Number(4.0)),
            }))),
            op: Div,
            rhs: Box::new(Number(7.0)),
        });

        assert_eq!(parse("(-5 + 4) / 7"), expected);
    }

    #[test]
    fn parse_left_assoc() {
        use Expression::*;
        use Operator::*;

        let expected = Box::new(Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(8.0)),
                op: Div,
                rhs: Box::new(Number(4.0)),
            }),
            op: Div,
            rhs: Box::new(Number(2.0)),
        });
        assert_eq!(parse("8 / 4 / 2"), expected);

        let expected = Box::new(Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(1.0)),
                op: Minus,
                rhs: Box::new(Number(2.0)),
            }),
            op: Plus,
            rhs: Box::new(Number(3.0)),
        });
        assert_eq!(parse("1 - 2 + 3"), expected);
    }

    #[test]
    fn parse_call_expr() {
        let expected = Box::new(Expression::Binary {
            lhs: Box::new(Expression::Unary(Box::new(Expression::Call {
                func: Function::Sin,
                arg: Box::new(Expression::Constant(Constant::E)),
            }))),
            op: Operator::Mul,
            rhs: Box::new(Expression::Call {
                func: Function::Ln,
                arg: Box::new(Expression::Binary {
                    lhs: Box::new(Expression::Number(2.0)),
                    op: Operator::Plus,
                    rhs: Box::new(Expression::Number(1.0)),
                }),
            }),
        });

        assert_eq!(parse("-sin(e) * ln(2 + 1)"), expected);
    }
}
