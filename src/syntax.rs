mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub(crate) use expr::Expression;
pub(crate) use parser::Parser;
pub use token::Function;
pub(crate) use token::Operator;

use crate::error::EvalResult;

use token::Precedence;

pub(crate) trait ExprParser {
    fn parse_expr(&mut self) -> EvalResult<Option<Box<Expression>>>;
    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> EvalResult<Option<Box<Expression>>>;
    fn parse_expr_lhs(&mut self) -> EvalResult<Option<Box<Expression>>>;
    fn parse_grouping_expr(&mut self) -> EvalResult<Box<Expression>>;
    fn parse_unary_expr(&mut self) -> EvalResult<Box<Expression>>;
    fn parse_call_expr(&mut self, func: Function) -> EvalResult<Box<Expression>>;
}
