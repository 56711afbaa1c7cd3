use super::token::{Constant, Function, Operator};

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Expression {
    Number(f64),
    Constant(Constant),
    Grouping(Box<Expression>),
    Unary(Box<Expression>),
    Binary {
        lhs: Box<Expression>,
        op: Operator,
        rhs: Box<Expression>,
    },
    Call {
        func: Function,
        arg: Box<Expression>,
    },
}
