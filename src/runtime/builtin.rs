use crate::{error::EvalResult, syntax::Function};

pub(super) fn apply(func: Function, arg: f64) -> EvalResult<f64> {
    match func {
        Function::Sin => Ok(arg.sin()),
        Function::Cos => Ok(arg.cos()),
        Function::Tan => Ok(arg.tan()),
        Function::Ln => native::ln(arg),
        Function::Sinh => Ok(arg.sinh()),
        Function::Cosh => Ok(arg.cosh()),
        Function::Tanh => Ok(arg.tanh()),
    }
}

mod native {
    use crate::{
        error::{EvalError, EvalResult},
        syntax::Function,
    };

    pub fn ln(x: f64) -> EvalResult<f64> {
        if x <= 0.0 {
            return Err(EvalError::DomainError(Function::Ln.name(), x));
        }
        Ok(x.ln())
    }
}
