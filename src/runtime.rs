mod builtin;
pub(crate) mod eval;
