//! Evaluate arithmetic expressions (`+ - * / ^`, parens, unary minus)
//! by reordering them into RPN with the shunting-yard algorithm.
//!
//! ```
//! assert_eq!(shunting::evaluate("(3 + 4) * 2"), Ok(14.0));
//! ```

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;
pub use rpneval::EvalErr;
pub use token::{Op, Token};
pub use validate::validate;

pub mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;

mod rpnprint;
mod token;
mod validate;


use thiserror::Error;

#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("unsupported chars: {0}")]
    UnsupportedChars(String),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// Parse and evaluate `expr`. Input is not checked against the allowed
/// charset, anything unexpected shows up as a `ParseError`.
pub fn evaluate(expr: &str) -> Result<f64, Error> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(rpn.eval()?)
}

/// Like `evaluate` but first rejects chars outside the supported set.
pub fn evaluate_input(expr: &str) -> Result<f64, Error> {
    validate(expr)?;
    evaluate(expr)
}
