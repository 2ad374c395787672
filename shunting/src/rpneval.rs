use thiserror::Error;

use crate::parser::RPNExpr;
use crate::token::{Op, Token};

#[derive(Error, PartialEq, Debug)]
pub enum EvalErr {
    #[error("division by zero")]
    DivisionByZero,
    // the two below mean the RPN sequence is malformed, the parser never
    // produces one of those
    #[error("stack underflow: operator is missing operands")]
    StackUnderflow,
    #[error("{0} operands left over after evaluation")]
    TrailingOperands(usize),
    #[error("unexpected token in RPN: {0}")]
    BadToken(String),
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                Token::Number(num) => operands.push(num),
                Token::BOp(op) => {
                    let r = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    if op == Op::Div && r == 0.0 {
                        return Err(EvalErr::DivisionByZero);
                    }
                    let l = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    operands.push(match op {
                        Op::Add => l + r,
                        Op::Sub => l - r,
                        Op::Mul => l * r,
                        Op::Div => l / r,
                        Op::Pow => l.powf(r),
                    });
                }
                Token::UMinus => {
                    let o = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    operands.push(-o);
                }
                Token::OParen | Token::CParen => {
                    return Err(EvalErr::BadToken(token.to_string()))
                }
            }
        }
        let result = operands.pop().ok_or(EvalErr::StackUnderflow)?;
        if !operands.is_empty() {
            return Err(EvalErr::TrailingOperands(operands.len()));
        }
        Ok(result)
    }
}
