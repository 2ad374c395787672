use std::ops::Deref;
use std::str::FromStr;

use lexers::{DelimTokenizer, Scanner};
use thiserror::Error;

use crate::token::{precedence, Op, Token, DELIMITERS};

#[derive(Error, PartialEq, Debug)]
pub enum ParseError {
    #[error("duplicate operator: {0}")]
    DuplicateOperator(String),
    #[error("malformed number: {0}")]
    MalformedNumber(String),
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),
    #[error("unmatched ')': missing opening paren")]
    MissingOParen,
    #[error("unmatched '(': missing closing paren")]
    MissingCParen,
    #[error("missing operand before {0}")]
    MissingOperand(String),
    #[error("missing operator before {0}")]
    MissingOperator(String),
    #[error("empty expression")]
    EmptyExpression,
}

/// An expression in postfix order. Only holds `Number`, `BOp` and `UMinus`.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

// after nothing, '(' or any operator the next token has to be an operand
fn expects_operand(last: &Option<Token>) -> bool {
    match *last {
        Some(Token::Number(_)) | Some(Token::CParen) => false,
        _ => true,
    }
}

// a '-' right after a binary operator stays binary and trips the
// duplicate operator check
fn makes_unary(last: &Option<Token>) -> bool {
    match *last {
        None | Some(Token::OParen) | Some(Token::UMinus) => true,
        _ => false,
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut DelimTokenizer::new(expr.chars(), DELIMITERS))
    }

    /// Reorder a stream of lexemes (as split by `DelimTokenizer`) into RPN.
    pub fn parse(lex: &mut impl Iterator<Item = String>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut last: Option<Token> = None;

        while let Some(lexeme) = lex.next() {
            if lexeme == " " {
                continue;
            }
            let token = Self::classify(&lexeme, &last)?;
            match token {
                Token::Number(_) | Token::OParen if !expects_operand(&last) => {
                    return Err(ParseError::MissingOperator(lexeme));
                }
                Token::Number(_) => out.push(token.clone()),
                Token::OParen => stack.push(token.clone()),
                Token::CParen => {
                    loop {
                        match stack.pop() {
                            Some(Token::OParen) => break,
                            Some(op) => out.push(op),
                            None => return Err(ParseError::MissingOParen),
                        }
                    }
                    if expects_operand(&last) {
                        return Err(ParseError::MissingOperand(lexeme));
                    }
                }
                Token::BOp(_) => {
                    match last {
                        Some(Token::BOp(_)) => return Err(ParseError::DuplicateOperator(lexeme)),
                        ref l if expects_operand(l) => {
                            return Err(ParseError::MissingOperand(lexeme))
                        }
                        _ => (),
                    }
                    let prec_rhs = precedence(&token);
                    while let Some(top) = stack.pop() {
                        if precedence(&top) < prec_rhs {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    stack.push(token.clone());
                }
                // binds to the next operand, nothing to pop
                Token::UMinus => stack.push(token.clone()),
            }
            last = Some(token);
        }

        match last {
            None => return Err(ParseError::EmptyExpression),
            ref l if expects_operand(l) => {
                return Err(ParseError::MissingOperand(format!("end of input")))
            }
            _ => (),
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }

    fn classify(lexeme: &str, last: &Option<Token>) -> Result<Token, ParseError> {
        let mut chars = lexeme.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match c {
                '(' => return Ok(Token::OParen),
                ')' => return Ok(Token::CParen),
                '-' if makes_unary(last) => return Ok(Token::UMinus),
                _ => {
                    if let Some(op) = Op::from_char(c) {
                        return Ok(Token::BOp(op));
                    }
                }
            }
        }
        let mut scanner = Scanner::new(lexeme.chars());
        match scanner.scan_number() {
            Some(ref num) if num.len() == lexeme.len() => match f64::from_str(num) {
                Ok(n) if n.is_finite() => Ok(Token::Number(n)),
                Ok(_) => Err(ParseError::NumberOutOfRange(lexeme.to_string())),
                Err(_) => Err(ParseError::MalformedNumber(lexeme.to_string())),
            },
            _ => Err(ParseError::MalformedNumber(lexeme.to_string())),
        }
    }
}
