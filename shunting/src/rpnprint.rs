use crate::parser::RPNExpr;
use crate::token::{precedence, Token};
use std::fmt;

// operands never need parens
const ATOM: usize = 4;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a Token),
    Node(&'a Token, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the RPN is malformed
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            let arity = match *token {
                Token::Number(_) => {
                    ops.push(AST::Leaf(token));
                    continue;
                }
                Token::BOp(_) => 2,
                Token::UMinus => 1,
                Token::OParen | Token::CParen => return None,
            };
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(AST::Node(token, operands));
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

fn printer(root: &AST) -> (String, usize) {
    match *root {
        AST::Leaf(token) => match *token {
            Token::Number(n) if n < 0.0 => (format!("{}", n), precedence(&Token::UMinus)),
            _ => (format!("{}", token), ATOM),
        },
        AST::Node(token, ref args) => match (token, &args[..]) {
            (Token::UMinus, [arg]) => {
                let prec = precedence(token);
                let subtree = printer(arg);
                if prec > subtree.1 {
                    (format!("-({})", subtree.0), prec)
                } else {
                    (format!("-{}", subtree.0), prec)
                }
            }
            (Token::BOp(op), [lhs, rhs]) => {
                let prec = precedence(token);
                let (lhs, rhs) = (printer(lhs), printer(rhs));
                let lh = if prec > lhs.1 { format!("({})", lhs.0) } else { lhs.0 };
                // left associative: an equal rhs was grouped explicitly,
                // a negated rhs can't follow an operator bare
                let rh = if prec >= rhs.1 || rhs.0.starts_with('-') {
                    format!("({})", rhs.0)
                } else {
                    rhs.0
                };
                (format!("{} {} {}", lh, op.symbol(), rh), prec)
            }
            _ => unreachable!(),
        },
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            // not a tree, show the raw sequence
            None => {
                let raw = self.0.iter().map(|t| t.to_string()).collect::<Vec<String>>();
                write!(f, "[{}]", raw.join(" "))
            }
        }
    }
}
