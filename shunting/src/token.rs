use std::fmt;

/// Binary operator symbols.
pub static OPERATORS: &[char] = &['+', '-', '*', '/', '^'];
/// Every char that ends a numeric literal. Each one is a token by itself.
pub static DELIMITERS: &[char] = &['(', ')', ' ', '+', '-', '*', '/', '^'];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    BOp(Op),
    UMinus,
    OParen,
    CParen,
}

// All binary operators are left associative, '^' included.
// UMinus only gets compared while it sits on the operator stack,
// it outranks every binary operator so '-2^2' is '(-2)^2'.
pub fn precedence(token: &Token) -> usize {
    match *token {
        Token::OParen => 0, // keep at bottom
        Token::BOp(Op::Add) | Token::BOp(Op::Sub) => 1,
        Token::BOp(Op::Mul) | Token::BOp(Op::Div) | Token::BOp(Op::Pow) => 2,
        _ => 3,
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Number(n) => write!(f, "{}", n),
            Token::BOp(op) => write!(f, "{}", op.symbol()),
            Token::UMinus => write!(f, "-"),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}
