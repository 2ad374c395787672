use crate::parser::{ParseError, ShuntingParser};
use crate::token::{Op, Token};

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/(-(1-5))^2^3").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::Number(2.0),
        Token::BOp(Op::Mul),
        Token::Number(1.0),
        Token::Number(5.0),
        Token::BOp(Op::Sub),
        Token::UMinus,
        Token::BOp(Op::Div),
        Token::Number(2.0),
        Token::BOp(Op::Pow),
        Token::Number(3.0),
        Token::BOp(Op::Pow),
        Token::BOp(Op::Add),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("(3 + 4) * 2").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::BOp(Op::Add),
        Token::Number(2.0),
        Token::BOp(Op::Mul),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn test_parse3() {
    let rpn = ShuntingParser::parse_str("1 - (2.5 * .5) ^ 2").unwrap();
    let expect = [
        Token::Number(1.0),
        Token::Number(2.5),
        Token::Number(0.5),
        Token::BOp(Op::Mul),
        Token::Number(2.0),
        Token::BOp(Op::Pow),
        Token::BOp(Op::Sub),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn left_associative() {
    let rpn = ShuntingParser::parse_str("2 ^ 3 ^ 2").unwrap();
    let expect = [
        Token::Number(2.0),
        Token::Number(3.0),
        Token::BOp(Op::Pow),
        Token::Number(2.0),
        Token::BOp(Op::Pow),
    ];
    assert_eq!(&rpn[..], &expect[..]);

    let rpn = ShuntingParser::parse_str("8 / 4 * 2").unwrap();
    let expect = [
        Token::Number(8.0),
        Token::Number(4.0),
        Token::BOp(Op::Div),
        Token::Number(2.0),
        Token::BOp(Op::Mul),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn unary_minus() {
    let rpn = ShuntingParser::parse_str("-5 + 3").unwrap();
    let expect = [
        Token::Number(5.0),
        Token::UMinus,
        Token::Number(3.0),
        Token::BOp(Op::Add),
    ];
    assert_eq!(&rpn[..], &expect[..]);

    // after '(' or another negation
    let rpn = ShuntingParser::parse_str("-(- 4) * (-3)").unwrap();
    let expect = [
        Token::Number(4.0),
        Token::UMinus,
        Token::UMinus,
        Token::Number(3.0),
        Token::UMinus,
        Token::BOp(Op::Mul),
    ];
    assert_eq!(&rpn[..], &expect[..]);

    // but never after an operand
    let rpn = ShuntingParser::parse_str("(1)-2").unwrap();
    let expect = [Token::Number(1.0), Token::Number(2.0), Token::BOp(Op::Sub)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn no_parens_in_output() {
    let rpn = ShuntingParser::parse_str("((1 + (2)) * ((3)))").unwrap();
    assert!(rpn.iter().all(|t| *t != Token::OParen && *t != Token::CParen));
    assert_eq!(rpn.len(), 5);
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(1 + (2 * 3)");
    assert_eq!(rpn, Err(ParseError::MissingCParen));

    let rpn = ShuntingParser::parse_str("(1 + 2) * 3)");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str(")");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str("3 + + 4");
    assert_eq!(rpn, Err(ParseError::DuplicateOperator(format!("+"))));

    let rpn = ShuntingParser::parse_str("3**4");
    assert_eq!(rpn, Err(ParseError::DuplicateOperator(format!("*"))));

    let rpn = ShuntingParser::parse_str("- * 4");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!("*"))));

    let rpn = ShuntingParser::parse_str("3 + abc");
    assert_eq!(rpn, Err(ParseError::MalformedNumber(format!("abc"))));

    let rpn = ShuntingParser::parse_str("1.2.3 * 2");
    assert_eq!(rpn, Err(ParseError::MalformedNumber(format!("1.2.3"))));

    let rpn = ShuntingParser::parse_str(". + 1");
    assert_eq!(rpn, Err(ParseError::MalformedNumber(format!("."))));
}

#[test]
fn missing_operands() {
    let rpn = ShuntingParser::parse_str("+3");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!("+"))));

    let rpn = ShuntingParser::parse_str("(* 3)");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!("*"))));

    let rpn = ShuntingParser::parse_str("()");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!(")"))));

    let rpn = ShuntingParser::parse_str("(3 +)");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!(")"))));

    let rpn = ShuntingParser::parse_str("3 *");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!("end of input"))));

    let rpn = ShuntingParser::parse_str("-");
    assert_eq!(rpn, Err(ParseError::MissingOperand(format!("end of input"))));

    assert_eq!(ShuntingParser::parse_str(""), Err(ParseError::EmptyExpression));
    assert_eq!(ShuntingParser::parse_str("   "), Err(ParseError::EmptyExpression));
}

#[test]
fn missing_operators() {
    let rpn = ShuntingParser::parse_str("3 4");
    assert_eq!(rpn, Err(ParseError::MissingOperator(format!("4"))));

    let rpn = ShuntingParser::parse_str("2(3)");
    assert_eq!(rpn, Err(ParseError::MissingOperator(format!("("))));

    let rpn = ShuntingParser::parse_str("(1) 2");
    assert_eq!(rpn, Err(ParseError::MissingOperator(format!("2"))));
}

#[test]
fn parse_from_lexemes() {
    let mut lex = vec!["1", "+", " ", "2"].into_iter().map(String::from);
    let rpn = ShuntingParser::parse(&mut lex).unwrap();
    let expect = [Token::Number(1.0), Token::Number(2.0), Token::BOp(Op::Add)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn minus_after_operator() {
    // only a leading '-', or one after '(' or another negation, is unary
    for expr in &["3 - - 4", "3--4", "3 * -4", "2^-3", "1 + -(2)"] {
        let rpn = ShuntingParser::parse_str(expr);
        assert_eq!(rpn, Err(ParseError::DuplicateOperator(format!("-"))), "{}", expr);
    }
    let rpn = ShuntingParser::parse_str("3 * (-4)").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::UMinus,
        Token::BOp(Op::Mul),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn number_out_of_range() {
    let huge = format!("1{}", "0".repeat(400));
    let rpn = ShuntingParser::parse_str(&format!("{} + 1", huge));
    assert_eq!(rpn, Err(ParseError::NumberOutOfRange(huge)));

    let rpn = ShuntingParser::parse_str("1e999");
    assert_eq!(rpn, Err(ParseError::NumberOutOfRange(format!("1e999"))));
}
