use tfplot::Complex;
use tfplot::expr::{self, Error, eval, parse};

use crate::assert_near;

fn samples() -> Vec<Complex> {
    vec![Complex::from_imag(1.0), Complex::from_imag(10.0)]
}

fn eval_at(input: &str, s: Complex) -> Complex {
    expr::evaluate(input, &[s]).unwrap()[0]
}

#[test]
fn literal_only_expressions_check_but_do_not_evaluate() {
    for input in ["(1+2)/(3)", "2^3", "1.5*4-2", "((7))"] {
        assert!(expr::check(input).is_ok(), "{input}");
        assert_eq!(
            expr::evaluate(input, &samples()),
            Err(Error::Eval(eval::Error::ScalarResult)),
            "{input}"
        );
    }
}

#[test]
fn imbalanced_parentheses() {
    for input in ["(1+2", "1+2)", "((s)", ")s("] {
        assert!(
            matches!(
                expr::check(input),
                Err(Error::Parse(parse::Error::ImbalancedParentheses(..)))
            ),
            "{input}"
        );
    }
}

#[test]
fn unrecognized_char() {
    let err = expr::check("1+@").unwrap_err();
    assert!(err.to_string().contains('@'));
}

#[test]
fn non_commutative_order() {
    let s = Complex::new(3.0, 0.0);
    assert_eq!(eval_at("s-1", s), Complex::new(2.0, 0.0));
    assert_eq!(eval_at("1-s", s), Complex::new(-2.0, 0.0));
    assert_near!(abs, eval_at("1/s", s).re, 1.0 / 3.0);
    assert_near!(abs, eval_at("s/2", s).re, 1.5);
    assert_near!(abs, eval_at("2^s", s).re, 8.0, 1e-9);
    assert_near!(abs, eval_at("s^2", s).re, 9.0, 1e-9);
}

#[test]
fn right_associative_power() {
    assert_eq!(parse("2^3^2").unwrap().to_string(), "2 3 2 ^ ^");
    let v = eval_at("s*2^3^2", Complex::ONE);
    assert_near!(abs, v.re, 512.0, 1e-9);
    assert_near!(abs, v.im, 0.0, 1e-9);
}

#[test]
fn precedence() {
    let s = Complex::new(2.0, 0.0);
    assert_near!(abs, eval_at("1+2*s^2", s).re, 9.0, 1e-9);
    assert_near!(abs, eval_at("(1+2)*s", s).re, 6.0);
    assert_near!(abs, eval_at("8/s/2", s).re, 2.0);
    assert_near!(abs, eval_at("8-s-2", s).re, 4.0);
}

#[test]
fn leading_minus() {
    let s = Complex::new(2.0, 0.0);
    assert_eq!(eval_at("-3*s", s), Complex::new(-6.0, 0.0));
    assert_eq!(eval_at("(-s)+1", s), Complex::new(-1.0, 0.0));
    assert_eq!(eval_at("+s", s), s);
}

#[test]
fn sign_after_operator_needs_parentheses() {
    assert!(expr::check("s*-2").is_ok());
    assert_eq!(
        expr::evaluate("s*-2", &samples()),
        Err(Error::Eval(eval::Error::MissingOperands((1, 2))))
    );

    let s = Complex::new(2.0, 0.0);
    assert_eq!(eval_at("s*(-2)", s), Complex::new(-4.0, 0.0));
}

#[test]
fn case_and_whitespace() {
    let s = Complex::from_imag(2.0);
    assert_eq!(eval_at(" S + s ", s), eval_at("2*s", s));
}

#[test]
fn evaluation_errors() {
    assert_eq!(
        expr::evaluate("", &samples()),
        Err(Error::Eval(eval::Error::Empty))
    );
    assert_eq!(
        expr::evaluate("(s)(s)", &samples()),
        Err(Error::Eval(eval::Error::MissingOperator))
    );
    assert!(matches!(
        expr::evaluate("s*/s", &samples()),
        Err(Error::Eval(eval::Error::MissingOperands(..)))
    ));
    assert!(matches!(
        expr::check("1.2.3*s"),
        Err(Error::Parse(parse::Error::Lex(..)))
    ));
}
