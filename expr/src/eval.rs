//! Evaluation of an RPN queue over a vector of complex samples of `s`

use std::borrow::Cow;
use std::fmt;

use tfplot_base::Complex;

use crate::lex::{Op, Span};
use crate::parse::{Rpn, RpnKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An operator was met with fewer than two operands on the stack
    MissingOperands(Span),
    /// A literal could not be converted to a number
    NotANumber(Span, String),
    /// The expression does not depend on `s`
    ScalarResult,
    /// More than one operand remains at the end of the evaluation
    MissingOperator,
    /// Nothing to evaluate
    Empty,
}

impl Error {
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::MissingOperands(span) => Some(*span),
            Error::NotANumber(span, _) => Some(*span),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingOperands(..) => {
                write!(f, "Attempting to apply operator without two operands!")
            }
            Error::NotANumber(_, s) => write!(f, "Could not convert {} to a number.", s),
            Error::ScalarResult => write!(f, "Expression evaluates to a number!"),
            Error::MissingOperator => write!(f, "Missing operator between operands!"),
            Error::Empty => write!(f, "Empty expression!"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A value on the evaluation stack
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    /// One value per sample of `s`
    Vector(Cow<'a, [Complex]>),
}

impl Operand<'_> {
    pub fn into_vector(self) -> Option<Vec<Complex>> {
        match self {
            Operand::Scalar(..) => None,
            Operand::Vector(v) => Some(v.into_owned()),
        }
    }
}

/// Evaluate `rpn` where `s` takes the values of `samples`.
/// Fails if the expression does not depend on `s`.
pub fn evaluate(rpn: &Rpn, samples: &[Complex]) -> Result<Vec<Complex>> {
    eval(rpn, samples)?.into_vector().ok_or(Error::ScalarResult)
}

/// Evaluate `rpn` where `s` takes the values of `samples`.
/// The result may be a scalar if `s` does not appear in the expression.
pub fn eval<'a>(rpn: &Rpn, samples: &'a [Complex]) -> Result<Operand<'a>> {
    let items = rpn.items();
    let Some(first) = items.first() else {
        return Err(Error::Empty);
    };

    let mut stack: Vec<Operand<'a>> = Vec::with_capacity(items.len());
    if matches!(first.kind, RpnKind::Op(..)) {
        stack.push(Operand::Scalar(0.0));
    }

    for item in items {
        match &item.kind {
            RpnKind::Num(n) => {
                let val: f64 = n
                    .parse()
                    .map_err(|_| Error::NotANumber(item.span, n.clone()))?;
                stack.push(Operand::Scalar(val));
            }
            RpnKind::S => stack.push(Operand::Vector(Cow::Borrowed(samples))),
            RpnKind::Op(op) => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(Error::MissingOperands(item.span));
                };
                stack.push(apply(*op, lhs, rhs));
            }
        }
    }

    let res = stack.pop().ok_or(Error::Empty)?;
    if !stack.is_empty() {
        return Err(Error::MissingOperator);
    }
    Ok(res)
}

fn apply<'a>(op: Op, lhs: Operand<'a>, rhs: Operand<'a>) -> Operand<'a> {
    match (lhs, rhs) {
        (Operand::Scalar(a), Operand::Scalar(b)) => Operand::Scalar(scalar_op(op, a, b)),
        (Operand::Vector(v), Operand::Scalar(b)) => {
            let mut v = v.into_owned();
            for x in v.iter_mut() {
                *x = match op {
                    Op::Pow => x.powf(b),
                    _ => complex_op(op, *x, Complex::from_real(b)),
                };
            }
            Operand::Vector(Cow::Owned(v))
        }
        (Operand::Scalar(a), Operand::Vector(v)) => {
            let mut v = v.into_owned();
            for x in v.iter_mut() {
                *x = complex_op(op, Complex::from_real(a), *x);
            }
            Operand::Vector(Cow::Owned(v))
        }
        (Operand::Vector(l), Operand::Vector(r)) => {
            let mut l = l.into_owned();
            for (x, y) in l.iter_mut().zip(r.iter()) {
                *x = complex_op(op, *x, *y);
            }
            Operand::Vector(Cow::Owned(l))
        }
    }
}

fn scalar_op(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        Op::Pow => a.powf(b),
    }
}

fn complex_op(op: Op, a: Complex, b: Complex) -> Complex {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        Op::Pow => a.powc(b),
    }
}
