/*!
 * # tfplot-expr
 *
 * Parsing and evaluation of transfer function expressions.
 *
 * An expression is built from non-negative decimal numbers, the complex
 * frequency `s`, the binary operators `+ - * / ^` and parentheses.
 * It is converted once to reverse polish notation, then evaluated over a
 * vector of samples of `s`.
 *
 * ```
 * use tfplot_base::Complex;
 *
 * let res = tfplot_expr::evaluate("1/(s+1)", &[Complex::I]).unwrap();
 * assert!((res[0].re - 0.5).abs() < 1e-12);
 * assert!((res[0].im + 0.5).abs() < 1e-12);
 * ```
 */

use std::fmt;

use tfplot_base::Complex;

#[cfg(feature = "diag")]
pub mod diag;
pub mod eval;
pub mod input;
pub mod lex;
pub mod parse;

pub use eval::Operand;
pub use lex::{Op, Span};
pub use parse::{Rpn, parse};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(parse::Error),
    Eval(eval::Error),
}

impl From<lex::Error> for Error {
    fn from(err: lex::Error) -> Self {
        Error::Parse(err.into())
    }
}

impl From<parse::Error> for Error {
    fn from(err: parse::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<eval::Error> for Error {
    fn from(err: eval::Error) -> Self {
        Error::Eval(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Eval(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

/// Check that an expression parses, without evaluating it
pub fn check(input: &str) -> Result<(), Error> {
    parse(input)?;
    Ok(())
}

/// Parse and evaluate an expression over the samples of `s`
pub fn evaluate(input: &str, samples: &[Complex]) -> Result<Vec<Complex>, Error> {
    let rpn = parse(input)?;
    Ok(eval::evaluate(&rpn, samples)?)
}
