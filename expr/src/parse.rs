//! Shunting-yard conversion of an expression to reverse polish notation

use std::fmt;

use crate::lex::{self, Op, Span, Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(lex::Error),
    ImbalancedParentheses(Span),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => err.span(),
            Error::ImbalancedParentheses(span) => *span,
        }
    }
}

impl From<lex::Error> for Error {
    fn from(err: lex::Error) -> Self {
        Error::Lex(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => err.fmt(f),
            Error::ImbalancedParentheses(..) => write!(f, "Imbalanced parentheses!"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// An item of the RPN queue
#[derive(Debug, Clone, PartialEq)]
pub struct RpnItem {
    pub span: Span,
    pub kind: RpnKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RpnKind {
    /// Number literal, converted at evaluation
    Num(String),
    S,
    Op(Op),
}

/// An expression in reverse polish notation, ready to be evaluated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rpn {
    items: Vec<RpnItem>,
}

impl Rpn {
    /// Build a queue from already ordered items
    pub fn from_items(items: Vec<RpnItem>) -> Rpn {
        Rpn { items }
    }

    pub fn items(&self) -> &[RpnItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match &item.kind {
                RpnKind::Num(n) => write!(f, "{n}")?,
                RpnKind::S => write!(f, "s")?,
                RpnKind::Op(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}

/// Parse an expression into an RPN queue.
///
/// A leading `+` or `-` is only accepted at the start of the expression or right
/// after `(`. `s*-2` parses, but fails to evaluate: it must be written `s*(-2)`.
pub fn parse(input: &str) -> Result<Rpn> {
    check_balance(input)?;

    let mut parser = Parser::default();
    for tok in lex::tokenize(input) {
        parser.push(tok?)?;
    }
    parser.finish()
}

/// Fast pre-check that counts opening and closing parentheses
pub fn check_balance(input: &str) -> Result<()> {
    let opening = input.chars().filter(|c| *c == '(').count();
    let closing = input.chars().filter(|c| *c == ')').count();
    if opening != closing {
        return Err(Error::ImbalancedParentheses((0, input.len())));
    }
    Ok(())
}

enum Stacked {
    Op(Op, Span),
    OpenPar(Span),
}

struct Parser {
    output: Vec<RpnItem>,
    stack: Vec<Stacked>,
    // true at start and right after '('
    expect_operand: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            output: Vec::new(),
            stack: Vec::new(),
            expect_operand: true,
        }
    }
}

impl Parser {
    fn push(&mut self, tok: Token) -> Result<()> {
        let Token { span, kind } = tok;
        match kind {
            TokenKind::Num(n) => {
                self.output.push(RpnItem {
                    span,
                    kind: RpnKind::Num(n),
                });
                self.expect_operand = false;
            }
            TokenKind::S => {
                self.output.push(RpnItem {
                    span,
                    kind: RpnKind::S,
                });
                self.expect_operand = false;
            }
            TokenKind::Op(op) => {
                if self.expect_operand && matches!(op, Op::Add | Op::Sub) {
                    self.output.push(RpnItem {
                        span: (span.0, span.0),
                        kind: RpnKind::Num("0".to_string()),
                    });
                }
                self.push_op(op, span);
                self.expect_operand = false;
            }
            TokenKind::OpenPar => {
                self.stack.push(Stacked::OpenPar(span));
                self.expect_operand = true;
            }
            TokenKind::ClosePar => {
                self.close_par(span)?;
                self.expect_operand = false;
            }
        }
        Ok(())
    }

    fn push_op(&mut self, op: Op, span: Span) {
        while let Some(Stacked::Op(top, top_span)) = self.stack.last() {
            let pops = if op.is_left_assoc() {
                top.precedence() >= op.precedence()
            } else {
                top.precedence() > op.precedence()
            };
            if !pops {
                break;
            }
            self.output.push(RpnItem {
                span: *top_span,
                kind: RpnKind::Op(*top),
            });
            self.stack.pop();
        }
        self.stack.push(Stacked::Op(op, span));
    }

    fn close_par(&mut self, span: Span) -> Result<()> {
        loop {
            match self.stack.pop() {
                Some(Stacked::Op(op, op_span)) => self.output.push(RpnItem {
                    span: op_span,
                    kind: RpnKind::Op(op),
                }),
                Some(Stacked::OpenPar(..)) => return Ok(()),
                None => return Err(Error::ImbalancedParentheses(span)),
            }
        }
    }

    fn finish(mut self) -> Result<Rpn> {
        while let Some(stacked) = self.stack.pop() {
            match stacked {
                Stacked::Op(op, span) => self.output.push(RpnItem {
                    span,
                    kind: RpnKind::Op(op),
                }),
                Stacked::OpenPar(span) => return Err(Error::ImbalancedParentheses(span)),
            }
        }
        Ok(Rpn { items: self.output })
    }
}
