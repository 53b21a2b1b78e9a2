use std::fmt;
use std::iter::FusedIterator;

use crate::input::{Cursor, Pos};

/// Byte span into an input string
/// (first pos, one past last pos)
pub type Span = (Pos, Pos);

/// A lexical error
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A character that cannot start any token
    UnrecognizedChar(Pos, char),
    /// A number literal with more than one decimal point
    InvalidNumber(Span, String),
}

impl Error {
    /// The span of the input the error refers to
    pub fn span(&self) -> Span {
        match self {
            Error::UnrecognizedChar(pos, c) => (*pos, *pos + c.len_utf8()),
            Error::InvalidNumber(span, _) => *span,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedChar(_, c) => write!(f, "Unrecognized character: '{}'.", c),
            Error::InvalidNumber(_, s) => write!(f, "Invalid number: {}", s),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Binary operators, from least to most precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    /// The operator symbol
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }

    /// Higher values are applied first
    pub fn precedence(self) -> u32 {
        match self {
            Op::Add | Op::Sub => 2,
            Op::Mul | Op::Div => 3,
            Op::Pow => 4,
        }
    }

    pub fn is_left_assoc(self) -> bool {
        !matches!(self, Op::Pow)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Number literal, as written in the input
    Num(String),
    /// The complex frequency `s` (or `S`)
    S,
    Op(Op),
    OpenPar,
    ClosePar,
}

pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(Cursor::new(input))
}

#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(cursor: Cursor<'a>) -> Tokenizer<'a> {
        Tokenizer {
            cursor,
            failed: false,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.failed {
            return None;
        }
        self.cursor.eat_while(char::is_whitespace);
        let pos = self.cursor.pos();
        let kind = match self.next_token_kind(pos) {
            Ok(Some(kind)) => kind,
            Ok(None) => return None,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };
        let end = self.cursor.pos();
        Some(Ok(Token {
            kind,
            span: (pos, end),
        }))
    }
}

impl FusedIterator for Tokenizer<'_> {}

impl Tokenizer<'_> {
    fn next_token_kind(&mut self, start_pos: Pos) -> Result<Option<TokenKind>> {
        let Some(c) = self.cursor.next() else {
            return Ok(None);
        };
        match c {
            '0'..='9' | '.' => self.parse_number(start_pos, c).map(Some),
            's' | 'S' => Ok(Some(TokenKind::S)),
            '(' => Ok(Some(TokenKind::OpenPar)),
            ')' => Ok(Some(TokenKind::ClosePar)),
            c => match Op::from_char(c) {
                Some(op) => Ok(Some(TokenKind::Op(op))),
                None => Err(Error::UnrecognizedChar(start_pos, c)),
            },
        }
    }

    fn parse_number(&mut self, start_pos: Pos, first: char) -> Result<TokenKind> {
        let mut found_decimal = first == '.';
        let mut invalid = false;
        self.cursor.eat_while(|c| match c {
            '0'..='9' => true,
            '.' if found_decimal => {
                invalid = true;
                true
            }
            '.' => {
                found_decimal = true;
                true
            }
            _ => false,
        });

        let s = self.cursor.slice_from(start_pos);
        if invalid {
            return Err(Error::InvalidNumber(
                (start_pos, self.cursor.pos()),
                s.to_string(),
            ));
        }
        Ok(TokenKind::Num(s.to_string()))
    }
}
