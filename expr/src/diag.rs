use core::fmt;

use miette::MietteSpanContents;

use crate::{Error, Span, eval, lex, parse};

pub trait DiagTrait: fmt::Debug + fmt::Display + Send + Sync {
    /// The offending part of the source, if any
    fn span(&self) -> Option<Span>;
    fn message(&self) -> String {
        format!("{}", self)
    }
    fn help(&self) -> Option<String> {
        None
    }
}

impl DiagTrait for lex::Error {
    fn span(&self) -> Option<Span> {
        Some(lex::Error::span(self))
    }

    fn help(&self) -> Option<String> {
        match self {
            lex::Error::UnrecognizedChar(..) => Some(
                "expressions accept numbers, `s`, `+ - * / ^` and parentheses".to_string(),
            ),
            lex::Error::InvalidNumber(..) => {
                Some("a number has at most one decimal point".to_string())
            }
        }
    }
}

impl DiagTrait for parse::Error {
    fn span(&self) -> Option<Span> {
        Some(parse::Error::span(self))
    }

    fn help(&self) -> Option<String> {
        match self {
            parse::Error::Lex(err) => err.help(),
            parse::Error::ImbalancedParentheses(..) => None,
        }
    }
}

impl DiagTrait for eval::Error {
    fn span(&self) -> Option<Span> {
        eval::Error::span(self)
    }

    fn help(&self) -> Option<String> {
        match self {
            eval::Error::ScalarResult => {
                Some("a transfer function must depend on `s`".to_string())
            }
            _ => None,
        }
    }
}

impl DiagTrait for Error {
    fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(err) => DiagTrait::span(err),
            Error::Eval(err) => DiagTrait::span(err),
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Error::Parse(err) => DiagTrait::help(err),
            Error::Eval(err) => DiagTrait::help(err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Source {
    pub name: Option<String>,
    pub src: String,
}

impl Source {
    pub fn new(src: impl Into<String>) -> Self {
        Source {
            name: None,
            src: src.into(),
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Source {
            name: Some(name.into()),
            ..self
        }
    }
}

impl miette::SourceCode for Source {
    fn read_span<'a>(
        &'a self,
        span: &miette::SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn miette::SpanContents<'a> + 'a>, miette::MietteError> {
        let start = span.offset();
        let end = start + span.len();

        if start > self.src.len() || end > self.src.len() {
            return Err(miette::MietteError::OutOfBounds);
        }

        let content = <str as miette::SourceCode>::read_span(
            &self.src,
            span,
            context_lines_before,
            context_lines_after,
        )?;
        if let Some(name) = self.name.as_deref() {
            let content = MietteSpanContents::new_named(
                name.to_string(),
                content.data(),
                *content.span(),
                content.line(),
                content.column(),
                content.line_count(),
            )
            .with_language("tf");
            Ok(Box::new(content))
        } else {
            Ok(content)
        }
    }
}

/// An expression error attached to the expression text
#[derive(Debug)]
pub struct Diagnostic {
    diag: Box<dyn DiagTrait>,
    source: Source,
}

impl Diagnostic {
    pub fn new(diag: Box<dyn DiagTrait>, source: Source) -> Self {
        Self { diag, source }
    }

    /// Attach `err` to the expression it was raised for
    pub fn from_error(err: Error, expression: &str) -> Self {
        Self::new(Box::new(err), Source::new(expression))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())?;
        if let Some(help) = self.diag.help() {
            write!(f, "\nHelp: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels<'a>(&'a self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + 'a>> {
        let (start, end) = self.diag.span()?;
        let labeled_span =
            miette::LabeledSpan::new(Some(self.diag.message()), start, end - start);
        Some(Box::new(std::iter::once(labeled_span)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source as &dyn miette::SourceCode)
    }
}
