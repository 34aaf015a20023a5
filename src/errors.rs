//! Failure values produced while running rules.
//!
//! Three layers make up the error model. [`ErrorKind`] is the raw problem a
//! rule raises at the point of failure. [`Diagnosis`] is a classified
//! failure: the raw problem plus the index where it was decided and the
//! full nesting trace of rule attempts ([`Frame`]s, innermost first) that
//! were open at that point. [`ParseError`] is what actually flows out of a
//! rule invocation: either a still-plain kind, or a diagnosis. Tracing
//! diagnostics promotes a plain kind to a diagnosis exactly once per parse;
//! an already-classified error is never re-wrapped.

use serde::Serialize;
use thiserror::Error;

/// One open rule attempt, recorded at rule entry.
///
/// `rule` is the stable diagnostic name the rule type declares; `product`
/// names the value type it builds, or `None` for validation-only rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Cursor index at rule entry.
    pub at: usize,
    /// Diagnostic name of the attempted rule.
    pub rule: &'static str,
    /// Diagnostic name of the produced value type, if the rule builds one.
    pub product: Option<&'static str>,
}

impl Frame {
    /// Renders the frame the way it appears in annotated output.
    pub fn describe(&self) -> String {
        match self.product {
            Some(product) => {
                format!("while parsing value of type `{product}` by rule `{}`", self.rule)
            }
            None => format!("expected pattern `{}`", self.rule),
        }
    }
}

/// The raw problem underlying a failure, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ErrorKind {
    /// A rule's expected pattern was not present at the cursor.
    #[error("expected construction by rule `{rule}`")]
    Unmatched {
        /// Diagnostic name of the rule whose precondition failed.
        rule: &'static str,
    },
    /// A value legally belongs to two grammatical regions declared mutually
    /// exclusive. An ambiguity signal, not a syntax error.
    #[error("`{value}` belongs to region `{region}` but also to exclusive region `{excluded}`")]
    Ambiguous {
        /// Rendering of the ambiguous value.
        value: String,
        /// The region the value was being parsed for.
        region: &'static str,
        /// The exclusive region the value also matches.
        excluded: &'static str,
    },
    /// No element remains at the cursor position.
    #[error("unexpected end of input")]
    Exhausted,
}

impl ErrorKind {
    /// Stable code for this kind, for matching independent of message text.
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::Unmatched { .. } => "unmatched",
            ErrorKind::Ambiguous { .. } => "ambiguous",
            ErrorKind::Exhausted => "exhausted",
        }
    }
}

/// A classified failure: the raw problem, the index where it was decided,
/// and the rule-nesting trace captured at that moment, innermost first.
///
/// Immutable once built. Produced only by tracing diagnostics; the silent
/// implementation never constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} at index {at}")]
pub struct Diagnosis {
    /// The underlying problem.
    pub kind: ErrorKind,
    /// Index where the failure was finally classified.
    pub at: usize,
    /// Rule attempts open at classification time, innermost first.
    pub trace: Vec<Frame>,
}

/// The failure value that flows out of a rule invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ParseError {
    /// A raw, not-yet-classified problem.
    #[error(transparent)]
    Plain(#[from] ErrorKind),
    /// A problem already classified with index and trace.
    #[error(transparent)]
    Diagnosed(Box<Diagnosis>),
}

impl ParseError {
    /// The underlying problem, classified or not.
    pub fn kind(&self) -> &ErrorKind {
        match self {
            ParseError::Plain(kind) => kind,
            ParseError::Diagnosed(diagnosis) => &diagnosis.kind,
        }
    }

    /// Stable code of the underlying problem.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<Diagnosis> for ParseError {
    fn from(diagnosis: Diagnosis) -> Self {
        ParseError::Diagnosed(Box::new(diagnosis))
    }
}
