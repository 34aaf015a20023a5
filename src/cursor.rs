//! The read position over an input sequence and the single transactional
//! rule-invocation primitive.
//!
//! A cursor owns an immutable view of the source, the current index, and a
//! diagnostics value. It is owned exclusively by one parse call; cheap
//! backtracking comes from snapshotting and restoring the index alone,
//! never from copying the input.

use std::ops::Range;

use crate::diagnostics::Diagnostics;
use crate::errors::{ErrorKind, ParseError};
use crate::rule::Rule;

/// Sequential read position over `source`, with transactional dispatch of
/// rules through [`Cursor::take`].
///
/// The position is always a valid index into the source or one past its
/// end.
#[derive(Debug)]
pub struct Cursor<'s, T, D> {
    source: &'s [T],
    at: usize,
    diagnostics: D,
}

impl<'s, T, D: Diagnostics> Cursor<'s, T, D> {
    /// Opens a cursor at the start of `source` with fresh diagnostics.
    pub fn new(source: &'s [T]) -> Self {
        Self { source, at: 0, diagnostics: D::default() }
    }

    /// The current position.
    pub fn at(&self) -> usize {
        self.at
    }

    /// The whole input sequence.
    pub fn source(&self) -> &'s [T] {
        self.source
    }

    /// The diagnostics state accumulated so far.
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Returns the element at the current position and advances past it.
    ///
    /// At end of input, fails without moving.
    pub fn shift(&mut self) -> Result<&'s T, ParseError> {
        match self.source.get(self.at) {
            Some(element) => {
                self.at += 1;
                Ok(element)
            }
            None => Err(ErrorKind::Exhausted.into()),
        }
    }

    /// A read-only view over `range`; the position does not move.
    ///
    /// An out-of-bounds range yields the empty view.
    pub fn slice(&self, range: Range<usize>) -> &'s [T] {
        self.source.get(range).unwrap_or(&[])
    }

    /// Runs rule `R` inside one diagnostics transaction.
    ///
    /// On success the attempt is popped and the result returned; on failure
    /// the position is rewound to the attempt's entry index and the error
    /// surfaced is whatever the diagnostics implementation decides. This is
    /// the only composition primitive: every combinator and every grammar
    /// rule invokes sub-rules through it.
    pub fn take<R: Rule<T>>(&mut self) -> Result<R::Output, ParseError> {
        let mark = self.diagnostics.push(self.at, R::NAME, R::PRODUCT);
        match R::parse(self) {
            Ok(value) => {
                self.diagnostics.pop();
                Ok(value)
            }
            Err(mut error) => {
                self.diagnostics.reset(&mut self.at, mark, &mut error);
                Err(error)
            }
        }
    }
}
