//! Bookkeeping for rule attempts: the transaction contract and its two
//! implementations.
//!
//! Every rule invocation is bracketed by [`Diagnostics::push`] at entry and
//! either [`Diagnostics::pop`] (success) or [`Diagnostics::reset`] (failure).
//! [`Silent`] does no bookkeeping at all: the breadcrumb is the entry index
//! and reset is a raw rewind. [`Tracing`] maintains the live stack of open
//! attempts and a frontier holding the furthest-advanced failure seen so
//! far, so the error that finally surfaces is the one produced at the point
//! of maximum input consumption, regardless of the order in which
//! alternatives were tried.

use crate::errors::{Diagnosis, Frame, ParseError};

/// Transactional tracking of rule attempts.
///
/// `push` records an attempt at the current index and returns a breadcrumb
/// sufficient to undo it; `pop` closes the attempt on success; `reset`
/// closes it on failure, rewinding the position and (for implementations
/// that track anything) deciding which error to surface.
pub trait Diagnostics: Default {
    /// Opaque state returned at rule entry, consumed on failure.
    type Mark;

    /// Opens an attempt for rule `rule` producing `product` at index `at`.
    fn push(&mut self, at: usize, rule: &'static str, product: Option<&'static str>) -> Self::Mark;

    /// Closes the most recent attempt after the rule succeeded.
    fn pop(&mut self);

    /// Closes the most recent attempt after the rule failed: decides the
    /// error to surface (via `error`, in place) and rewinds `at` to the
    /// attempt's entry index.
    fn reset(&mut self, at: &mut usize, mark: Self::Mark, error: &mut ParseError);
}

/// Zero-cost implementation for callers that only need success or failure.
///
/// The breadcrumb is the entry index; errors pass through unclassified.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    type Mark = usize;

    fn push(&mut self, at: usize, _rule: &'static str, _product: Option<&'static str>) -> usize {
        at
    }

    fn pop(&mut self) {}

    fn reset(&mut self, at: &mut usize, mark: usize, _error: &mut ParseError) {
        *at = mark;
    }
}

/// Full bookkeeping: a live stack of open attempts plus the best failure
/// observed across the whole parse.
///
/// The frontier, once set, is replaced only by a strictly further-advanced
/// candidate; it lives for one top-level parse invocation.
#[derive(Debug, Default)]
pub struct Tracing {
    stack: Vec<Frame>,
    frontier: Option<Diagnosis>,
}

impl Diagnostics for Tracing {
    type Mark = ();

    fn push(&mut self, at: usize, rule: &'static str, product: Option<&'static str>) {
        self.stack.push(Frame { at, rule, product });
    }

    fn pop(&mut self) {
        let _ = self.stack.pop();
    }

    fn reset(&mut self, at: &mut usize, (): (), error: &mut ParseError) {
        // A plain error is classified exactly once; one already carrying a
        // diagnosis was decided at a deeper level and passes through.
        if let ParseError::Plain(kind) = error {
            match &self.frontier {
                // An earlier failure at or past this index is at least as
                // informative; surface it instead.
                Some(frontier) if frontier.at >= *at => {
                    *error = frontier.clone().into();
                }
                _ => {
                    let diagnosis = Diagnosis {
                        kind: kind.clone(),
                        at: *at,
                        trace: self.stack.iter().rev().copied().collect(),
                    };
                    self.frontier = Some(diagnosis.clone());
                    *error = diagnosis.into();
                }
            }
        }
        if let Some(frame) = self.stack.pop() {
            *at = frame.at;
        }
    }
}

impl Tracing {
    /// The best failure observed so far, if any attempt has failed.
    pub fn frontier(&self) -> Option<&Diagnosis> {
        self.frontier.as_ref()
    }

    /// Number of attempts currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
