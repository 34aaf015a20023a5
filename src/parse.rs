//! Top-level entry points: run a root rule to completion over a whole
//! input sequence.
//!
//! All entry points run the root rule and then [`End`], so a root that
//! succeeds without consuming everything still fails the parse.

use crate::combinators::Collect;
use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostics, Silent, Tracing};
use crate::errors::{Diagnosis, ErrorKind, ParseError};
use crate::rule::Rule;

/// Validation-only rule that fails while any element remains.
pub struct End;

impl<T> Rule<T> for End {
    type Output = ();
    const NAME: &'static str = "end-of-input";
    const PRODUCT: Option<&'static str> = None;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<(), ParseError> {
        if cursor.at() < cursor.source().len() {
            Err(ErrorKind::Unmatched { rule: <Self as Rule<T>>::NAME }.into())
        } else {
            Ok(())
        }
    }
}

/// Parses all of `source` as one `R` with tracing diagnostics.
///
/// On failure returns the classified diagnosis of the furthest-advanced
/// failure, ready for [`Diagnosis::annotate`].
pub fn parse<R, T>(source: &[T]) -> Result<R::Output, Diagnosis>
where
    R: Rule<T>,
{
    let mut cursor = Cursor::<T, Tracing>::new(source);
    match run::<R, T, Tracing>(&mut cursor) {
        Ok(value) => Ok(value),
        Err(ParseError::Diagnosed(diagnosis)) => Err(*diagnosis),
        // Tracing classifies every failure in flight; this arm only guards
        // against a diagnostics implementation change.
        Err(ParseError::Plain(kind)) => {
            Err(Diagnosis { kind, at: cursor.at(), trace: Vec::new() })
        }
    }
}

/// Parses all of `source` as one `R` with silent diagnostics.
///
/// Lower overhead than [`parse`]: no stack, no frontier, and the failure
/// comes back as the bare [`ErrorKind`].
pub fn parse_silent<R, T>(source: &[T]) -> Result<R::Output, ErrorKind>
where
    R: Rule<T>,
{
    let mut cursor = Cursor::<T, Silent>::new(source);
    run::<R, T, Silent>(&mut cursor).map_err(|error| match error {
        ParseError::Plain(kind) => kind,
        ParseError::Diagnosed(diagnosis) => (*diagnosis).kind,
    })
}

/// Parses all of `source` as zero or more `R` collected into `C`, with
/// tracing diagnostics.
///
/// Empty input yields the empty collection; trailing input no repetition
/// can consume fails the parse.
pub fn parse_many<R, T, C>(source: &[T]) -> Result<C, Diagnosis>
where
    R: Rule<T>,
    C: Default + Extend<R::Output>,
{
    parse::<Collect<R, C>, T>(source)
}

fn run<R, T, D>(cursor: &mut Cursor<'_, T, D>) -> Result<R::Output, ParseError>
where
    R: Rule<T>,
    D: Diagnostics,
{
    let value = cursor.take::<R>()?;
    cursor.take::<End>()?;
    Ok(value)
}
