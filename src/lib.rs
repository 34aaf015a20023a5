//! Descent - a composable backtracking recursive-descent parsing core.
//!
//! Grammars are built by composing small typed rules over an arbitrary
//! element slice (bytes, characters, or already-lexed tokens) instead of
//! hand-rolling a recursive-descent parser. The crate supplies the cursor,
//! the [`Rule`] contract, the transactional backtracking machinery, a
//! library of structural combinators, and two diagnostics implementations:
//! a zero-cost silent one and a tracing one that always surfaces the
//! failure produced at the point of maximum input consumption.
//!
//! Terminal matching belongs to the grammar author; a rule is a zero-sized
//! type dispatched by name:
//!
//! ```
//! use descent::{parse, Cursor, Diagnostics, ErrorKind, Join, ParseError, Rule};
//!
//! struct Digit;
//!
//! impl Rule<char> for Digit {
//!     type Output = u32;
//!     const NAME: &'static str = "digit";
//!     const PRODUCT: Option<&'static str> = Some("u32");
//!
//!     fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<u32, ParseError> {
//!         match cursor.shift()?.to_digit(10) {
//!             Some(value) => Ok(value),
//!             None => Err(ErrorKind::Unmatched { rule: Self::NAME }.into()),
//!         }
//!     }
//! }
//!
//! struct Comma;
//!
//! impl Rule<char> for Comma {
//!     type Output = ();
//!     const NAME: &'static str = "comma";
//!     const PRODUCT: Option<&'static str> = None;
//!
//!     fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<(), ParseError> {
//!         if *cursor.shift()? == ',' {
//!             Ok(())
//!         } else {
//!             Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
//!         }
//!     }
//! }
//!
//! let source: Vec<char> = "4,8,5".chars().collect();
//! let values = parse::<Join<Digit, Comma, Vec<u32>>, _>(&source).expect("well-formed row");
//! assert_eq!(values, vec![4, 8, 5]);
//! ```

pub use crate::annotate::annotate_chars;
pub use crate::combinators::{Collect, Gather, Join, Maybe, Pad, Skip};
pub use crate::cursor::Cursor;
pub use crate::diagnostics::{Diagnostics, Silent, Tracing};
pub use crate::errors::{Diagnosis, ErrorKind, Frame, ParseError};
pub use crate::parse::{parse, parse_many, parse_silent, End};
pub use crate::report::{SourceArc, SourceReport};
pub use crate::rule::Rule;

pub mod annotate;
pub mod combinators;
pub mod cursor;
pub mod diagnostics;
pub mod errors;
pub mod parse;
pub mod report;
pub mod rule;

#[cfg(test)]
pub(crate) mod testkit;
