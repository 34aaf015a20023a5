//! Small leaf rules shared by the unit tests. Terminal matching is the
//! grammar author's side of the contract, so the library proper defines
//! none of these.

use crate::cursor::Cursor;
use crate::diagnostics::Diagnostics;
use crate::errors::{ErrorKind, ParseError};
use crate::rule::Rule;

pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Matches one ASCII digit and yields it.
pub struct Digit;

impl Rule<char> for Digit {
    type Output = char;
    const NAME: &'static str = "digit";
    const PRODUCT: Option<&'static str> = Some("char");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<char, ParseError> {
        let c = *cursor.shift()?;
        if c.is_ascii_digit() {
            Ok(c)
        } else {
            Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
        }
    }
}

/// Matches one ASCII letter and yields it.
pub struct Letter;

impl Rule<char> for Letter {
    type Output = char;
    const NAME: &'static str = "letter";
    const PRODUCT: Option<&'static str> = Some("char");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<char, ParseError> {
        let c = *cursor.shift()?;
        if c.is_ascii_alphabetic() {
            Ok(c)
        } else {
            Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
        }
    }
}

/// Validation-only: matches a comma and yields nothing.
pub struct Comma;

impl Rule<char> for Comma {
    type Output = ();
    const NAME: &'static str = "comma";
    const PRODUCT: Option<&'static str> = None;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<(), ParseError> {
        if *cursor.shift()? == ',' {
            Ok(())
        } else {
            Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
        }
    }
}

/// Validation-only: matches a single space.
pub struct Space;

impl Rule<char> for Space {
    type Output = ();
    const NAME: &'static str = "space";
    const PRODUCT: Option<&'static str> = None;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<(), ParseError> {
        if *cursor.shift()? == ' ' {
            Ok(())
        } else {
            Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
        }
    }
}
