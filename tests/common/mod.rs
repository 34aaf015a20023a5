//! A small shared grammar for the integration tests: comma-separated
//! numbers with optional spacing, over character input.
#![allow(dead_code)]

use descent::{Cursor, Diagnostics, ErrorKind, Gather, Join, Pad, ParseError, Rule};

pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// One ASCII digit as its numeric value.
pub struct Digit;

impl Rule<char> for Digit {
    type Output = u32;
    const NAME: &'static str = "digit";
    const PRODUCT: Option<&'static str> = Some("u32");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<u32, ParseError> {
        match cursor.shift()?.to_digit(10) {
            Some(value) => Ok(value),
            None => Err(ErrorKind::Unmatched { rule: Self::NAME }.into()),
        }
    }
}

/// Validation-only comma.
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

/// Validation-only single space.
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

/// Validation-only line break.
pub struct Newline;

impl Rule<char> for Newline {
    type Output = ();
    const NAME: &'static str = "newline";
    const PRODUCT: Option<&'static str> = None;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<(), ParseError> {
        if *cursor.shift()? == '\n' {
            Ok(())
        } else {
            Err(ErrorKind::Unmatched { rule: Self::NAME }.into())
        }
    }
}

/// One ASCII letter.
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

/// One or more digits folded into a number.
pub struct Number;

impl Rule<char> for Number {
    type Output = u32;
    const NAME: &'static str = "number";
    const PRODUCT: Option<&'static str> = Some("u32");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<u32, ParseError> {
        let digits = cursor.take::<Gather<Digit, Vec<u32>>>()?;
        Ok(digits.into_iter().fold(0, |n, d| n * 10 + d))
    }
}

/// A row of numbers joined by commas, each number allowed surrounding
/// spaces.
pub type Row = Join<Pad<Space, Number>, Comma, Vec<u32>>;

/// A row terminated by a line break.
pub struct Line;

impl Rule<char> for Line {
    type Output = Vec<u32>;
    const NAME: &'static str = "line";
    const PRODUCT: Option<&'static str> = Some("Vec<u32>");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<Vec<u32>, ParseError> {
        let (row, ()) = cursor.take::<(Row, Newline)>()?;
        Ok(row)
    }
}

/// A run of ASCII letters, rejected as ambiguous when it collides with the
/// reserved all-uppercase keyword region.
pub struct Identifier;

impl Rule<char> for Identifier {
    type Output = String;
    const NAME: &'static str = "identifier";
    const PRODUCT: Option<&'static str> = Some("String");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, char, D>) -> Result<String, ParseError> {
        let letters = cursor.take::<Gather<Letter, Vec<char>>>()?;
        let word: String = letters.into_iter().collect();
        if word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ErrorKind::Ambiguous {
                value: word,
                region: "identifier",
                excluded: "keyword",
            }
            .into());
        }
        Ok(word)
    }
}
