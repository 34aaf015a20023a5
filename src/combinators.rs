//! Structural combinators: rules built only from other rules and the
//! cursor contract.
//!
//! Each combinator is a zero-sized marker type carrying its sub-rules as
//! type parameters, so combinator stacks are ordinary nested types and
//! element-type agreement stays a compile-time matter. All of them drive
//! their sub-rules through [`Cursor::take`], inheriting its rewind
//! guarantees.

use std::iter;
use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::diagnostics::Diagnostics;
use crate::errors::ParseError;
use crate::rule::Rule;

/// Attempts `R`; its failure is discarded and becomes `None`.
///
/// Never fails. On success the cursor rests at `R`'s exit position, on
/// failure at the entry position.
pub struct Maybe<R>(PhantomData<R>);

impl<T, R: Rule<T>> Rule<T> for Maybe<R> {
    type Output = Option<R::Output>;
    const NAME: &'static str = "maybe";
    const PRODUCT: Option<&'static str> = Some("option");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<Self::Output, ParseError> {
        match cursor.take::<R>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(None),
        }
    }
}

/// Repeats a validation-only rule until it fails, keeping nothing.
pub struct Skip<R>(PhantomData<R>);

impl<T, R: Rule<T, Output = ()>> Rule<T> for Skip<R> {
    type Output = ();
    const NAME: &'static str = "skip";
    const PRODUCT: Option<&'static str> = None;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<(), ParseError> {
        while cursor.take::<R>().is_ok() {}
        Ok(())
    }
}

/// Repeats `R` zero or more times into a collection.
///
/// Never fails; the empty collection is a legitimate result.
pub struct Collect<R, C>(PhantomData<(R, C)>);

impl<T, R: Rule<T>, C: Default + Extend<R::Output>> Rule<T> for Collect<R, C> {
    type Output = C;
    const NAME: &'static str = "collect";
    const PRODUCT: Option<&'static str> = Some("collection");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<C, ParseError> {
        let mut items = C::default();
        while let Ok(item) = cursor.take::<R>() {
            items.extend(iter::once(item));
        }
        Ok(items)
    }
}

/// Repeats `R` one or more times into a collection.
///
/// The first attempt's failure is the combinator's failure.
pub struct Gather<R, C>(PhantomData<(R, C)>);

impl<T, R: Rule<T>, C: Default + Extend<R::Output>> Rule<T> for Gather<R, C> {
    type Output = C;
    const NAME: &'static str = "gather";
    const PRODUCT: Option<&'static str> = Some("collection");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<C, ParseError> {
        let first = cursor.take::<R>()?;
        let mut items = C::default();
        items.extend(iter::once(first));
        while let Ok(item) = cursor.take::<R>() {
            items.extend(iter::once(item));
        }
        Ok(items)
    }
}

/// One or more `R`, every element after the first preceded by the
/// validation-only separator `S`.
///
/// Once the first element is in, the repetition stops at the first failing
/// separator-element pair and keeps what was collected; a trailing
/// separator whose element never arrives is rewound along with that
/// element. Deliberate policy: the partial match is kept, not discarded.
pub struct Join<R, S, C>(PhantomData<(R, S, C)>);

impl<T, R, S, C> Rule<T> for Join<R, S, C>
where
    R: Rule<T>,
    S: Rule<T, Output = ()>,
    C: Default + Extend<R::Output>,
{
    type Output = C;
    const NAME: &'static str = "join";
    const PRODUCT: Option<&'static str> = Some("collection");

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<C, ParseError> {
        let first = cursor.take::<R>()?;
        let mut items = C::default();
        items.extend(iter::once(first));
        // The pair runs as one transaction, so a separator with no element
        // after it is rewound whole.
        while let Ok(((), item)) = cursor.take::<(S, R)>() {
            items.extend(iter::once(item));
        }
        Ok(items)
    }
}

/// `R` wrapped in discarded repetitions of the validation-only padding `P`.
///
/// Fails only if `R` fails; absent padding is an empty repetition.
pub struct Pad<P, R>(PhantomData<(P, R)>);

impl<T, P, R> Rule<T> for Pad<P, R>
where
    P: Rule<T, Output = ()>,
    R: Rule<T>,
{
    type Output = R::Output;
    const NAME: &'static str = "pad";
    const PRODUCT: Option<&'static str> = R::PRODUCT;

    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<Self::Output, ParseError> {
        cursor.take::<Skip<P>>()?;
        let value = cursor.take::<R>()?;
        cursor.take::<Skip<P>>()?;
        Ok(value)
    }
}
