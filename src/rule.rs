//! The capability contract every grammar rule implements, and the ordered
//! sequencing of rule tuples.
//!
//! A rule is a zero-sized marker type: it is never constructed, only named.
//! Grammars compose by invoking [`Cursor::take`] with the rule type, which
//! brackets the attempt in a diagnostics transaction. Element types must
//! agree across composed rules; the compiler enforces this through the `T`
//! parameter.

use crate::cursor::Cursor;
use crate::diagnostics::Diagnostics;
use crate::errors::ParseError;

/// A unit of grammar logic: consumes elements of type `T` from a cursor and
/// produces an [`Output`](Rule::Output) or fails.
///
/// A rule may consume input speculatively before failing; the transactional
/// wrapper in [`Cursor::take`] rewinds the position, so implementations
/// never restore it themselves.
pub trait Rule<T> {
    /// The value a successful parse produces.
    type Output;

    /// Stable name of this rule, used only in diagnostics.
    const NAME: &'static str;

    /// Stable name of the produced value's type, used only in diagnostics;
    /// `None` marks a validation-only rule that builds nothing.
    const PRODUCT: Option<&'static str>;

    /// Consumes from `cursor` and produces the result or fails.
    ///
    /// Sub-rules must be invoked through [`Cursor::take`], never by calling
    /// their `parse` directly, or their failures will not rewind.
    fn parse<D: Diagnostics>(cursor: &mut Cursor<'_, T, D>) -> Result<Self::Output, ParseError>;
}

// A tuple of rules is itself a rule: each member runs in declaration order
// inside the tuple's own transaction, so any member's failure rewinds to
// the tuple's entry index. One template stamped per arity.
macro_rules! sequence_rule {
    ($($member:ident),+) => {
        impl<T, $($member: Rule<T>),+> Rule<T> for ($($member,)+) {
            type Output = ($($member::Output,)+);
            const NAME: &'static str = "sequence";
            const PRODUCT: Option<&'static str> = Some("tuple");

            fn parse<D: Diagnostics>(
                cursor: &mut Cursor<'_, T, D>,
            ) -> Result<Self::Output, ParseError> {
                Ok(($(cursor.take::<$member>()?,)+))
            }
        }
    };
}

sequence_rule!(R1, R2);
sequence_rule!(R1, R2, R3);
sequence_rule!(R1, R2, R3, R4);
sequence_rule!(R1, R2, R3, R4, R5);
sequence_rule!(R1, R2, R3, R4, R5, R6);
sequence_rule!(R1, R2, R3, R4, R5, R6, R7);
