//! Plain-text source annotation for classified failures.
//!
//! Rendering is parameterized over the element type: the caller supplies a
//! function that turns a sub-sequence into display text and a predicate
//! identifying a line-break element. The annotator extracts exactly the
//! line around the faulty range (nearest break before its start, nearest
//! break after its end) and underlines the fault with a caret at its start
//! column and tildes across the rest of its width. Downstream tooling may
//! parse this output verbatim, so the layout is a contract: message line,
//! context line, underline, then one `note:` block per trace frame from
//! innermost to outermost, each anchored from the frame's entry index
//! through the failure index.

use unicode_width::UnicodeWidthStr;

use crate::errors::Diagnosis;

impl Diagnosis {
    /// Renders this diagnosis against the source it was produced from.
    ///
    /// `render` turns any sub-sequence of the source into display text;
    /// `is_break` identifies a line-break element.
    pub fn annotate<T>(
        &self,
        source: &[T],
        render: impl Fn(&[T]) -> String,
        is_break: impl Fn(&T) -> bool,
    ) -> String {
        let mut out = format!("{}: {}\n", self.kind.code(), self.kind);
        out.push_str(&underline(source, self.at, self.at + 1, &render, &is_break));
        for frame in &self.trace {
            out.push('\n');
            out.push_str(&format!("note: {}\n", frame.describe()));
            out.push_str(&underline(source, frame.at, self.at + 1, &render, &is_break));
        }
        out
    }
}

/// [`Diagnosis::annotate`] pre-applied to character sources.
pub fn annotate_chars(diagnosis: &Diagnosis, source: &[char]) -> String {
    diagnosis.annotate(source, |chunk| chunk.iter().collect(), |c| *c == '\n')
}

/// Renders the line containing `[from, to)` with the range underlined.
///
/// The underline is clamped to the displayed line; a range at or past the
/// end of input degrades to a single caret one column past the line.
fn underline<T>(
    source: &[T],
    from: usize,
    to: usize,
    render: &impl Fn(&[T]) -> String,
    is_break: &impl Fn(&T) -> bool,
) -> String {
    let len = source.len();
    let anchor = from.min(len);
    let line_start = source[..anchor]
        .iter()
        .rposition(|el| is_break(el))
        .map_or(0, |i| i + 1);
    let end_anchor = to.min(len).max(anchor);
    let line_end = source[end_anchor..]
        .iter()
        .position(|el| is_break(el))
        .map_or(len, |i| end_anchor + i);

    let line = render(&source[line_start..line_end]);
    let pad = " ".repeat(render(&source[line_start..anchor]).width());
    let span = render(&source[anchor..to.min(line_end).max(anchor)]);
    let tildes = "~".repeat(span.width().max(1) - 1);
    format!("{line}\n{pad}^{tildes}")
}
