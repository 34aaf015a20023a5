//! Rich terminal reports for classified failures over textual sources.
//!
//! [`SourceReport`] binds a [`Diagnosis`] to a named source text and
//! implements [`miette::Diagnostic`], with the failure as the primary
//! label and one label per trace frame. This is presentation sugar on top
//! of [`Diagnosis::annotate`], whose plain-text output remains the stable
//! contract.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::errors::Diagnosis;

/// Shared named source text, cheap to attach to several reports.
pub type SourceArc = Arc<NamedSource<String>>;

/// A diagnosis bound to the source it was produced from.
#[derive(Debug, Error)]
#[error("{diagnosis}")]
pub struct SourceReport {
    diagnosis: Diagnosis,
    named_source: SourceArc,
    primary: (usize, usize),
    notes: Vec<(usize, usize, String)>,
}

impl SourceReport {
    /// Builds a report over a character-slice source, converting element
    /// indices into byte offsets.
    pub fn from_chars(name: impl AsRef<str>, source: &[char], diagnosis: Diagnosis) -> Self {
        let mut offsets = Vec::with_capacity(source.len() + 1);
        let mut text = String::new();
        for c in source {
            offsets.push(text.len());
            text.push(*c);
        }
        offsets.push(text.len());

        let clamp = |index: usize| offsets[index.min(source.len())];
        let fault_end = clamp(diagnosis.at + 1);
        let primary_start = clamp(diagnosis.at);
        let primary = (primary_start, (fault_end - primary_start).max(1));
        let notes = diagnosis
            .trace
            .iter()
            .map(|frame| {
                let start = clamp(frame.at);
                (start, fault_end.saturating_sub(start).max(1), frame.describe())
            })
            .collect();

        Self {
            diagnosis,
            named_source: Arc::new(NamedSource::new(name, text)),
            primary,
            notes,
        }
    }

    /// The underlying diagnosis.
    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    /// Wraps the report for `{:?}`-style rich rendering.
    pub fn into_report(self) -> miette::Report {
        miette::Report::new(self)
    }
}

impl Diagnostic for SourceReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.diagnosis.kind.code()))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.named_source.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let mut labels = vec![LabeledSpan::new(
            Some(self.diagnosis.kind.to_string()),
            self.primary.0,
            self.primary.1,
        )];
        for (start, len, text) in &self.notes {
            labels.push(LabeledSpan::new(Some(text.clone()), *start, *len));
        }
        Some(Box::new(labels.into_iter()))
    }
}
