//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
///
/// Without a source, every diagnostic renders as one plain line. With a
/// source, located diagnostics get an annotated excerpt; grammar findings
/// still render plain.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match (self.source, &diag.range) {
                (Some(source), Some(range)) if !source.is_empty() => {
                    let report = self.snippet_report(diag, source, range.clone());
                    write!(w, "{}", renderer.render(&report))?;
                }
                _ => write!(w, "{}", diag)?,
            }
        }

        Ok(())
    }

    fn snippet_report<'a>(
        &self,
        diag: &'a DiagnosticMessage,
        source: &'a str,
        range: Range<usize>,
    ) -> Vec<Group<'a>>
    where
        's: 'a,
    {
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(range, source.len()))
                .label(&diag.message),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.range.clone(), source.len()))
                    .label(&related.message),
            );
        }

        let level = severity_to_level(diag.severity());
        let mut group = level.primary_title(&diag.message).element(snippet);
        for hint in &diag.hints {
            group = group.element(Level::HELP.message(hint));
        }

        vec![group]
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Widen empty ranges to one character so the annotation stays visible.
fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
