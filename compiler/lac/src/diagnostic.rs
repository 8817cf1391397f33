//! Rendering problems against their source with `ariadne`.
//!
//! Spans are byte offsets; ariadne positions count characters, so every
//! range is converted before it reaches a report.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use la_ir::Span;

use crate::Problem;

/// Write a report for `problem` to `out`.
///
/// `path` names the source in the report header. Problems without a span
/// (a failed output write) get a single `error:` line instead of a snippet.
pub fn render_problem(
    problem: &Problem,
    path: &str,
    source: &str,
    color: bool,
    mut out: impl Write,
) -> io::Result<()> {
    let Some(span) = problem.span() else {
        return writeln!(out, "{}: {problem}", problem.phase());
    };

    let range = char_range(source, span);
    Report::build(ReportKind::Custom(problem.phase(), Color::Red), path, range.start)
        .with_config(Config::default().with_color(color))
        .with_message(problem.to_string())
        .with_label(
            Label::new((path, range))
                .with_message(problem.label())
                .with_color(Color::Red),
        )
        .finish()
        .write((path, Source::from(source)), out)
}

/// Render to stderr, falling back to a plain line if the report fails.
pub fn report_problem(problem: &Problem, path: &str, source: &str, color: bool) {
    let stderr = io::stderr();
    if render_problem(problem, path, source, color, stderr.lock()).is_err() {
        eprintln!("{}: {problem}", problem.phase());
    }
}

/// Character range of `span`. Offsets past the end clamp to it; offsets
/// inside a multi-byte character round down to that character's start.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let chars_before = |offset: u32| {
        let mut end = (offset as usize).min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        source.get(..end).map_or(0, |prefix| prefix.chars().count())
    };
    chars_before(span.start)..chars_before(span.end)
}
