//! Plain-text rendering of sequences and search results.

use std::fmt::Write;

use crate::error::RenderError;
use crate::model::{Dance, Program, Sequence};
use crate::report::Report;

/// Characters that delimit constraints, titles and dances in the text format.
const RESERVED: [char; 3] = ['|', ':', ';'];

/// Renders sequences in the recital text format, one per line, so the
/// output loads back to equal sequences.
///
/// Fails on titles or dancer names the format cannot carry: empty values,
/// the delimiters `|`, `:` and `;`, line breaks, surrounding whitespace in
/// a title, or whitespace inside a dancer name. A line that would start
/// with `#` gets an empty constraint prefix so it is not read as a comment.
pub fn render_sequences(sequences: &[Sequence]) -> Result<String, RenderError> {
    let mut out = String::new();
    for (i, sequence) in sequences.iter().enumerate() {
        let number = i + 1;
        let dances = sequence
            .dances()
            .iter()
            .map(|dance| dance_entry(dance, number))
            .collect::<Result<Vec<_>, _>>()?;
        let body = dances.join("; ");

        let prefix = constraint_prefix(sequence);
        if !prefix.is_empty() {
            let _ = writeln!(out, "{prefix} | {body}");
        } else if body.starts_with('#') {
            let _ = writeln!(out, "| {body}");
        } else {
            let _ = writeln!(out, "{body}");
        }
    }
    Ok(out)
}

fn dance_entry(dance: &Dance, sequence: usize) -> Result<String, RenderError> {
    let title = dance.title();
    let title_ok = !title.is_empty()
        && title.trim() == title
        && !title.contains(|c: char| RESERVED.contains(&c) || c == '\n' || c == '\r');
    if !title_ok {
        return Err(RenderError::Title {
            sequence,
            title: title.to_string(),
        });
    }

    let mut entry = format!("{title}:");
    for dancer in dance.dancers() {
        let name = dancer.name();
        if name.is_empty() || name.contains(|c: char| RESERVED.contains(&c) || c.is_whitespace()) {
            return Err(RenderError::Dancer {
                sequence,
                name: name.to_string(),
            });
        }
        entry.push(' ');
        entry.push_str(name);
    }
    Ok(entry)
}

fn constraint_prefix(sequence: &Sequence) -> String {
    let mut parts = Vec::new();
    if let Some(order) = sequence.order() {
        parts.push(order.to_string());
    }
    if let Some(after) = sequence.after() {
        parts.push(format!(">{after}"));
    }
    if let Some(before) = sequence.before() {
        parts.push(format!("<{before}"));
    }
    parts.join(" and ")
}

/// The full listing: a count line followed by every program.
///
/// # Examples
///
/// ```
/// use u_recital::model::{Dance, Sequence};
/// use u_recital::report::ResultSet;
/// use u_recital::solve;
/// use u_recital::text::render_programs;
///
/// let sequences = vec![Sequence::new(vec![Dance::new(["a"]).with_title("Solo")]).unwrap()];
/// let programs = ResultSet::from(solve(&sequences, 0)).indexed();
/// assert_eq!(
///     render_programs(programs.as_slice()),
///     "1 program(s) found.\n\nProgram 1:\nSolo: {a}\n"
/// );
/// ```
pub fn render_programs(programs: &[Program]) -> String {
    let mut out = format!("{} program(s) found.\n", programs.len());
    for program in programs {
        let _ = write!(out, "\n{program}");
    }
    out
}

/// One line per program: index, overlap, and dance titles.
pub fn render_summary(report: &Report) -> String {
    let mut out = format!("{} program(s) found.\n", report.total);
    if report.order_respecting != report.total {
        let _ = writeln!(
            out,
            "{} honour every exact order, {} do not.",
            report.order_respecting,
            report.other()
        );
    }
    for program in &report.programs {
        let _ = writeln!(
            out,
            "{:>4}  overlap {}  {}",
            program.index,
            program.cumulative_overlap,
            program.dances.join(", ")
        );
    }
    out
}
