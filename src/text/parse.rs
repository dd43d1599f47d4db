//! Parser for the line-oriented recital format.
//!
//! One sequence per line. Blank lines and lines starting with `#` are
//! skipped. A line is
//!
//! ```text
//! [constraints |] dance ; dance ; ...
//! ```
//!
//! where a dance is `[title :] dancer dancer ...` and the optional
//! constraints are an exact position (`3`), an after bound (`>2`), a before
//! bound (`<5`), or a window joined with `and` (`>2 and <5`).

use std::path::Path;

use crate::error::{LoadError, ParseError};
use crate::model::{build_sequences, Dance, RawSequence, Sequence};

/// Positional constraints parsed from a constraint prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderInfo {
    pub order: Option<usize>,
    pub before: Option<usize>,
    pub after: Option<usize>,
}

/// Parses a constraint prefix such as `" 7 "`, `">5 and <42"`, or `"<42"`.
///
/// # Examples
///
/// ```
/// use u_recital::text::parse_order_info;
///
/// let info = parse_order_info("<42 and >5").unwrap();
/// assert_eq!(info.before, Some(42));
/// assert_eq!(info.after, Some(5));
/// assert_eq!(info.order, None);
/// ```
pub fn parse_order_info(text: &str) -> Result<OrderInfo, String> {
    let mut info = OrderInfo::default();
    let text = text.trim();
    if text.is_empty() {
        return Ok(info);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    for part in words.split(|w| w.eq_ignore_ascii_case("and")) {
        let part = part.concat();
        let (slot, digits, label) = if let Some(rest) = part.strip_prefix('>') {
            (&mut info.after, rest, "after")
        } else if let Some(rest) = part.strip_prefix('<') {
            (&mut info.before, rest, "before")
        } else {
            (&mut info.order, part.as_str(), "order")
        };
        if digits.is_empty() {
            return Err(format!("missing position in constraint '{text}'"));
        }
        let value: usize = digits
            .parse()
            .map_err(|_| format!("invalid position '{digits}' in constraint '{text}'"))?;
        if slot.replace(value).is_some() {
            return Err(format!("{label} given more than once in '{text}'"));
        }
    }
    Ok(info)
}

fn parse_dance(text: &str) -> Result<Dance, String> {
    let mut pieces = text.split(':');
    let first = pieces.next().unwrap_or_default();
    let (title, dancers) = match (pieces.next(), pieces.next()) {
        (None, _) => (None, first),
        (Some(dancers), None) => (Some(first.trim()), dancers),
        (Some(_), Some(_)) => return Err(format!("too many ':' in dance '{}'", text.trim())),
    };

    let dance = Dance::new(dancers.split_whitespace());
    Ok(match title {
        Some(title) if !title.is_empty() => dance.with_title(title),
        _ => dance,
    })
}

/// Parses one non-comment line into a raw sequence.
pub fn parse_line(line: &str) -> Result<RawSequence, String> {
    let (constraints, body) = match line.split_once('|') {
        Some((constraints, body)) => (constraints, body),
        None => ("", line),
    };
    let info = parse_order_info(constraints)?;

    let dances = body
        .split(';')
        .filter(|piece| !piece.trim().is_empty())
        .map(parse_dance)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawSequence {
        dances,
        order: info.order,
        before: info.before,
        after: info.after,
    })
}

/// Parses a whole recital description into raw sequences.
pub fn parse_str(text: &str) -> Result<Vec<RawSequence>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            parse_line(line).map_err(|message| ParseError {
                line: i + 1,
                message,
            })
        })
        .collect()
}

/// Parses and validates a recital description.
pub fn load_str(text: &str) -> Result<Vec<Sequence>, LoadError> {
    let raw = parse_str(text)?;
    Ok(build_sequences(raw)?)
}

/// Reads, parses, and validates a recital description file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let sequences = load_str(&text)?;
    tracing::info!(path = %path.display(), sequences = sequences.len(), "loaded recital");
    Ok(sequences)
}
