//! Construction and validation of a whole recital's sequences.

use super::dance::Dance;
use super::sequence::Sequence;
use crate::error::{BuildError, ValidationError};

/// An unvalidated sequence description, as produced by a loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSequence {
    pub dances: Vec<Dance>,
    pub order: Option<usize>,
    pub before: Option<usize>,
    pub after: Option<usize>,
}

impl RawSequence {
    pub fn new(dances: Vec<Dance>) -> Self {
        Self {
            dances,
            ..Self::default()
        }
    }

    pub fn with_order(mut self, position: usize) -> Self {
        self.order = Some(position);
        self
    }

    pub fn with_before(mut self, position: usize) -> Self {
        self.before = Some(position);
        self
    }

    pub fn with_after(mut self, position: usize) -> Self {
        self.after = Some(position);
        self
    }
}

/// Builds sequences from raw descriptions and validates every positional
/// constraint against the final sequence count.
///
/// The first failing sequence is reported by its 1-based position.
///
/// # Examples
///
/// ```
/// use u_recital::model::{build_sequences, Dance, RawSequence};
///
/// let raw = vec![
///     RawSequence::new(vec![Dance::new(["a"])]).with_order(1),
///     RawSequence::new(vec![Dance::new(["b"])]).with_after(1),
/// ];
/// let sequences = build_sequences(raw).unwrap();
/// assert_eq!(sequences.len(), 2);
///
/// let bad = vec![RawSequence::new(vec![Dance::new(["a"])]).with_order(3)];
/// assert!(build_sequences(bad).is_err());
/// ```
pub fn build_sequences(raw: Vec<RawSequence>) -> Result<Vec<Sequence>, BuildError> {
    let count = raw.len();
    let mut sequences = Vec::with_capacity(count);

    for (i, item) in raw.into_iter().enumerate() {
        let number = i + 1;
        let mut sequence = Sequence::new(item.dances).map_err(|source| BuildError::Shape {
            sequence: number,
            source,
        })?;
        if let Some(order) = item.order {
            sequence = sequence.with_order(order);
        }
        if let Some(before) = item.before {
            sequence = sequence.with_before(before);
        }
        if let Some(after) = item.after {
            sequence = sequence.with_after(after);
        }
        sequences.push(sequence);
    }

    for (i, sequence) in sequences.iter().enumerate() {
        sequence.validate(count).map_err(|kind| ValidationError {
            sequence: i + 1,
            kind,
        })?;
    }

    tracing::debug!(count, "built recital sequences");
    Ok(sequences)
}
