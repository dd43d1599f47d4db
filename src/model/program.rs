//! Programs: ordered arrangements of sequences under an overlap budget.

use std::fmt;
use std::sync::Arc;

use super::dance::Dance;
use super::sequence::Sequence;
use crate::error::OverlapExceeded;

/// An ordered list of sequences whose adjacent overlap never exceeds the
/// budget it was created with.
///
/// Sequences are shared, so cloning a program copies references only.
/// The display `index` is assigned at report time and is ignored by
/// equality.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_recital::model::{Dance, Program, Sequence};
///
/// let ab = Arc::new(Sequence::new(vec![Dance::new(["a", "b"])]).unwrap());
/// let bc = Arc::new(Sequence::new(vec![Dance::new(["b", "c"])]).unwrap());
///
/// let mut program = Program::new(0);
/// program.push(Arc::clone(&ab)).unwrap();
/// assert!(program.push(Arc::clone(&bc)).is_err());
///
/// let mut relaxed = Program::new(1);
/// relaxed.push(ab).unwrap();
/// relaxed.push(bc).unwrap();
/// assert_eq!(relaxed.cumulative_overlap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    sequences: Vec<Arc<Sequence>>,
    cumulative_overlap: usize,
    max_overlap: usize,
    index: Option<usize>,
}

impl Program {
    /// Creates an empty program with the given overlap budget.
    pub fn new(max_overlap: usize) -> Self {
        Self {
            sequences: Vec::new(),
            cumulative_overlap: 0,
            max_overlap,
            index: None,
        }
    }

    /// Builds a program by appending each sequence in turn.
    pub fn from_sequences<I>(sequences: I, max_overlap: usize) -> Result<Self, OverlapExceeded>
    where
        I: IntoIterator<Item = Arc<Sequence>>,
    {
        let mut program = Self::new(max_overlap);
        for sequence in sequences {
            program.push(sequence)?;
        }
        Ok(program)
    }

    /// Assembles a program whose overlap was already accounted for by the
    /// caller.
    pub(crate) fn from_trail(
        sequences: Vec<Arc<Sequence>>,
        cumulative_overlap: usize,
        max_overlap: usize,
    ) -> Self {
        debug_assert!(cumulative_overlap <= max_overlap);
        Self {
            sequences,
            cumulative_overlap,
            max_overlap,
            index: None,
        }
    }

    /// Appends a sequence, rejecting it if the program would go over budget.
    pub fn push(&mut self, sequence: Arc<Sequence>) -> Result<(), OverlapExceeded> {
        let added = self.last().map_or(0, |last| last.isect_ct(&sequence));
        let attempted = self.cumulative_overlap + added;
        if attempted > self.max_overlap {
            return Err(OverlapExceeded {
                attempted,
                max_overlap: self.max_overlap,
            });
        }
        self.cumulative_overlap = attempted;
        self.sequences.push(sequence);
        Ok(())
    }

    pub fn sequences(&self) -> &[Arc<Sequence>] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn last(&self) -> Option<&Sequence> {
        self.sequences.last().map(Arc::as_ref)
    }

    pub fn cumulative_overlap(&self) -> usize {
        self.cumulative_overlap
    }

    pub fn max_overlap(&self) -> usize {
        self.max_overlap
    }

    /// Display index, if one has been assigned.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// All dances in performance order.
    pub fn dances(&self) -> Vec<&Dance> {
        self.sequences.iter().flat_map(|s| s.dances()).collect()
    }

    /// Sum of `isect_ct` over adjacent pairs, recomputed from scratch.
    pub fn adjacent_overlap(&self) -> usize {
        self.sequences
            .windows(2)
            .map(|pair| pair[0].isect_ct(&pair[1]))
            .sum()
    }

    /// Whether every sequence with an exact `order` sits at that position.
    pub fn respects_ordering(&self) -> bool {
        self.sequences
            .iter()
            .enumerate()
            .all(|(i, s)| s.order().map_or(true, |order| order == i + 1))
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.sequences == other.sequences
    }
}

impl Eq for Program {}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => writeln!(f, "Program {index}:")?,
            None => writeln!(f, "Program:")?,
        }
        for dance in self.dances() {
            writeln!(f, "{dance}")?;
        }
        Ok(())
    }
}
