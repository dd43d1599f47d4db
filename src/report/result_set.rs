//! The collected programs of a search.

use crate::model::Program;

/// Complete programs in the order the search emitted them.
///
/// Display indices are not assigned by the search; call
/// [`ResultSet::indexed`] when the set is about to be presented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    programs: Vec<Program>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Program> {
        self.programs.iter()
    }

    pub fn as_slice(&self) -> &[Program] {
        &self.programs
    }

    pub fn into_vec(self) -> Vec<Program> {
        self.programs
    }

    /// Assigns 1-based display indices in emission order.
    pub fn indexed(mut self) -> Self {
        for (i, program) in self.programs.iter_mut().enumerate() {
            program.set_index(i + 1);
        }
        self
    }

    /// Splits into programs that honour every exact-order pin and the rest.
    pub fn partition_by_ordering(&self) -> (Vec<&Program>, Vec<&Program>) {
        self.programs.iter().partition(|p| p.respects_ordering())
    }

    /// Keeps only the programs matching `predicate`, preserving order.
    pub fn retain<F: FnMut(&Program) -> bool>(&mut self, predicate: F) {
        self.programs.retain(predicate);
    }
}

impl From<Vec<Program>> for ResultSet {
    fn from(programs: Vec<Program>) -> Self {
        Self { programs }
    }
}

impl FromIterator<Program> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Program>>(iter: I) -> Self {
        Self {
            programs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = Program;
    type IntoIter = std::vec::IntoIter<Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Program;
    type IntoIter = std::slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}
