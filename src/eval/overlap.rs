//! Overlap feasibility of extending a partial program.

use crate::model::{Program, Sequence};

/// A partially built program, as seen by the overlap check.
///
/// Implemented by [`Program`] and by the search's internal trail, so both
/// go through the same feasibility rule.
pub trait Partial {
    /// The most recently placed sequence, if any.
    fn last_placed(&self) -> Option<&Sequence>;

    /// Sum of overlap between adjacent placed sequences.
    fn cumulative_overlap(&self) -> usize;
}

impl Partial for Program {
    fn last_placed(&self) -> Option<&Sequence> {
        self.last()
    }

    fn cumulative_overlap(&self) -> usize {
        Program::cumulative_overlap(self)
    }
}

/// Overlap added by placing `candidate` next. Zero for an empty program.
pub fn extension_cost<P: Partial + ?Sized>(program: &P, candidate: &Sequence) -> usize {
    program
        .last_placed()
        .map_or(0, |last| last.isect_ct(candidate))
}

/// Whether `candidate` can be appended without exceeding `max_overlap`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_recital::eval::can_extend;
/// use u_recital::model::{Dance, Program, Sequence};
///
/// let ab = Sequence::new(vec![Dance::new(["a", "b"])]).unwrap();
/// let bc = Sequence::new(vec![Dance::new(["b", "c"])]).unwrap();
///
/// let mut program = Program::new(1);
/// assert!(can_extend(&program, &bc, 0));
/// program.push(Arc::new(ab)).unwrap();
/// assert!(!can_extend(&program, &bc, 0));
/// assert!(can_extend(&program, &bc, 1));
/// ```
pub fn can_extend<P: Partial + ?Sized>(program: &P, candidate: &Sequence, max_overlap: usize) -> bool {
    program.cumulative_overlap() + extension_cost(program, candidate) <= max_overlap
}
