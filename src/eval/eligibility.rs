//! Positional eligibility of unplaced sequences.

use crate::model::Sequence;

/// Returns the indices (into `pool`, in pool order) of the sequences that may
/// occupy the 1-based `position`.
///
/// An exact-order claim on `position` is exclusive: if any sequence in the
/// pool has `order == position`, only those sequences are returned.
/// Otherwise a sequence qualifies when it has no exact order and `position`
/// lies inside its before/after window.
///
/// Conflicting claims are not reported as errors. Two sequences pinned to
/// the same position are both returned here and the loser can never be
/// placed later, so the branch simply dies.
///
/// # Examples
///
/// ```
/// use u_recital::eval::allowed;
/// use u_recital::model::{Dance, Sequence};
///
/// let pool = vec![
///     Sequence::new(vec![Dance::new(["a"])]).unwrap(),
///     Sequence::new(vec![Dance::new(["b"])]).unwrap().with_order(2),
///     Sequence::new(vec![Dance::new(["c"])]).unwrap().with_after(1),
/// ];
/// assert_eq!(allowed(&pool, 1), vec![0]);
/// assert_eq!(allowed(&pool, 2), vec![1]);
/// assert_eq!(allowed(&pool, 3), vec![0, 2]);
/// ```
pub fn allowed<S: AsRef<Sequence>>(pool: &[S], position: usize) -> Vec<usize> {
    let pinned = matching(pool, |s| s.order() == Some(position));
    if !pinned.is_empty() {
        return pinned;
    }
    matching(pool, |s| s.order().is_none() && s.window_admits(position))
}

/// Like [`allowed`], but treats exact orders as absent.
///
/// Before/after windows still apply. Used to enumerate programs that are
/// valid except for their exact-order pins.
pub fn allowed_ignoring_order<S: AsRef<Sequence>>(pool: &[S], position: usize) -> Vec<usize> {
    matching(pool, |s| s.window_admits(position))
}

fn matching<S, F>(pool: &[S], keep: F) -> Vec<usize>
where
    S: AsRef<Sequence>,
    F: Fn(&Sequence) -> bool,
{
    pool.iter()
        .map(S::as_ref)
        .enumerate()
        .filter(|(_, s)| keep(*s))
        .map(|(i, _)| i)
        .collect()
}
