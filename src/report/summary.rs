//! Structured summary handed to output formatters.

use crate::model::Program;

/// Summary of one program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgramSummary {
    /// 1-based display index.
    pub index: usize,
    /// Whether every exact-order pin is honoured.
    pub respects_ordering: bool,
    /// Total adjacent overlap.
    pub cumulative_overlap: usize,
    /// Number of sequences.
    pub sequence_count: usize,
    /// Dance titles in performance order.
    pub dances: Vec<String>,
}

/// Summary of a set of programs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Number of programs.
    pub total: usize,
    /// Programs honouring every exact-order pin.
    pub order_respecting: usize,
    /// Lowest cumulative overlap among the programs, if any.
    pub min_overlap: Option<usize>,
    pub programs: Vec<ProgramSummary>,
}

impl Report {
    /// Programs that break at least one exact-order pin.
    pub fn other(&self) -> usize {
        self.total.saturating_sub(self.order_respecting)
    }

    /// Whether no arrangement satisfied the constraints.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Summarises `programs`.
///
/// Programs without an assigned display index are numbered by their
/// 1-based position in `programs`.
///
/// # Examples
///
/// ```
/// use u_recital::model::{Dance, Sequence};
/// use u_recital::{report, solve};
///
/// let sequences: Vec<Sequence> = ["a", "b", "c"]
///     .iter()
///     .map(|d| Sequence::new(vec![Dance::new([*d])]).unwrap())
///     .collect();
/// let summary = report(&solve(&sequences, 0));
/// assert_eq!(summary.total, 6);
/// assert_eq!(summary.programs[5].index, 6);
/// ```
pub fn report(programs: &[Program]) -> Report {
    let summaries: Vec<ProgramSummary> = programs
        .iter()
        .enumerate()
        .map(|(i, program)| ProgramSummary {
            index: program.index().unwrap_or(i + 1),
            respects_ordering: program.respects_ordering(),
            cumulative_overlap: program.cumulative_overlap(),
            sequence_count: program.len(),
            dances: program
                .dances()
                .iter()
                .map(|d| d.title().to_string())
                .collect(),
        })
        .collect();

    Report {
        total: summaries.len(),
        order_respecting: summaries.iter().filter(|s| s.respects_ordering).count(),
        min_overlap: summaries.iter().map(|s| s.cumulative_overlap).min(),
        programs: summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dance, Sequence};
    use std::sync::Arc;

    fn seq(title: &str, dancers: &[&str]) -> Arc<Sequence> {
        Arc::new(Sequence::new(vec![Dance::new(dancers.iter().copied()).with_title(title)]).unwrap())
    }

    #[test]
    fn test_empty_report() {
        let summary = report(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.other(), 0);
        assert_eq!(summary.min_overlap, None);
    }

    #[test]
    fn test_report_fields() {
        let program = Program::from_sequences(
            vec![seq("One", &["a", "b"]), seq("Two", &["b", "c"])],
            1,
        )
        .unwrap();
        let summary = report(&[program]);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.order_respecting, 1);
        assert_eq!(summary.min_overlap, Some(1));
        let first = &summary.programs[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.cumulative_overlap, 1);
        assert_eq!(first.sequence_count, 2);
        assert_eq!(first.dances, vec!["One", "Two"]);
    }

    #[test]
    fn test_assigned_index_wins() {
        let mut program = Program::from_sequences(vec![seq("Solo", &["a"])], 0).unwrap();
        program.set_index(42);
        assert_eq!(report(&[program]).programs[0].index, 42);
    }

    #[test]
    fn test_other_with_inconsistent_counts() {
        let summary = Report {
            total: 1,
            order_respecting: 3,
            min_overlap: None,
            programs: Vec::new(),
        };
        assert_eq!(summary.other(), 0);
    }

    #[test]
    fn test_other_counts_pin_violations() {
        let pinned = Arc::new(
            Sequence::new(vec![Dance::new(["a"])]).unwrap().with_order(2),
        );
        let free = seq("Free", &["b"]);
        let good = Program::from_sequences(vec![Arc::clone(&free), Arc::clone(&pinned)], 0).unwrap();
        let bad = Program::from_sequences(vec![pinned, free], 0).unwrap();
        let summary = report(&[good, bad]);
        assert_eq!(summary.order_respecting, 1);
        assert_eq!(summary.other(), 1);
    }
}
