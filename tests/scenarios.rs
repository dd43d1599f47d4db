//! End-to-end scenarios through the public API.

use u_recital::model::{build_sequences, Dance, RawSequence, Sequence};
use u_recital::report::ResultSet;
use u_recital::sample::{generate, SampleConfig};
use u_recital::search::{Cutoff, SearchConfig, Searcher};
use u_recital::text::{load_str, render_programs};
use u_recital::{report, solve, BuildError};

fn pairs(len: usize) -> Vec<RawSequence> {
    let letters = ["a", "b", "c", "d", "e", "f"];
    (0..len)
        .map(|i| RawSequence::new(vec![Dance::new([letters[i], letters[i + 1]])]))
        .collect()
}

#[test]
fn four_disjoint_singletons() {
    let sequences = load_str("a\nb\nc\nd\n").unwrap();
    let programs = solve(&sequences, 0);
    assert_eq!(programs.len(), 24);
    assert!(programs.iter().all(|p| p.cumulative_overlap() == 0));
}

#[test]
fn pinned_ends_of_a_chain_leave_one_program() {
    let mut raw = pairs(5);
    raw[0] = raw[0].clone().with_order(1);
    raw[3] = raw[3].clone().with_order(5);
    let sequences = build_sequences(raw).unwrap();

    let programs = solve(&sequences, 0);
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0].sequences()[0].order(), Some(1));
    assert_eq!(programs[0].sequences()[4].order(), Some(5));
}

#[test]
fn pinned_disjoint_singletons() {
    let sequences = load_str("1 | a\nb\nc\n4 | d\n").unwrap();
    let programs = solve(&sequences, 0);
    // only the two middle sequences are free to swap
    assert_eq!(programs.len(), 2);
    for program in &programs {
        assert!(program.respects_ordering());
    }
}

#[test]
fn intermission_from_text() {
    let text = "A: a b\nB: b c\nIntermission:\nC: c d\nD: d e\n";
    let sequences = load_str(text).unwrap();
    assert_eq!(solve(&sequences, 0).len(), 20);
}

#[test]
fn windows_from_text() {
    let text = "<3 | Opener: a\n>2 | Closer: b\nMiddle: c\nFiller: d\n";
    let sequences = load_str(text).unwrap();
    for program in solve(&sequences, 0) {
        let position_of = |title: &str| {
            program
                .dances()
                .iter()
                .position(|d| d.title() == title)
                .map(|i| i + 1)
                .unwrap()
        };
        assert!(position_of("Opener") < 3);
        assert!(position_of("Closer") > 2);
    }
}

#[test]
fn infeasible_recital_is_an_empty_result() {
    // everyone dances everything: no rest is possible at budget 0
    let sequences = load_str("a b\na b\na b\n").unwrap();
    let result = Searcher::run(&sequences, &SearchConfig::default()).unwrap();
    assert!(result.is_complete());
    assert!(result.programs.is_empty());
    let summary = report(result.programs.as_slice());
    assert!(summary.is_empty());
    assert_eq!(render_programs(result.programs.as_slice()), "0 program(s) found.\n");
}

#[test]
fn invalid_window_is_rejected_before_search() {
    let raw = vec![
        RawSequence::new(vec![Dance::new(["a"])]).with_after(2).with_before(3),
        RawSequence::new(vec![Dance::new(["b"])]),
        RawSequence::new(vec![Dance::new(["c"])]),
        RawSequence::new(vec![Dance::new(["d"])]),
    ];
    let err = build_sequences(raw).unwrap_err();
    assert!(matches!(err, BuildError::Validation(ref e) if e.sequence == 1));
}

#[test]
fn almost_valid_programs() {
    let sequences = load_str("1 | a b\nb c\nc d\n").unwrap();
    let strict = solve(&sequences, 1);
    assert_eq!(strict.len(), 1);

    let relaxed = Searcher::run(
        &sequences,
        &SearchConfig::default().with_max_overlap(1).with_exact_order(false),
    ).unwrap();
    let mut almost: ResultSet = relaxed.programs;
    almost.retain(|p| !p.respects_ordering());
    let almost = almost.indexed();
    // three orderings fit the budget but move the opener
    assert_eq!(almost.len(), 3);
    assert_eq!(almost.as_slice()[1].index(), Some(2));
}

#[test]
fn report_summary_over_sample_recital() {
    let sequences = generate(&SampleConfig::default().with_seed(11)).unwrap();
    let result = Searcher::run(&sequences, &SearchConfig::default().with_max_overlap(2)).unwrap();
    assert!(result.is_complete());
    let summary = report(result.programs.indexed().as_slice());
    assert_eq!(summary.total, summary.order_respecting);
    for (i, program) in summary.programs.iter().enumerate() {
        assert_eq!(program.index, i + 1);
        assert!(program.cumulative_overlap <= 2);
        assert_eq!(program.dances.len(), 10);
    }
}

#[test]
fn time_limit_is_reported() {
    let sequences: Vec<Sequence> = (0..12)
        .map(|i| Sequence::new(vec![Dance::new([format!("d{i}")])]).unwrap())
        .collect();
    let config = SearchConfig::default().with_time_limit_ms(1);
    let result = Searcher::run(&sequences, &config).unwrap();
    // 12! programs cannot be listed in a millisecond
    assert_eq!(result.cutoff, Some(Cutoff::TimeLimit));
    assert!(!result.is_complete());
}
