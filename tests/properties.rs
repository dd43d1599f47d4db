//! Property tests: the search agrees with brute-force permutation filtering.

use proptest::prelude::*;
use u_recital::model::{Dance, Program, Sequence};
use u_recital::search::{SearchConfig, Searcher};
use u_recital::solve;

const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

fn dance_strategy() -> impl Strategy<Value = Dance> {
    prop::collection::vec(any::<bool>(), NAMES.len()).prop_map(|mask| {
        Dance::new(
            NAMES
                .iter()
                .zip(mask)
                .filter(|(_, keep)| *keep)
                .map(|(name, _)| *name),
        )
    })
}

type Constraint = (Option<usize>, Option<usize>, Option<usize>);

fn constraint_strategy() -> impl Strategy<Value = Constraint> {
    (
        prop::option::weighted(0.2, 1..=6usize),
        prop::option::weighted(0.2, 1..=6usize),
        prop::option::weighted(0.2, 1..=6usize),
    )
}

/// Up to five sequences; constraints that are invalid for the final size
/// are dropped so every case is a valid recital.
fn recital_strategy() -> impl Strategy<Value = Vec<Sequence>> {
    prop::collection::vec(
        (prop::collection::vec(dance_strategy(), 1..=2), constraint_strategy()),
        1..=5,
    )
    .prop_map(|items| {
        let count = items.len();
        items
            .into_iter()
            .map(|(dances, (order, before, after))| {
                let plain = Sequence::new(dances).unwrap();
                let mut constrained = plain.clone();
                if let Some(order) = order {
                    constrained = constrained.with_order(order);
                }
                if let Some(before) = before {
                    constrained = constrained.with_before(before);
                }
                if let Some(after) = after {
                    constrained = constrained.with_after(after);
                }
                if constrained.validate(count).is_ok() {
                    constrained
                } else {
                    plain
                }
            })
            .collect()
    })
}

fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

fn positions_ok(order: &[&Sequence]) -> bool {
    order.iter().enumerate().all(|(i, s)| {
        let position = i + 1;
        s.order().map_or(true, |o| o == position)
            && s.before().map_or(true, |b| position < b)
            && s.after().map_or(true, |a| position > a)
    })
}

fn overlap(order: &[&Sequence]) -> usize {
    order.windows(2).map(|w| w[0].isect_ct(w[1])).sum()
}

fn brute_force_count(sequences: &[Sequence], max_overlap: usize) -> usize {
    permutations(sequences.len())
        .into_iter()
        .filter(|perm| {
            let order: Vec<&Sequence> = perm.iter().map(|&i| &sequences[i]).collect();
            positions_ok(&order) && overlap(&order) <= max_overlap
        })
        .count()
}

fn as_refs(program: &Program) -> Vec<&Sequence> {
    program.sequences().iter().map(|s| &**s).collect()
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    #[test]
    fn search_matches_brute_force(sequences in recital_strategy(), max_overlap in 0usize..4) {
        let programs = solve(&sequences, max_overlap);
        prop_assert_eq!(programs.len(), brute_force_count(&sequences, max_overlap));
    }

    #[test]
    fn every_program_is_feasible(sequences in recital_strategy(), max_overlap in 0usize..4) {
        for program in solve(&sequences, max_overlap) {
            let order = as_refs(&program);
            prop_assert_eq!(order.len(), sequences.len());
            prop_assert!(positions_ok(&order), "positional constraint broken");
            prop_assert!(program.respects_ordering());
            prop_assert_eq!(program.cumulative_overlap(), overlap(&order));
            prop_assert!(program.cumulative_overlap() <= max_overlap);
        }
    }

    #[test]
    fn count_is_monotone_in_budget(sequences in recital_strategy()) {
        let counts: Vec<usize> = (0..=8).map(|m| solve(&sequences, m).len()).collect();
        for pair in counts.windows(2) {
            prop_assert!(pair[0] <= pair[1], "counts not monotone: {:?}", counts);
        }
        // five dancers per boundary at most, four boundaries at most
        prop_assert_eq!(solve(&sequences, 20).len(), brute_force_count(&sequences, usize::MAX));
    }

    #[test]
    fn disjoint_unconstrained_gives_factorial(k in 1usize..=6) {
        let names = ["a", "b", "c", "d", "e", "f"];
        let sequences: Vec<Sequence> = names[..k]
            .iter()
            .map(|n| Sequence::new(vec![Dance::new([*n])]).unwrap())
            .collect();
        prop_assert_eq!(solve(&sequences, 0).len(), factorial(k));
    }

    #[test]
    fn relaxed_search_is_superset(sequences in recital_strategy(), max_overlap in 0usize..3) {
        let strict = Searcher::run(&sequences, &SearchConfig::default().with_max_overlap(max_overlap)).unwrap();
        let relaxed = Searcher::run(
            &sequences,
            &SearchConfig::default().with_max_overlap(max_overlap).with_exact_order(false),
        ).unwrap();
        let (respecting, _) = relaxed.programs.partition_by_ordering();
        prop_assert_eq!(respecting.len(), strict.programs.len());
    }

    #[test]
    fn parallel_matches_sequential(sequences in recital_strategy(), max_overlap in 0usize..3) {
        let base = SearchConfig::default().with_max_overlap(max_overlap);
        let sequential = Searcher::run(&sequences, &base).unwrap();
        let parallel = Searcher::run(&sequences, &base.clone().with_parallel(true)).unwrap();
        prop_assert_eq!(sequential.programs, parallel.programs);
    }
}
