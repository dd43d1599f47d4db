//! Backtracking enumeration of every feasible program.
//!
//! # Algorithm
//!
//! The search state is `(partial program, remaining pool)`, starting from
//! `(empty, all sequences)`.
//!
//! 1. If the pool is empty, the partial program is complete: emit it.
//! 2. Otherwise let `position = placed + 1` and ask the evaluator which
//!    pool members may occupy `position`.
//! 3. For each eligible sequence, in pool order, that keeps the overlap
//!    within budget: move it from the pool onto the program, recurse, and
//!    move it back.
//!
//! A position with no qualifying sequence is a dead end and emits nothing.
//! There is no memoisation: two paths reaching the same pool generally
//! differ in position and remaining overlap budget.
//!
//! Branch state is a trail of shared references that is pushed and popped
//! around each child, so siblings never observe each other's choices.
//! With the `parallel` feature each first-level branch gets its own trail
//! and runs on a rayon worker.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use super::config::SearchConfig;
use crate::error::ConfigError;
use crate::eval::{allowed, allowed_ignoring_order, can_extend, extension_cost, Partial};
use crate::model::{Program, Sequence};
use crate::report::ResultSet;

/// Why a search stopped before exhausting the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// The node budget was spent.
    NodeLimit,
    /// The wall-clock budget elapsed.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a program search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every complete program found, in emission order.
    pub programs: ResultSet,
    /// Search nodes visited (the root included).
    pub nodes: u64,
    /// Nodes at which no sequence could be placed.
    pub dead_ends: u64,
    /// Set when a budget or cancellation ended the search early. In that
    /// case `programs` is a prefix of the full enumeration.
    pub cutoff: Option<Cutoff>,
    /// Wall-clock time spent searching, in milliseconds.
    pub elapsed_ms: u64,
}

impl SearchResult {
    /// Whether the enumeration ran to completion.
    pub fn is_complete(&self) -> bool {
        self.cutoff.is_none()
    }
}

/// Enumerates every program of `sequences` within `max_overlap`.
///
/// Shorthand for [`Searcher::run`] with a default configuration.
///
/// # Examples
///
/// ```
/// use u_recital::model::{Dance, Sequence};
/// use u_recital::solve;
///
/// let sequences: Vec<Sequence> = ["a", "b", "c", "d"]
///     .iter()
///     .map(|d| Sequence::new(vec![Dance::new([*d])]).unwrap())
///     .collect();
/// assert_eq!(solve(&sequences, 0).len(), 24);
/// ```
pub fn solve(sequences: &[Sequence], max_overlap: usize) -> Vec<Program> {
    let config = SearchConfig::default().with_max_overlap(max_overlap);
    // no limits are set, so validation cannot fail
    Searcher::run(sequences, &config)
        .map(|result| result.programs.into_vec())
        .unwrap_or_default()
}

/// Program search runner.
pub struct Searcher;

impl Searcher {
    /// Runs the search over `sequences`.
    ///
    /// Fails without searching if `config` does not validate.
    pub fn run(sequences: &[Sequence], config: &SearchConfig) -> Result<SearchResult, ConfigError> {
        Self::run_with_cancel(sequences, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` while the search runs, it stops at the
    /// next node and reports [`Cutoff::Cancelled`].
    pub fn run_with_cancel(
        sequences: &[Sequence],
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, ConfigError> {
        let shared: Vec<Arc<Sequence>> = sequences.iter().cloned().map(Arc::new).collect();
        Self::run_shared(&shared, config, cancel)
    }

    /// Runs the search over sequences that are already shared.
    pub fn run_shared(
        sequences: &[Arc<Sequence>],
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, ConfigError> {
        config.validate().map_err(ConfigError)?;

        let span = tracing::info_span!(
            "program_search",
            sequences = sequences.len(),
            max_overlap = config.max_overlap
        );
        let _enter = span.enter();

        let start = Instant::now();
        let explorer = Explorer {
            config,
            budget: Budget::new(config, cancel.as_deref(), start),
        };

        let mut pool: Vec<&Arc<Sequence>> = sequences.iter().collect();
        let programs = if config.parallel {
            explorer.explore_parallel(pool)
        } else {
            let mut out = Vec::new();
            explorer.explore(&mut Trail::new(), &mut pool, &mut out);
            out
        };

        let result = SearchResult {
            programs: programs.into(),
            nodes: explorer.budget.nodes.load(Ordering::Relaxed),
            dead_ends: explorer.budget.dead_ends.load(Ordering::Relaxed),
            cutoff: explorer.budget.cutoff.get().copied(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        match result.cutoff {
            Some(cutoff) => tracing::debug!(
                ?cutoff,
                found = result.programs.len(),
                nodes = result.nodes,
                "program search cut off"
            ),
            None => tracing::debug!(
                found = result.programs.len(),
                nodes = result.nodes,
                dead_ends = result.dead_ends,
                elapsed_ms = result.elapsed_ms,
                "program search complete"
            ),
        }
        Ok(result)
    }
}

/// Node, time, and cancellation accounting shared by all workers.
struct Budget<'c> {
    node_limit: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<&'c AtomicBool>,
    nodes: AtomicU64,
    dead_ends: AtomicU64,
    cutoff: OnceLock<Cutoff>,
}

impl<'c> Budget<'c> {
    fn new(config: &SearchConfig, cancel: Option<&'c AtomicBool>, start: Instant) -> Self {
        Self {
            node_limit: config.node_limit,
            deadline: config
                .time_limit_ms
                .map(|ms| start + Duration::from_millis(ms)),
            cancel,
            nodes: AtomicU64::new(0),
            dead_ends: AtomicU64::new(0),
            cutoff: OnceLock::new(),
        }
    }

    fn halted(&self) -> bool {
        self.cutoff.get().is_some()
    }

    fn halt(&self, reason: Cutoff) {
        // first reason wins
        let _ = self.cutoff.set(reason);
    }

    /// Accounts for one node. Returns `false` if the search must stop.
    fn enter(&self) -> bool {
        if self.halted() {
            return false;
        }
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            self.halt(Cutoff::Cancelled);
            return false;
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.halt(Cutoff::TimeLimit);
            return false;
        }
        let limit = self.node_limit;
        let admitted = self
            .nodes
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                limit.map_or(true, |l| n < l).then_some(n + 1)
            });
        if admitted.is_err() {
            self.halt(Cutoff::NodeLimit);
            return false;
        }
        true
    }
}

/// Placed sequences of one branch, with the running overlap after each.
struct Trail<'a> {
    placed: Vec<&'a Arc<Sequence>>,
    overlap: Vec<usize>,
}

impl<'a> Trail<'a> {
    fn new() -> Self {
        Self {
            placed: Vec::new(),
            overlap: Vec::new(),
        }
    }

    fn depth(&self) -> usize {
        self.placed.len()
    }

    fn push(&mut self, sequence: &'a Arc<Sequence>, cost: usize) {
        let total = self.cumulative_overlap() + cost;
        self.placed.push(sequence);
        self.overlap.push(total);
    }

    fn pop(&mut self) {
        self.placed.pop();
        self.overlap.pop();
    }

    fn to_program(&self, max_overlap: usize) -> Program {
        Program::from_trail(
            self.placed.iter().map(|s| Arc::clone(s)).collect(),
            self.cumulative_overlap(),
            max_overlap,
        )
    }
}

impl Partial for Trail<'_> {
    fn last_placed(&self) -> Option<&Sequence> {
        self.placed.last().copied().map(Arc::as_ref)
    }

    fn cumulative_overlap(&self) -> usize {
        self.overlap.last().copied().unwrap_or(0)
    }
}

struct Explorer<'c> {
    config: &'c SearchConfig,
    budget: Budget<'c>,
}

impl Explorer<'_> {
    fn eligible(&self, pool: &[&Arc<Sequence>], position: usize) -> Vec<usize> {
        if self.config.enforce_exact_order {
            allowed(pool, position)
        } else {
            allowed_ignoring_order(pool, position)
        }
    }

    fn explore<'a>(
        &self,
        trail: &mut Trail<'a>,
        pool: &mut Vec<&'a Arc<Sequence>>,
        out: &mut Vec<Program>,
    ) {
        if !self.budget.enter() {
            return;
        }
        if pool.is_empty() {
            out.push(trail.to_program(self.config.max_overlap));
            return;
        }

        let position = trail.depth() + 1;
        let mut children = 0usize;
        for i in self.eligible(pool, position) {
            let candidate = pool[i];
            if !can_extend(&*trail, candidate, self.config.max_overlap) {
                continue;
            }
            children += 1;
            let cost = extension_cost(&*trail, candidate);

            pool.remove(i);
            trail.push(candidate, cost);
            self.explore(trail, pool, out);
            trail.pop();
            pool.insert(i, candidate);

            if self.budget.halted() {
                return;
            }
        }

        if children == 0 {
            self.budget.dead_ends.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(position, remaining = pool.len(), "dead end");
        }
    }

    #[cfg(feature = "parallel")]
    fn explore_parallel(&self, pool: Vec<&Arc<Sequence>>) -> Vec<Program> {
        use rayon::prelude::*;

        if !self.budget.enter() {
            return Vec::new();
        }
        if pool.is_empty() {
            return vec![Trail::new().to_program(self.config.max_overlap)];
        }

        // an empty program admits any first sequence at zero cost
        let first = self.eligible(&pool, 1);
        if first.is_empty() {
            self.budget.dead_ends.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(position = 1, remaining = pool.len(), "dead end");
            return Vec::new();
        }

        let branches: Vec<Vec<Program>> = first
            .par_iter()
            .map(|&i| {
                let mut rest = pool.clone();
                let head = rest.remove(i);
                let mut trail = Trail::new();
                trail.push(head, 0);
                let mut out = Vec::new();
                self.explore(&mut trail, &mut rest, &mut out);
                out
            })
            .collect();
        branches.into_iter().flatten().collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn explore_parallel(&self, pool: Vec<&Arc<Sequence>>) -> Vec<Program> {
        tracing::debug!("built without the `parallel` feature; searching sequentially");
        let mut pool = pool;
        let mut out = Vec::new();
        self.explore(&mut Trail::new(), &mut pool, &mut out);
        out
    }
}
