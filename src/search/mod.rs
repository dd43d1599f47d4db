//! Exhaustive backtracking search over program orderings.
//!
//! Produces every ordering of a recital's sequences that keeps the running
//! overlap within budget and honours all positional constraints. The search
//! is exact: it never stops at a first solution and never drops one, unless
//! an explicit node, time, or cancellation cutoff is configured, in which
//! case [`SearchResult::cutoff`] says so.
//!
//! # Key Components
//!
//! - [`SearchConfig`]: overlap budget, exact-order handling, cutoffs
//! - [`Searcher`]: the depth-first enumerator
//! - [`solve`]: one-call entry point returning the programs

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{solve, Cutoff, SearchResult, Searcher};
