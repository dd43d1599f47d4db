//! Constraint evaluation for the program search.
//!
//! Two pure decision procedures, evaluated afresh at every search depth:
//!
//! - **Positional eligibility**: [`allowed`] selects the unplaced sequences
//!   that may occupy the next position.
//! - **Overlap feasibility**: [`can_extend`] checks that appending a
//!   candidate keeps the running overlap within the budget.
//!
//! Neither procedure mutates its inputs, and neither treats an empty answer
//! as an error: a position nobody can fill is an ordinary dead end.

mod eligibility;
mod overlap;

pub use eligibility::{allowed, allowed_ignoring_order};
pub use overlap::{can_extend, extension_cost, Partial};
