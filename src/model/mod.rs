//! Entity model: dancers, dances, sequences, and programs.
//!
//! All entities are immutable value data once built. A [`Program`] holds
//! shared references to its sequences, so many programs can be produced by
//! a search without copying any dance data.
//!
//! # Key Components
//!
//! - [`Dance`]: a titled set of [`Dancer`]s
//! - [`Sequence`]: a non-empty block of dances with optional positional
//!   constraints and the [`Sequence::isect_ct`] overlap metric
//! - [`Program`]: an append-only arrangement bounded by an overlap budget
//! - [`build_sequences`]: validation of a full recital against its size

mod build;
mod dance;
mod program;
mod sequence;

pub use build::{build_sequences, RawSequence};
pub use dance::{Dance, Dancer, UNTITLED};
pub use program::Program;
pub use sequence::Sequence;
