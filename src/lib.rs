//! Enumeration of recital programs.
//!
//! A recital is a collection of dance sequences. A program is one ordering
//! of all of them. Dancers need rest, so the overlap between the last dance
//! of a sequence and the first dance of the next one is budgeted, and
//! sequences may be pinned to a position or kept within a before/after
//! window. This crate lists every program that satisfies those rules.
//!
//! - **Model** ([`model`]): dancers, dances, sequences, programs, and the
//!   boundary overlap metric.
//! - **Evaluation** ([`eval`]): positional eligibility and overlap
//!   feasibility for the next position.
//! - **Search** ([`search`]): the exhaustive backtracking enumerator with
//!   optional node/time budgets and rayon parallelism.
//! - **Reporting** ([`report`]): the result set and its structured summary.
//! - **Text** ([`text`]): the line-oriented recital format and plain-text
//!   rendering of results.
//! - **Sample** ([`sample`]): seeded random recitals for demos and
//!   benchmarks.
//!
//! # Example
//!
//! ```
//! use u_recital::model::{build_sequences, Dance, RawSequence};
//! use u_recital::{report, solve};
//!
//! let raw = vec![
//!     RawSequence::new(vec![Dance::new(["a", "b"])]).with_order(1),
//!     RawSequence::new(vec![Dance::new(["b", "c"])]),
//!     RawSequence::new(vec![Dance::new(["c", "d"])]),
//! ];
//! let sequences = build_sequences(raw).unwrap();
//! // only "ab, cd, bc" keeps the total overlap at 1
//! let programs = solve(&sequences, 1);
//! let summary = report(&programs);
//! assert_eq!(summary.total, 1);
//! ```

pub mod error;
pub mod eval;
pub mod model;
pub mod report;
pub mod sample;
pub mod search;
pub mod text;

pub use error::{BuildError, ConfigError, LoadError, RenderError, ShapeError, ValidationError};
pub use model::build_sequences;
pub use report::report;
pub use search::solve;
