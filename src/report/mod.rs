//! Result handling: the collected programs and their summary.
//!
//! - [`ResultSet`]: programs in emission order, with 1-based index
//!   assignment and a split by exact-order compliance
//! - [`report`]: a structured [`Report`] for external formatters

mod result_set;
mod summary;

pub use result_set::ResultSet;
pub use summary::{report, ProgramSummary, Report};
