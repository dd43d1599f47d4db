//! The recital text format and plain-text result rendering.
//!
//! These are thin shells around the core: parsing produces
//! [`RawSequence`](crate::model::RawSequence)s that go through
//! [`build_sequences`](crate::model::build_sequences), and rendering only
//! reads programs and reports.

mod format;
mod parse;

pub use format::{render_programs, render_sequences, render_summary};
pub use parse::{load_file, load_str, parse_line, parse_order_info, parse_str, OrderInfo};
