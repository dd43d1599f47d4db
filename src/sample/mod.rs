//! Seeded random recitals for demos, tests, and benchmarks.

mod config;
mod generator;

pub use config::SampleConfig;
pub use generator::{generate, generate_with};
