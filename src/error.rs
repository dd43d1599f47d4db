//! Error types for sequence construction, validation, and loading.

use thiserror::Error;

/// A sequence was constructed without any dances.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("each sequence must contain at least one dance")]
pub struct ShapeError;

/// The specific positional rule a sequence violates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// `order` combined with `before` or `after` on the same sequence.
    #[error("an exact order cannot be combined with before/after constraints")]
    OrderWithWindow,

    /// `order` outside `1..=n`.
    #[error("order {order} is outside 1..={count}")]
    OrderOutOfRange { order: usize, count: usize },

    /// Nothing can be placed before position 1.
    #[error("before {before} leaves no position (must be at least 2)")]
    BeforeTooSmall { before: usize },

    /// `after` outside `1..=n-1`.
    #[error("after {after} is outside 1..={max}")]
    AfterOutOfRange { after: usize, max: usize },

    /// No position lies strictly between `after` and `before`.
    #[error("no position lies strictly between after {after} and before {before}")]
    EmptyWindow { after: usize, before: usize },
}

/// A sequence carries an infeasible combination of positional constraints.
///
/// `sequence` is the 1-based position of the offending sequence in the
/// input list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("sequence {sequence}: {kind}")]
pub struct ValidationError {
    pub sequence: usize,
    pub kind: ValidationKind,
}

/// Failure while turning raw sequence descriptions into validated sequences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("sequence {sequence}: {source}")]
    Shape {
        sequence: usize,
        #[source]
        source: ShapeError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Appending a sequence would push a program over its overlap budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("dancers must rest: overlap {attempted} exceeds the maximum of {max_overlap}")]
pub struct OverlapExceeded {
    pub attempted: usize,
    pub max_overlap: usize,
}

/// A search configuration failed [`SearchConfig::validate`](crate::search::SearchConfig::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid search configuration: {0}")]
pub struct ConfigError(pub String);

/// A line of the text format could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// A sequence holds a value the recital text format cannot represent.
///
/// `sequence` is the 1-based position of the offending sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("sequence {sequence}: title {title:?} cannot be written in the text format")]
    Title { sequence: usize, title: String },

    #[error("sequence {sequence}: dancer {name:?} cannot be written in the text format")]
    Dancer { sequence: usize, name: String },
}

/// Failure while loading a recital description file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
