//! Program search configuration.

/// Configuration for the backtracking program search.
///
/// The overlap budget is a plain value carried here and threaded through
/// every feasibility check; nothing about a search lives in global state.
///
/// # Examples
///
/// ```
/// use u_recital::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_overlap(2)
///     .with_node_limit(1_000_000)
///     .with_time_limit_ms(5_000);
/// assert_eq!(config.max_overlap, 2);
/// assert!(config.enforce_exact_order);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum total overlap allowed across all adjacent sequence pairs.
    pub max_overlap: usize,

    /// Whether exact-order pins restrict eligibility.
    ///
    /// When `false`, pins are ignored during the search (before/after
    /// windows still apply) and the results can be partitioned afterwards
    /// with [`Program::respects_ordering`](crate::model::Program::respects_ordering).
    pub enforce_exact_order: bool,

    /// Maximum number of search nodes to visit.
    ///
    /// `None` disables the node budget (the default).
    pub node_limit: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked on entry to every search node. `None` disables time-based
    /// termination (the default).
    pub time_limit_ms: Option<u64>,

    /// Whether to explore first-level branches in parallel using rayon.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    /// Output order is identical to the sequential search.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_overlap: 0,
            enforce_exact_order: true,
            node_limit: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the overlap budget.
    pub fn with_max_overlap(mut self, max_overlap: usize) -> Self {
        self.max_overlap = max_overlap;
        self
    }

    /// Enables or disables exact-order pins.
    pub fn with_exact_order(mut self, enforce: bool) -> Self {
        self.enforce_exact_order = enforce;
        self
    }

    /// Sets the node budget.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel exploration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.node_limit == Some(0) {
            return Err("node_limit must be positive or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
