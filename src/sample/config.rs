//! Random recital configuration.

/// Shape of a randomly generated recital.
///
/// Each dance draws `dance_sizes[i]` distinct dancers from a roster of
/// `dancer_count`. Dances are then grouped, in order, into sequences of
/// `grouping[j]` dances each.
///
/// The default reproduces the built-in demo recital: 16 dancers, ten
/// dances, one sequence of three, one of two, and five singletons.
///
/// # Examples
///
/// ```
/// use u_recital::sample::SampleConfig;
///
/// let config = SampleConfig::default().with_seed(7);
/// assert_eq!(config.dance_sizes.len(), 10);
/// assert_eq!(config.grouping.iter().sum::<usize>(), 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    /// Size of the dancer roster.
    pub dancer_count: usize,
    /// Number of dancers in each dance.
    pub dance_sizes: Vec<usize>,
    /// Number of consecutive dances in each sequence.
    pub grouping: Vec<usize>,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            dancer_count: 16,
            dance_sizes: vec![3, 5, 2, 4, 7, 3, 1, 5, 6, 5],
            grouping: vec![3, 2, 1, 1, 1, 1, 1],
            seed: None,
        }
    }
}

impl SampleConfig {
    /// Sets the roster size.
    pub fn with_dancer_count(mut self, n: usize) -> Self {
        self.dancer_count = n;
        self
    }

    /// Sets the dance sizes and groups every dance into its own sequence.
    pub fn with_dance_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.grouping = vec![1; sizes.len()];
        self.dance_sizes = sizes;
        self
    }

    /// Sets how consecutive dances are grouped into sequences.
    pub fn with_grouping(mut self, grouping: Vec<usize>) -> Self {
        self.grouping = grouping;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.dancer_count == 0 {
            return Err("dancer_count must be at least 1".into());
        }
        if let Some(size) = self.dance_sizes.iter().find(|&&s| s > self.dancer_count) {
            return Err(format!(
                "dance size {size} exceeds dancer_count {}",
                self.dancer_count
            ));
        }
        if self.grouping.contains(&0) {
            return Err("every sequence needs at least one dance".into());
        }
        let grouped: usize = self.grouping.iter().sum();
        if grouped != self.dance_sizes.len() {
            return Err(format!(
                "grouping covers {grouped} dances but {} are configured",
                self.dance_sizes.len()
            ));
        }
        Ok(())
    }
}
