/// Configuration for a dataset generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random seed for the point stream
    pub seed: u64,

    /// Maximum rejection-sampling attempts per accepted cluster point.
    /// Exceeding this bound aborts the run with a `GenerationStalled` error
    /// instead of looping forever on degenerate geometry.
    pub max_attempts_per_point: usize,

    /// Sample clusters in parallel with rayon. Each cluster and the noise
    /// phase get an independent sub-stream derived from `seed`, so parallel
    /// runs are reproducible, but they produce a different point stream than
    /// the sequential reference. Output stays grouped in cluster-index order.
    pub parallel: bool,

    /// Print progress output during generation
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_attempts_per_point: 10_000,
            parallel: false,
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with the specified seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-point rejection-sampling attempt bound
    pub fn with_max_attempts_per_point(mut self, max_attempts: usize) -> Self {
        self.max_attempts_per_point = max_attempts;
        self
    }

    /// Enable or disable parallel per-cluster sampling
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
