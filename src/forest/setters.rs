use crate::forest::config::SampleMethod;
use crate::forest::Forest;

impl Forest {
    // Set methods for parameters

    /// Set the number of trees on the forest.
    /// * `n_trees` - Number of trees grown by `fit`.
    pub fn set_n_trees(mut self, n_trees: usize) -> Self {
        self.cfg.n_trees = n_trees;
        self
    }

    /// Set the sample method on the forest.
    /// * `sample_method` - How rows are drawn for each tree.
    pub fn set_sample_method(mut self, sample_method: SampleMethod) -> Self {
        self.cfg.sample_method = sample_method;
        self
    }

    /// Set the sample fraction on the forest.
    /// * `sample_fraction` - Fraction of rows drawn or kept for each tree.
    pub fn set_sample_fraction(mut self, sample_fraction: f32) -> Self {
        self.cfg.sample_fraction = sample_fraction;
        self
    }

    /// Set the maximum number of split candidates on the forest.
    /// * `max_split_candidates` - Attributes considered at each split, `None` for all of them.
    pub fn set_max_split_candidates(mut self, max_split_candidates: Option<usize>) -> Self {
        self.cfg.max_split_candidates = max_split_candidates;
        self
    }

    /// Set the number of threads on the forest.
    /// * `num_threads` - Set the number of threads to be used during training.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    /// Set the seed on the forest.
    /// * `seed` - Integer value used to seed any randomness used in the algorithm.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set the log iterations on the forest.
    /// * `log_iterations` - Log progress every N trees.
    pub fn set_log_iterations(mut self, log_iterations: usize) -> Self {
        self.cfg.log_iterations = log_iterations;
        self
    }
}
