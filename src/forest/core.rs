use crate::data::{Dataset, LabeledExample};
use crate::errors::Id3Error;
use crate::forest::config::{ForestConfig, SampleMethod};
use crate::sampler::{BootstrapSampler, RandomSampler, Sampler};
use crate::splitter::{EntropySplitter, RandomSubspaceSplitter};
use crate::tree::DecisionTree;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// A forest of independently grown ID3 trees, classifying by majority vote.
#[derive(Clone, Debug, Default)]
pub struct Forest {
    pub cfg: ForestConfig,
    pub trees: Vec<DecisionTree>,
}

impl Forest {
    /// Forest object
    ///
    /// * `cfg` - Forest configuration, validated here.
    pub fn new(cfg: ForestConfig) -> Result<Self, Id3Error> {
        cfg.validate_parameters()?;
        Ok(Forest { cfg, trees: Vec::new() })
    }

    /// Wrap trees that were grown elsewhere, to vote with them.
    pub fn from_trees(trees: Vec<DecisionTree>) -> Self {
        Forest {
            cfg: ForestConfig {
                n_trees: trees.len(),
                ..Default::default()
            },
            trees,
        }
    }

    /// Grow `n_trees` trees on `dataset`, replacing any trees already held.
    ///
    /// Tree `i` draws its randomness from `seed + i`, so the result does not
    /// depend on how trees are scheduled across threads.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<(), Id3Error> {
        self.cfg.validate_parameters()?;
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.cfg.num_threads.unwrap_or(0))
            .build()
            .map_err(|e| Id3Error::ThreadPool(e.to_string()))?;

        let cfg = &self.cfg;
        let trees = pool.install(|| {
            (0..cfg.n_trees)
                .into_par_iter()
                .map(|i| fit_tree(cfg, dataset, i))
                .collect::<Result<Vec<DecisionTree>, Id3Error>>()
        })?;
        self.trees = trees;

        info!(
            "Finished growing a forest with {0} trees on {1} examples in {2} seconds.",
            self.trees.len(),
            dataset.len(),
            start.elapsed().as_secs_f32()
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        self.trees.clear();
    }
}

fn fit_tree(cfg: &ForestConfig, dataset: &Dataset, i: usize) -> Result<DecisionTree, Id3Error> {
    let mut rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(i as u64));
    let index: Vec<usize> = (0..dataset.len()).collect();

    let (mut chosen, excluded) = match cfg.sample_method {
        SampleMethod::None => (index.clone(), Vec::new()),
        SampleMethod::Bootstrap => BootstrapSampler::new(cfg.sample_fraction).sample(&mut rng, &index),
        SampleMethod::Subsample => RandomSampler::new(cfg.sample_fraction).sample(&mut rng, &index),
    };
    if chosen.is_empty() {
        warn!("Tree {} sampled no rows, growing it on the full dataset instead.", i);
        chosen = index;
    }
    debug!("tree {}: {} in-bag rows, {} out-of-bag rows", i, chosen.len(), excluded.len());

    let examples: Vec<&LabeledExample> = chosen.iter().map(|r| &dataset.examples()[*r]).collect();
    let candidates = Some(dataset.attribute_names());
    let tree = match cfg.max_split_candidates {
        Some(max_candidates) => {
            let mut splitter = RandomSubspaceSplitter::new(max_candidates, rng.gen());
            DecisionTree::fit(&examples, candidates, &mut splitter)?
        }
        None => DecisionTree::fit(&examples, candidates, &mut EntropySplitter)?,
    };

    if cfg.log_iterations > 0 && (i + 1) % cfg.log_iterations == 0 {
        info!(
            "tree {:0?}, nodes: {:1?}, depth: {:2?}, leaves: {:3?}",
            i,
            tree.n_nodes(),
            tree.depth(),
            tree.n_leaves()
        );
    }
    Ok(tree)
}
