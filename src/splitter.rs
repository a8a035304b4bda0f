//! Splitter
//!
//! Selection of the attribute to split a node on.
use crate::data::LabeledExample;
use crate::errors::Id3Error;
use crate::partition::partition_entropy_by;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

/// The attribute chosen for a split, and the entropy of the partition it induces.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub attribute: String,
    pub entropy: f64,
}

pub trait Splitter {
    /// Choose the attribute to split `examples` on from `candidates`.
    /// Returns `None` only when there is no candidate to consider.
    fn best_split(&mut self, examples: &[&LabeledExample], candidates: &[String])
        -> Result<Option<SplitInfo>, Id3Error>;
}

/// Argmin of partition entropy. The first candidate reaching the minimum wins,
/// so the result depends on the iteration order of `candidates`.
fn min_entropy_split<'c, I>(examples: &[&LabeledExample], candidates: I) -> Result<Option<SplitInfo>, Id3Error>
where
    I: IntoIterator<Item = &'c String>,
{
    let mut best: Option<SplitInfo> = None;
    for attribute in candidates {
        let entropy = partition_entropy_by(examples, attribute)?;
        let improves = match &best {
            Some(b) => entropy < b.entropy,
            None => true,
        };
        if improves {
            best = Some(SplitInfo {
                attribute: attribute.clone(),
                entropy,
            });
        }
    }
    Ok(best)
}

/// Plain ID3: every remaining candidate is considered.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropySplitter;

impl Splitter for EntropySplitter {
    fn best_split(
        &mut self,
        examples: &[&LabeledExample],
        candidates: &[String],
    ) -> Result<Option<SplitInfo>, Id3Error> {
        min_entropy_split(examples, candidates)
    }
}

/// Considers a random subset of at most `max_candidates` attributes at every
/// split, keeping their original relative order. Used to decorrelate the
/// trees of a forest.
#[derive(Debug, Clone)]
pub struct RandomSubspaceSplitter {
    max_candidates: usize,
    rng: StdRng,
}

impl RandomSubspaceSplitter {
    pub fn new(max_candidates: usize, seed: u64) -> Self {
        RandomSubspaceSplitter {
            max_candidates: max_candidates.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Splitter for RandomSubspaceSplitter {
    fn best_split(
        &mut self,
        examples: &[&LabeledExample],
        candidates: &[String],
    ) -> Result<Option<SplitInfo>, Id3Error> {
        if candidates.len() <= self.max_candidates {
            return min_entropy_split(examples, candidates);
        }
        let mut chosen = sample(&mut self.rng, candidates.len(), self.max_candidates).into_vec();
        chosen.sort_unstable();
        min_entropy_split(examples, chosen.into_iter().map(|i| &candidates[i]))
    }
}
