//! Sampler
//!
//! Strategies for sampling rows before growing each tree of a forest.
use rand::rngs::StdRng;
use rand::Rng;

// A sampler can be used to subset the data prior to fitting a new tree.
pub trait Sampler {
    /// Sample the data, returning a tuple, where the first item is the samples
    /// chosen for training, and the second are the samples excluded.
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>);
}

/// Keeps each row independently with probability `subsample`.
pub struct RandomSampler {
    subsample: f32,
}

impl RandomSampler {
    pub fn new(subsample: f32) -> Self {
        RandomSampler { subsample }
    }
}

impl Sampler for RandomSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let subsample = self.subsample;
        let mut chosen = Vec::new();
        let mut excluded = Vec::new();
        for i in index {
            if rng.gen::<f32>() < subsample {
                chosen.push(*i);
            } else {
                excluded.push(*i)
            }
        }
        (chosen, excluded)
    }
}

/// Draws `fraction * n` rows with replacement. Rows never drawn are the
/// out-of-bag rows.
pub struct BootstrapSampler {
    fraction: f32,
}

impl BootstrapSampler {
    pub fn new(fraction: f32) -> Self {
        BootstrapSampler { fraction }
    }
}

impl Sampler for BootstrapSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        if index.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let n_draws = ((index.len() as f32) * self.fraction).round().max(1.0) as usize;
        let mut drawn = vec![false; index.len()];
        let mut chosen = Vec::with_capacity(n_draws);
        for _ in 0..n_draws {
            let pos = rng.gen_range(0..index.len());
            drawn[pos] = true;
            chosen.push(index[pos]);
        }
        let excluded = index
            .iter()
            .zip(drawn)
            .filter(|(_, d)| !d)
            .map(|(i, _)| *i)
            .collect();
        (chosen, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_sampler() {
        let mut rng = StdRng::seed_from_u64(42);
        let index = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut sampler = RandomSampler::new(0.5);
        let (chosen, excluded) = sampler.sample(&mut rng, &index);
        assert_eq!(chosen.len() + excluded.len(), index.len());

        // Test with subsample 1.0 (all should be chosen)
        let mut sampler_all = RandomSampler::new(1.0);
        let (chosen_all, excluded_all) = sampler_all.sample(&mut rng, &index);
        assert_eq!(chosen_all.len(), index.len());
        assert!(excluded_all.is_empty());

        // Test with subsample 0.0 (none should be chosen)
        let mut sampler_none = RandomSampler::new(0.0);
        let (chosen_none, excluded_none) = sampler_none.sample(&mut rng, &index);
        assert!(chosen_none.is_empty());
        assert_eq!(excluded_none.len(), index.len());
    }

    #[test]
    fn test_bootstrap_sampler() {
        let mut rng = StdRng::seed_from_u64(0);
        let index: Vec<usize> = (10..30).collect();
        let mut sampler = BootstrapSampler::new(1.0);
        let (chosen, excluded) = sampler.sample(&mut rng, &index);
        assert_eq!(chosen.len(), index.len());
        assert!(chosen.iter().all(|i| index.contains(i)));
        assert!(excluded.iter().all(|i| !chosen.contains(i)));

        let (half, _) = BootstrapSampler::new(0.5).sample(&mut rng, &index);
        assert_eq!(half.len(), 10);

        let (tiny, _) = BootstrapSampler::new(0.01).sample(&mut rng, &index);
        assert_eq!(tiny.len(), 1);

        let (empty, out) = sampler.sample(&mut rng, &[]);
        assert!(empty.is_empty() && out.is_empty());
    }

    #[test]
    fn test_bootstrap_sampler_reproducible() {
        let index: Vec<usize> = (0..50).collect();
        let a = BootstrapSampler::new(1.0).sample(&mut StdRng::seed_from_u64(9), &index);
        let b = BootstrapSampler::new(1.0).sample(&mut StdRng::seed_from_u64(9), &index);
        assert_eq!(a, b);
    }
}
