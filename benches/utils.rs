#![allow(dead_code)]
use id3forest::{AttributeMap, Dataset, LabeledExample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Categorical data where the label is a noisy function of the first two attributes.
pub(crate) fn create_data(n_samples: usize, n_attributes: usize, n_levels: u32) -> Dataset {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    let examples = (0..n_samples)
        .map(|_| {
            let levels: Vec<u32> = (0..n_attributes).map(|_| rng.gen_range(0..n_levels)).collect();
            let signal = levels[0] % 2 == 0 || levels[1 % n_attributes] == 0;
            let label = if rng.gen::<f32>() < 0.1 { !signal } else { signal };
            let attributes: AttributeMap = levels
                .iter()
                .enumerate()
                .map(|(j, v)| (format!("a{}", j), format!("v{}", v)))
                .collect();
            LabeledExample::new(attributes, label)
        })
        .collect();
    Dataset::new(examples).expect("generated data is non-empty and consistent")
}
