//! Entropy
//!
//! Shannon entropy of boolean label distributions, and of a partitioning of
//! labeled examples into subsets.
use crate::data::LabeledExample;
use std::borrow::Borrow;

/// Given class probabilities, compute `Σ -p·log2(p)`.
///
/// Zero probabilities contribute nothing (`0·log2(0) = 0`). The input is not
/// checked to sum to one.
pub fn entropy(probabilities: &[f64]) -> f64 {
    probabilities
        .iter()
        .filter(|p| **p != 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Relative frequency of each distinct label present, in first-seen order.
pub fn class_probabilities(labels: &[bool]) -> Vec<f64> {
    let total_count = labels.len() as f64;
    let mut counts: Vec<(bool, usize)> = Vec::with_capacity(2);
    for label in labels {
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, c)) => *c += 1,
            None => counts.push((*label, 1)),
        }
    }
    counts.into_iter().map(|(_, c)| c as f64 / total_count).collect()
}

/// Entropy of the label distribution of `examples`.
///
/// An empty slice has no distribution; it evaluates to `0.0` here, but
/// callers should not rely on that.
pub fn data_entropy<E: Borrow<LabeledExample>>(examples: &[E]) -> f64 {
    let labels: Vec<bool> = examples.iter().map(|e| Borrow::<LabeledExample>::borrow(e).label).collect();
    entropy(&class_probabilities(&labels))
}

/// Entropy of a partition: the size-weighted average of each subset's
/// [`data_entropy`].
pub fn partition_entropy<'s, E, I>(subsets: I) -> f64
where
    E: Borrow<LabeledExample> + 's,
    I: IntoIterator<Item = &'s [E]>,
{
    let subsets: Vec<&[E]> = subsets.into_iter().collect();
    let total_count: usize = subsets.iter().map(|s| s.len()).sum();
    subsets
        .iter()
        .map(|s| data_entropy(s) * s.len() as f64 / total_count as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AttributeMap;
    use crate::utils::precision_round;

    fn labeled(labels: &[bool]) -> Vec<LabeledExample> {
        labels
            .iter()
            .map(|l| LabeledExample::new(AttributeMap::new().with("a", "x"), *l))
            .collect()
    }

    #[test]
    fn test_entropy() {
        assert_eq!(entropy(&[1.0]), 0.0);
        assert_eq!(entropy(&[0.5, 0.5]), 1.0);
        assert_eq!(entropy(&[0.0, 1.0]), 0.0);
        // -0.75*log2(0.75) - 0.25*log2(0.25) = 0.81127812
        assert_eq!(precision_round(entropy(&[0.75, 0.25]), 5), 0.81128);
    }

    #[test]
    fn test_class_probabilities() {
        assert_eq!(class_probabilities(&[true, true, true]), vec![1.0]);
        assert_eq!(class_probabilities(&[false, true, true, true]), vec![0.25, 0.75]);
        assert!(class_probabilities(&[]).is_empty());

        let p = class_probabilities(&[true, false, false, true, false]);
        assert_eq!(p.len(), 2);
        assert_eq!(precision_round(p.iter().sum::<f64>(), 10), 1.0);
    }

    #[test]
    fn test_entropy_of_labels_bounds() {
        let pure = [false; 6];
        assert_eq!(entropy(&class_probabilities(&pure)), 0.0);
        let even = [true, false, true, false];
        assert_eq!(entropy(&class_probabilities(&even)), 1.0);
        let skewed = [true, false, false, false];
        let h = entropy(&class_probabilities(&skewed));
        assert!(h > 0.0 && h < 1.0);
    }

    #[test]
    fn test_data_entropy() {
        assert_eq!(data_entropy(&labeled(&[true, true])), 0.0);
        assert_eq!(data_entropy(&labeled(&[true, false])), 1.0);

        let owned = labeled(&[true, false, false, false]);
        let borrowed: Vec<&LabeledExample> = owned.iter().collect();
        assert_eq!(data_entropy(&owned), data_entropy(&borrowed));
    }

    #[test]
    fn test_partition_entropy() {
        let a = labeled(&[true, false, true, true]);
        assert_eq!(partition_entropy([a.as_slice()]), data_entropy(&a));

        let pure_true = labeled(&[true, true]);
        let pure_false = labeled(&[false, false, false]);
        assert_eq!(partition_entropy([pure_true.as_slice(), pure_false.as_slice()]), 0.0);

        // Half the examples in a pure subset, half in a 50/50 subset.
        let mixed = labeled(&[true, false]);
        assert_eq!(partition_entropy([pure_true.as_slice(), mixed.as_slice()]), 0.5);
    }
}
