//! Prediction Methods
//!
//! Majority-vote classification and attribute importance for forests.
use crate::constants::FOREST_TIE;
use crate::data::AttributeMap;
use crate::errors::Id3Error;
use crate::forest::Forest;
use crate::tree::DecisionTree;
use hashbrown::HashMap;
use rayon::prelude::*;

/// Classify `input` with every tree and return the most common answer.
///
/// An even split is settled in favour of the first tree's answer.
pub fn forest_classify(trees: &[DecisionTree], input: &AttributeMap) -> Result<bool, Id3Error> {
    let votes: Vec<bool> = trees.iter().map(|t| t.classify(input)).collect();
    let first = *votes.first().ok_or(Id3Error::EmptyForest)?;
    let num_true = votes.iter().filter(|v| **v).count();
    Ok(FOREST_TIE.majority(num_true, votes.len() - num_true, first))
}

impl Forest {
    /// Number of `true` and `false` votes cast for `input`.
    pub fn votes(&self, input: &AttributeMap) -> (usize, usize) {
        let num_true = self.trees.iter().filter(|t| t.classify(input)).count();
        (num_true, self.trees.len() - num_true)
    }

    /// Majority vote of the forest for `input`.
    pub fn classify(&self, input: &AttributeMap) -> Result<bool, Id3Error> {
        forest_classify(&self.trees, input)
    }

    /// Classify every input.
    /// * `parallel` - Classify with rayon when `true`.
    pub fn classify_batch(&self, inputs: &[AttributeMap], parallel: bool) -> Result<Vec<bool>, Id3Error> {
        if parallel {
            inputs.par_iter().map(|i| self.classify(i)).collect()
        } else {
            inputs.iter().map(|i| self.classify(i)).collect()
        }
    }

    /// Number of splits made on each attribute, across all trees.
    /// * `normalize` - Scale the counts so that they sum to one.
    pub fn attribute_importance(&self, normalize: bool) -> HashMap<String, f32> {
        let mut stats: HashMap<String, f32> = HashMap::new();
        for tree in &self.trees {
            for (attribute, n) in tree.split_attributes() {
                *stats.entry(attribute).or_insert(0.0) += n as f32;
            }
        }
        if normalize {
            let total: f32 = stats.values().sum();
            if total > 0.0 {
                stats.values_mut().for_each(|v| *v /= total);
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AttributeValue;

    fn stump(attribute: &str, value: &str, if_match: bool) -> DecisionTree {
        DecisionTree::Split {
            attribute: attribute.to_string(),
            children: HashMap::from([(AttributeValue::from(value), DecisionTree::Leaf(if_match))]),
            default: Box::new(DecisionTree::Leaf(!if_match)),
        }
    }

    #[test]
    fn test_forest_classify_majority() {
        let input = AttributeMap::new();
        let trees = vec![DecisionTree::Leaf(true), DecisionTree::Leaf(true), DecisionTree::Leaf(false)];
        assert!(forest_classify(&trees, &input).unwrap());

        let trees = vec![DecisionTree::Leaf(false), DecisionTree::Leaf(true), DecisionTree::Leaf(false)];
        assert!(!forest_classify(&trees, &input).unwrap());
    }

    #[test]
    fn test_forest_classify_tie_prefers_first_tree() {
        let input = AttributeMap::new();
        let trees = vec![DecisionTree::Leaf(true), DecisionTree::Leaf(false)];
        assert!(forest_classify(&trees, &input).unwrap());

        let trees = vec![DecisionTree::Leaf(false), DecisionTree::Leaf(true)];
        assert!(!forest_classify(&trees, &input).unwrap());
    }

    #[test]
    fn test_forest_classify_empty() {
        assert!(matches!(
            forest_classify(&[], &AttributeMap::new()),
            Err(Id3Error::EmptyForest)
        ));
        let forest = Forest::default();
        assert!(matches!(forest.classify(&AttributeMap::new()), Err(Id3Error::EmptyForest)));
    }

    #[test]
    fn test_forest_votes_and_batch() {
        let forest = Forest::from_trees(vec![
            stump("color", "red", true),
            stump("size", "big", true),
            stump("color", "blue", false),
        ]);
        assert_eq!(forest.cfg.n_trees, 3);

        let red_small = AttributeMap::new().with("color", "red").with("size", "small");
        let blue_big = AttributeMap::new().with("color", "blue").with("size", "big");
        assert_eq!(forest.votes(&red_small), (2, 1));
        assert_eq!(forest.votes(&blue_big), (1, 2));
        assert!(forest.classify(&red_small).unwrap());
        assert!(!forest.classify(&blue_big).unwrap());

        let inputs = vec![red_small, blue_big];
        assert_eq!(forest.classify_batch(&inputs, false).unwrap(), vec![true, false]);
        assert_eq!(forest.classify_batch(&inputs, true).unwrap(), vec![true, false]);
    }

    #[test]
    fn test_attribute_importance() {
        let forest = Forest::from_trees(vec![
            stump("color", "red", true),
            stump("size", "big", true),
            stump("color", "blue", false),
            DecisionTree::Leaf(true),
        ]);
        let counts = forest.attribute_importance(false);
        assert_eq!(counts["color"], 2.0);
        assert_eq!(counts["size"], 1.0);

        let normalized = forest.attribute_importance(true);
        let total: f32 = normalized.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(normalized["color"] > normalized["size"]);

        assert!(Forest::default().attribute_importance(true).is_empty());
    }
}
