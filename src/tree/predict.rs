//! Tree Prediction Methods
//!
//! Classification of attribute maps with a single tree.
use super::tree::DecisionTree;
use crate::data::AttributeMap;
use rayon::prelude::*;

impl DecisionTree {
    /// Walk from the root to a leaf.
    ///
    /// At every split the child matching the input's value is taken; an
    /// unseen value, or an input without the attribute, takes the default child.
    pub fn classify(&self, input: &AttributeMap) -> bool {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf(v) => return *v,
                DecisionTree::Split {
                    attribute,
                    children,
                    default,
                } => {
                    node = input
                        .get(attribute)
                        .and_then(|v| children.get(v))
                        .unwrap_or(default.as_ref());
                }
            }
        }
    }

    /// Classify every input.
    /// * `parallel` - Classify with rayon when `true`.
    pub fn classify_batch(&self, inputs: &[AttributeMap], parallel: bool) -> Vec<bool> {
        if parallel {
            inputs.par_iter().map(|i| self.classify(i)).collect()
        } else {
            inputs.iter().map(|i| self.classify(i)).collect()
        }
    }
}

/// Classify `input` with `tree`.
pub fn classify(tree: &DecisionTree, input: &AttributeMap) -> bool {
    tree.classify(input)
}
