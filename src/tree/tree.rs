use crate::constants::{DEFAULT_BRANCH_TIE, EXHAUSTED_CANDIDATES_TIE};
use crate::data::{AttributeValue, LabeledExample};
use crate::errors::Id3Error;
use crate::partition::partition_by;
use crate::splitter::{EntropySplitter, Splitter};
use hashbrown::HashMap;
use log::debug;
use std::borrow::Borrow;
use std::fmt::{self, Display};

/// A binary decision tree over categorical attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum DecisionTree {
    /// A prediction.
    Leaf(bool),
    /// A split on `attribute`, with one child per value observed in training
    /// and a `default` child for any other value (or a missing attribute).
    Split {
        attribute: String,
        children: HashMap<AttributeValue, DecisionTree>,
        default: Box<DecisionTree>,
    },
}

/// Grow a tree with plain ID3.
///
/// * `examples` - Labeled training examples, at least one.
/// * `split_candidates` - Attributes that may be split on. When `None`, every
///   attribute of the first example is a candidate, in that example's order.
pub fn build_tree<E: Borrow<LabeledExample>>(
    examples: &[E],
    split_candidates: Option<&[String]>,
) -> Result<DecisionTree, Id3Error> {
    DecisionTree::fit(examples, split_candidates, &mut EntropySplitter)
}

impl DecisionTree {
    /// Grow a tree, letting `splitter` choose the attribute at every node.
    pub fn fit<E: Borrow<LabeledExample>, T: Splitter>(
        examples: &[E],
        split_candidates: Option<&[String]>,
        splitter: &mut T,
    ) -> Result<Self, Id3Error> {
        let first = examples.first().ok_or(Id3Error::EmptyDataset)?;
        let candidates = match split_candidates {
            Some(c) => c.to_vec(),
            None => Borrow::<LabeledExample>::borrow(first).attributes.names().to_vec(),
        };
        let examples: Vec<&LabeledExample> = examples.iter().map(|e| e.borrow()).collect();
        grow(&examples, &candidates, splitter, 0)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionTree::Leaf(_))
    }

    /// The attribute this node splits on, if it is not a leaf.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Split { attribute, .. } => Some(attribute),
        }
    }

    /// Number of edges on the longest path to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Split { children, default, .. } => {
                1 + children.values().map(|c| c.depth()).fold(default.depth(), usize::max)
            }
        }
    }

    /// Number of leaves, default leaves included.
    pub fn n_leaves(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Split { children, default, .. } => {
                default.n_leaves() + children.values().map(|c| c.n_leaves()).sum::<usize>()
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Split { children, default, .. } => {
                1 + default.n_nodes() + children.values().map(|c| c.n_nodes()).sum::<usize>()
            }
        }
    }

    /// Number of splits made on each attribute.
    pub fn split_attributes(&self) -> HashMap<String, usize> {
        let mut stats = HashMap::new();
        self.count_splits(&mut stats);
        stats
    }

    fn count_splits(&self, stats: &mut HashMap<String, usize>) {
        if let DecisionTree::Split { attribute, children, .. } = self {
            *stats.entry(attribute.clone()).or_insert(0) += 1;
            children.values().for_each(|c| c.count_splits(stats));
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            DecisionTree::Leaf(v) => writeln!(f, "{}", v),
            DecisionTree::Split {
                attribute,
                children,
                default,
            } => {
                writeln!(f, "[{}]", attribute)?;
                let indent = "    ".repeat(depth + 1);
                let mut values: Vec<&AttributeValue> = children.keys().collect();
                values.sort();
                for value in values {
                    write!(f, "{}{} => ", indent, value)?;
                    children[value].fmt_node(f, depth + 1)?;
                }
                write!(f, "{}* => ", indent)?;
                default.fmt_node(f, depth + 1)
            }
        }
    }
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_node(f, 0)
    }
}

fn grow<T: Splitter>(
    examples: &[&LabeledExample],
    candidates: &[String],
    splitter: &mut T,
    depth: usize,
) -> Result<DecisionTree, Id3Error> {
    let num_true = examples.iter().filter(|e| e.label).count();
    let num_false = examples.len() - num_true;

    if num_true == 0 {
        return Ok(DecisionTree::Leaf(false));
    }
    if num_false == 0 {
        return Ok(DecisionTree::Leaf(true));
    }

    let first_label = examples[0].label;
    let majority_leaf = DecisionTree::Leaf(EXHAUSTED_CANDIDATES_TIE.majority(num_true, num_false, first_label));
    if candidates.is_empty() {
        return Ok(majority_leaf);
    }
    let split = match splitter.best_split(examples, candidates)? {
        Some(split) => split,
        None => return Ok(majority_leaf),
    };
    debug!(
        "depth {}: splitting {} examples on {} (entropy {:.4})",
        depth,
        examples.len(),
        split.attribute,
        split.entropy
    );

    let partition = partition_by(examples, &split.attribute)?;
    let remaining: Vec<String> = candidates
        .iter()
        .filter(|c| **c != split.attribute)
        .cloned()
        .collect();

    let mut children = HashMap::with_capacity(partition.len());
    for (value, subset) in partition {
        let child = grow(&subset, &remaining, splitter, depth + 1)?;
        children.insert(value, child);
    }
    let default = DecisionTree::Leaf(DEFAULT_BRANCH_TIE.majority(num_true, num_false, first_label));

    Ok(DecisionTree::Split {
        attribute: split.attribute,
        children,
        default: Box::new(default),
    })
}
