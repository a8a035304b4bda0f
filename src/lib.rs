//! ID3 decision trees over categorical attributes.
//!
//! Trees are grown by recursively splitting labeled examples on the attribute
//! whose partition has the lowest entropy, and classify new inputs by walking
//! to a leaf. Several trees can vote as a [`Forest`].

// Modules
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod forest;
pub mod loader;
pub mod metric;
pub mod partition;
pub mod sampler;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use data::{AttributeMap, AttributeValue, Dataset, LabeledExample};
pub use entropy::{class_probabilities, data_entropy, entropy, partition_entropy};
pub use errors::Id3Error;
pub use forest::{forest_classify, Forest, ForestConfig};
pub use partition::{partition_by, partition_entropy_by, Partition};
pub use tree::{build_tree, classify, DecisionTree};
