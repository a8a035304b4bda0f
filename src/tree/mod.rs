pub mod predict;
pub mod tree;

pub use predict::classify;
pub use tree::{build_tree, DecisionTree};
