// public modules
pub mod config;
pub mod core;
pub mod predict;

// private modules
mod setters;

pub use self::config::{ConfigIO, ForestConfig, SampleMethod};
pub use self::core::Forest;
pub use self::predict::forest_classify;
