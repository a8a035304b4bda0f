//! Errors
//!
//! Custom error types used throughout the `id3forest` crate.
use thiserror::Error;

/// Errors that can occur while loading data, growing trees, or voting.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// No examples were provided where at least one is required.
    #[error("At least one labeled example is required, but none were provided.")]
    EmptyDataset,
    /// An example does not carry an attribute that is being split on.
    #[error("Attribute {0} is missing from the example at row {1}.")]
    MissingAttribute(String, usize),
    /// An example's attribute names differ from the first example's.
    #[error("Example at row {0} has attributes [{2}], expected [{1}].")]
    InconsistentSchema(usize, String, String),
    /// A forest vote was requested with no trees.
    #[error("Unable to vote with an empty forest.")]
    EmptyForest,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// A label column value could not be read as a boolean.
    #[error("Unable to parse label {0} at row {1}, expected true or false.")]
    ParseLabel(String, usize),
    /// Unable to read data or configuration.
    #[error("Unable to read from a source: {0}")]
    UnableToRead(String),
    /// Unable to write configuration.
    #[error("Unable to write to a destination: {0}")]
    UnableToWrite(String),
    /// The rayon thread pool could not be built.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}
