use crate::errors::Id3Error;
use std::cmp::Ordering;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// How a majority vote settles an even split.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TieBreak {
    /// A tie predicts `true`.
    PreferTrue,
    /// A tie predicts `false`.
    PreferFalse,
    /// A tie predicts whatever the first vote was.
    PreferFirst,
}

impl TieBreak {
    /// Majority of `num_true` against `num_false`.
    /// `first` is the first vote cast, and is only consulted by `PreferFirst`.
    pub fn majority(self, num_true: usize, num_false: usize, first: bool) -> bool {
        match num_true.cmp(&num_false) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self {
                TieBreak::PreferTrue => true,
                TieBreak::PreferFalse => false,
                TieBreak::PreferFirst => first,
            },
        }
    }
}

// Validation
pub fn validate_fraction_parameter(value: f32, parameter: &str) -> Result<(), Id3Error> {
    if value.is_nan() || value <= 0.0 || value > 1.0 {
        Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "real value within range (0, 1]".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_positive_parameter(value: usize, parameter: &str) -> Result<(), Id3Error> {
    if value == 0 {
        Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "a positive integer".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
