//! Forest Configuration
//!
//! Configuration of a forest of ID3 trees: how many trees, how rows are
//! sampled for each of them, and how many attributes each split may consider.
use crate::constants::{DEFAULT_N_TREES, DEFAULT_SAMPLE_FRACTION};
use crate::errors::Id3Error;
use crate::utils::{items_to_strings, validate_fraction_parameter, validate_positive_parameter};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How training rows are drawn for each tree.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleMethod {
    /// Every tree sees every row.
    None,
    /// Rows drawn with replacement.
    Bootstrap,
    /// Each row kept independently with probability `sample_fraction`.
    Subsample,
}

impl FromStr for SampleMethod {
    type Err = Id3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(SampleMethod::None),
            "Bootstrap" => Ok(SampleMethod::Bootstrap),
            "Subsample" => Ok(SampleMethod::Subsample),
            _ => Err(Id3Error::ParseString(
                s.to_string(),
                "SampleMethod".to_string(),
                items_to_strings(vec!["None", "Bootstrap", "Subsample"]),
            )),
        }
    }
}

fn default_n_trees() -> usize {
    DEFAULT_N_TREES
}
fn default_sample_method() -> SampleMethod {
    SampleMethod::Bootstrap
}
fn default_sample_fraction() -> f32 {
    DEFAULT_SAMPLE_FRACTION
}

/// Configuration for a [`Forest`](crate::forest::Forest).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees to grow.
    #[serde(default = "default_n_trees")]
    pub n_trees: usize,
    /// Row sampling strategy.
    #[serde(default = "default_sample_method")]
    pub sample_method: SampleMethod,
    /// Fraction of rows drawn (bootstrap) or kept (subsample), in (0, 1].
    #[serde(default = "default_sample_fraction")]
    pub sample_fraction: f32,
    /// Maximum number of attributes considered at each split. `None` considers all of them.
    #[serde(default)]
    pub max_split_candidates: Option<usize>,
    /// Number of threads used to grow trees. `None` lets rayon decide.
    #[serde(default)]
    pub num_threads: Option<usize>,
    /// Seed for random number generation.
    #[serde(default)]
    pub seed: u64,
    /// Log progress every N trees, 0 to only log when fitting ends.
    #[serde(default)]
    pub log_iterations: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        ForestConfig {
            n_trees: DEFAULT_N_TREES,
            sample_method: SampleMethod::Bootstrap,
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            max_split_candidates: None,
            num_threads: None,
            seed: 0,
            log_iterations: 0,
        }
    }
}

impl ForestConfig {
    pub fn validate_parameters(&self) -> Result<(), Id3Error> {
        validate_positive_parameter(self.n_trees, "n_trees")?;
        validate_fraction_parameter(self.sample_fraction, "sample_fraction")?;
        if let Some(m) = self.max_split_candidates {
            validate_positive_parameter(m, "max_split_candidates")?;
        }
        if let Some(t) = self.num_threads {
            validate_positive_parameter(t, "num_threads")?;
        }
        Ok(())
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        fs::write(path, self.json_dump()?).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        serde_json::from_str::<Self>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for ForestConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_config_default() {
        let config = ForestConfig::default();
        assert_eq!(config.n_trees, 10);
        assert_eq!(config.sample_method, SampleMethod::Bootstrap);
        assert_eq!(config.sample_fraction, 1.0);
        assert_eq!(config.max_split_candidates, None);
        assert!(config.validate_parameters().is_ok());
    }

    #[test]
    fn test_forest_config_json() {
        let config = ForestConfig {
            n_trees: 25,
            max_split_candidates: Some(2),
            seed: 7,
            ..Default::default()
        };
        let json = config.json_dump().unwrap();
        let config2 = ForestConfig::from_json(&json).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_forest_config_json_defaults() {
        let config = ForestConfig::from_json(r#"{"n_trees": 3, "sample_method": "Subsample"}"#).unwrap();
        assert_eq!(config.n_trees, 3);
        assert_eq!(config.sample_method, SampleMethod::Subsample);
        assert_eq!(config.sample_fraction, 1.0);
        assert_eq!(config.seed, 0);

        assert!(matches!(
            ForestConfig::from_json(r#"{"n_trees": "many"}"#),
            Err(Id3Error::UnableToRead(_))
        ));
    }

    #[test]
    fn test_forest_config_file() {
        let file_path = std::env::temp_dir().join("id3forest_config_test.json");
        let config = ForestConfig {
            n_trees: 4,
            sample_fraction: 0.5,
            ..Default::default()
        };
        config.save_config(&file_path).unwrap();
        let config2 = ForestConfig::load_config(&file_path).unwrap();
        assert_eq!(config, config2);
        let _ = fs::remove_file(&file_path);
    }

    #[test]
    fn test_forest_config_validation() {
        let bad = [
            ForestConfig {
                n_trees: 0,
                ..Default::default()
            },
            ForestConfig {
                sample_fraction: 0.0,
                ..Default::default()
            },
            ForestConfig {
                sample_fraction: 1.5,
                ..Default::default()
            },
            ForestConfig {
                max_split_candidates: Some(0),
                ..Default::default()
            },
            ForestConfig {
                num_threads: Some(0),
                ..Default::default()
            },
        ];
        for config in bad.iter() {
            assert!(matches!(
                config.validate_parameters(),
                Err(Id3Error::InvalidParameter(_, _, _))
            ));
        }
    }

    #[test]
    fn test_sample_method_from_str() {
        assert_eq!("Bootstrap".parse::<SampleMethod>().unwrap(), SampleMethod::Bootstrap);
        assert_eq!("None".parse::<SampleMethod>().unwrap(), SampleMethod::None);
        assert!(matches!(
            "bagging".parse::<SampleMethod>(),
            Err(Id3Error::ParseString(_, _, _))
        ));
    }
}
