//! Scoring constants
//!
//! Five named weights drive the degeneracy penalty and the pairwise similarity score.
//! They are configuration: owned by the caller and never mutated during a game.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Scoring constants for similarity and degeneracy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Points for each letter two words share, regardless of position
    pub common_letter_weight: f64,
    /// Points for each position at which two words hold the same letter
    pub common_letter_same_index_weight: f64,
    /// Multiplier for one repeated pair (degeneracy 2)
    pub degeneracy_penalty_1: f64,
    /// Multiplier for two repeated pairs (degeneracy 4)
    pub degeneracy_penalty_2: f64,
    /// Multiplier for a letter occurring three or more times (degeneracy 6+)
    pub degeneracy_penalty_3: f64,
}

impl Default for Parameters {
    /// Constants found by tuning against the full allowed-guess list
    fn default() -> Self {
        Self {
            common_letter_weight: 1.0,
            common_letter_same_index_weight: 2.6556,
            degeneracy_penalty_1: 0.7489,
            degeneracy_penalty_2: 0.7177,
            degeneracy_penalty_3: 0.6007,
        }
    }
}

/// Error type for loading parameters
#[derive(Debug)]
pub enum ParameterError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str, f64),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read parameters: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse parameters: {e}"),
            Self::Invalid(name, value) => write!(f, "Invalid value for {name}: {value}"),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(..) => None,
        }
    }
}

impl From<std::io::Error> for ParameterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ParameterError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Parameters {
    /// Load parameters from a JSON file; all five constants are required
    ///
    /// # Errors
    /// Returns `ParameterError` if the file cannot be read, is not valid JSON,
    /// misses a constant, or holds an out-of-range value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate parameters from a JSON string
    ///
    /// # Errors
    /// Same as [`Parameters::load`], minus I/O.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::Parameters;
    ///
    /// let json = r#"{
    ///     "common_letter_weight": 1.0,
    ///     "common_letter_same_index_weight": 3.0,
    ///     "degeneracy_penalty_1": 0.9,
    ///     "degeneracy_penalty_2": 0.8,
    ///     "degeneracy_penalty_3": 0.7
    /// }"#;
    /// let params = Parameters::from_json(json).unwrap();
    /// assert_eq!(params.common_letter_same_index_weight, 3.0);
    ///
    /// assert!(Parameters::from_json(r#"{"common_letter_weight": 1.0}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ParameterError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()
    }

    /// Write parameters as pretty JSON
    ///
    /// # Errors
    /// Returns `ParameterError` if serialisation fails or the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ParameterError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Check that weights are finite and non-negative and penalties lie in `[0, 1]`
    ///
    /// # Errors
    /// Returns `ParameterError::Invalid` naming the first bad constant.
    pub fn validate(self) -> Result<Self, ParameterError> {
        let weights = [
            ("common_letter_weight", self.common_letter_weight),
            (
                "common_letter_same_index_weight",
                self.common_letter_same_index_weight,
            ),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::Invalid(name, value));
            }
        }

        let penalties = [
            ("degeneracy_penalty_1", self.degeneracy_penalty_1),
            ("degeneracy_penalty_2", self.degeneracy_penalty_2),
            ("degeneracy_penalty_3", self.degeneracy_penalty_3),
        ];
        for (name, value) in penalties {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParameterError::Invalid(name, value));
            }
        }

        Ok(self)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "common={:.4} same_index={:.4} penalties=[{:.4}, {:.4}, {:.4}]",
            self.common_letter_weight,
            self.common_letter_same_index_weight,
            self.degeneracy_penalty_1,
            self.degeneracy_penalty_2,
            self.degeneracy_penalty_3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");

        let params = Parameters {
            common_letter_same_index_weight: 3.25,
            ..Parameters::default()
        };
        params.save(&path).unwrap();

        assert_eq!(Parameters::load(&path).unwrap(), params);
    }

    #[test]
    fn missing_constant_is_rejected() {
        let json = r#"{
            "common_letter_weight": 1.0,
            "common_letter_same_index_weight": 3.0,
            "degeneracy_penalty_1": 0.9,
            "degeneracy_penalty_2": 0.8
        }"#;
        assert!(matches!(
            Parameters::from_json(json),
            Err(ParameterError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let bad_penalty = Parameters {
            degeneracy_penalty_2: 1.5,
            ..Parameters::default()
        };
        assert!(matches!(
            bad_penalty.validate(),
            Err(ParameterError::Invalid("degeneracy_penalty_2", _))
        ));

        let bad_weight = Parameters {
            common_letter_weight: f64::NAN,
            ..Parameters::default()
        };
        assert!(matches!(
            bad_weight.validate(),
            Err(ParameterError::Invalid("common_letter_weight", _))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Parameters::load("/nonexistent/params.json"),
            Err(ParameterError::Io(_))
        ));
    }
}
