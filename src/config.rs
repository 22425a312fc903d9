use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub const CATALOG_VAR: &str = "QUIZ_CATALOG";
pub const SEED_VAR: &str = "QUIZ_SEED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// JSON catalog replacing the embedded one.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for reproducible quizzes.
    pub seed: Option<u64>,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let seed = match lookup(SEED_VAR) {
            Some(value) if !value.trim().is_empty() => {
                Some(value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value: value.clone(),
                })?)
            }
            _ => None,
        };

        Ok(Self { catalog_path, seed })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn test_reads_catalog_and_seed() {
        let parsed = settings(&[(CATALOG_VAR, "questions.json"), (SEED_VAR, " 42 ")]).unwrap();
        assert_eq!(parsed.catalog_path, Some(PathBuf::from("questions.json")));
        assert_eq!(parsed.seed, Some(42));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let parsed = settings(&[(CATALOG_VAR, ""), (SEED_VAR, "  ")]).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_rejects_malformed_seed() {
        assert!(matches!(
            settings(&[(SEED_VAR, "tomorrow")]),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let parsed = settings(&[(SEED_VAR, "7")]).unwrap();
        let a: u64 = parsed.rng().gen();
        let b: u64 = parsed.rng().gen();
        assert_eq!(a, b);
    }
}
