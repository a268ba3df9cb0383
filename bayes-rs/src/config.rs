use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Path to the tab-separated training corpus
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::BayesError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::BayesError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            corpus: CorpusConfig {
                path: "SMSSpamCollection".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.corpus.path, "SMSSpamCollection");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/config.toml");
        assert!(matches!(
            result,
            Err(crate::error::BayesError::Config(_))
        ));
    }
}
