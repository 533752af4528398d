use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the binaries. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: CrawlError = ConfigError::ZeroTickRate.into();
        assert!(matches!(err, CrawlError::Config(ConfigError::ZeroTickRate)));
        assert_eq!(
            err.to_string(),
            "configuration error: tick rate must be greater than zero"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CrawlError = match parse {
            Err(e) => e.into(),
            Ok(_) => panic!("malformed JSON parsed"),
        };
        assert!(matches!(err, CrawlError::Json(_)));
    }
}
