use thiserror::Error;

use watchflow_api::AniListError;

/// Failure of a ranking request.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("username required")]
    Validation,

    /// Upstream unreachable or non-success. `detail` is the raw body.
    #[error("AniList error")]
    Upstream { detail: String },

    #[error("server error: {0}")]
    Unexpected(String),
}

impl From<AniListError> for RankError {
    fn from(e: AniListError) -> Self {
        match e {
            AniListError::Http(e) => RankError::Upstream {
                detail: e.to_string(),
            },
            AniListError::Api { message, .. } => RankError::Upstream { detail: message },
            AniListError::Parse(msg) => RankError::Unexpected(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_raw_body() {
        let err: RankError = AniListError::Api {
            status: 429,
            message: "rate limited".into(),
        }
        .into();
        match err {
            RankError::Upstream { detail } => assert_eq!(detail, "rate limited"),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_is_unexpected() {
        let err: RankError = AniListError::Parse("expected value".into()).into();
        assert!(matches!(err, RankError::Unexpected(ref m) if m == "expected value"));
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(RankError::Validation.to_string(), "username required");
    }
}
