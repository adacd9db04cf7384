use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use watchflow_core::{ErrorBody, RankError};

/// HTTP rendering of a [`RankError`].
#[derive(Debug)]
pub struct ApiError(pub RankError);

impl From<RankError> for ApiError {
    fn from(e: RankError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self.0 {
            RankError::Validation => (StatusCode::BAD_REQUEST, "username required", None),
            RankError::Upstream { detail } => (StatusCode::BAD_GATEWAY, "AniList error", Some(detail)),
            RankError::Unexpected(msg) => {
                tracing::error!(error = %msg, "unexpected ranking failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error", Some(msg))
            }
        };

        let body = Json(ErrorBody {
            error: error.to_string(),
            detail,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (RankError::Validation, StatusCode::BAD_REQUEST),
            (
                RankError::Upstream {
                    detail: "rate limited".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                RankError::Unexpected("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
