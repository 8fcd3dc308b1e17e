use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Client-input failures of the signup operation. The display text is the
/// `detail` returned to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Already signed up for this activity")]
    AlreadySignedUp,
    #[error("Missing required query parameter: email")]
    MissingEmail,
    #[error("{0}")]
    InvalidRequest(String),
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            SignupError::MissingEmail | SignupError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("no fallback port above {0}")]
    NoFallbackPort(u16),
    #[error("could not bind {target}: {source}")]
    Bind {
        target: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            SignupError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SignupError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::MissingEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            SignupError::InvalidRequest("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn detail_messages_are_stable() {
        assert_eq!(SignupError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(
            SignupError::AlreadySignedUp.to_string(),
            "Already signed up for this activity"
        );
    }
}
