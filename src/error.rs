use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::i18n::LanguageError;
use crate::wizard::WizardInputError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed wizard input: {0}")]
    Wizard(#[from] WizardInputError),

    #[error("Unsupported language: {0}")]
    Language(#[from] LanguageError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Wizard(_) | AppError::Language(_) => {
                warn!("Rejected request: {}", self);
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => {
                error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
