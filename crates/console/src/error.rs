//! Unified error handling for the console.

use thiserror::Error;

use hotelier_core::BookingStatus;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::SessionError;

/// Application-level error type for the console.
///
/// Display text for the user-facing variants is what the notices show, so
/// those are worded for the operator.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session state could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// No user is logged in.
    #[error("Войдите в систему, чтобы продолжить")]
    NotAuthenticated,

    /// Login attempt rejected by the backend.
    #[error("Ошибка при входе в систему: {0}")]
    LoginFailed(String),

    /// The permission policy refused the action.
    #[error("{0}")]
    Forbidden(String),

    /// Input refused before it reached the backend.
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced entity is not in the cache.
    #[error("Не найдено: {0}")]
    NotFound(String),

    /// The booking lifecycle table refused the transition.
    #[error("Недопустимое действие для бронирования в статусе {status}")]
    InvalidTransition {
        /// The booking's current status.
        status: BookingStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_texts() {
        let err = AppError::Forbidden("Недостаточно прав для управления отелями".to_string());
        assert_eq!(err.to_string(), "Недостаточно прав для управления отелями");

        let err = AppError::InvalidTransition {
            status: BookingStatus::Cancelled,
        };
        assert_eq!(
            err.to_string(),
            "Недопустимое действие для бронирования в статусе cancelled"
        );

        let err = AppError::LoginFailed("HTTP 401: bad credentials".to_string());
        assert!(err.to_string().starts_with("Ошибка при входе в систему"));
    }

    #[test]
    fn test_api_error_passes_through() {
        let err = AppError::from(ApiError::Status {
            status: 422,
            message: "body.email: invalid email".to_string(),
        });
        assert_eq!(err.to_string(), "HTTP 422: body.email: invalid email");
    }
}
