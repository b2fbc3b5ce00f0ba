//! API error handling
//!
//! Validation failures answer 400 with a fixed message. Operational
//! failures answer 500 with a generic message per operation; the cause is
//! logged and never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cad_core::error::CadError;
use serde::{Deserialize, Serialize};

/// Response messages
pub mod messages {
    pub const LIST_FAILED: &str = "Erro ao buscar usuários";
    pub const CREATE_FAILED: &str = "Erro ao criar usuário";
    pub const UPDATE_FAILED: &str = "Erro ao atualizar usuário";
    pub const DELETE_FAILED: &str = "Erro ao deletar usuário";
    pub const FIELDS_REQUIRED: &str = "Campos obrigatórios";
    pub const ID_REQUIRED: &str = "ID obrigatório";
    pub const INVALID_BODY: &str = "Corpo da requisição inválido";
    pub const INVALID_QUERY: &str = "Parâmetros de consulta inválidos";
}

/// API error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    /// Map a service error onto the response of one operation.
    ///
    /// `failure` is the message used for any operational error.
    pub fn from_service(err: CadError, failure: &'static str) -> Self {
        match err {
            CadError::Validation(errors) => {
                tracing::warn!(fields = ?errors.fields(), "rejected invalid input");
                if errors.has_error("id") {
                    ApiError::bad_request(messages::ID_REQUIRED)
                } else {
                    ApiError::bad_request(messages::FIELDS_REQUIRED)
                }
            }
            err if err.is_not_found() => {
                tracing::warn!(error = %err, "{failure}");
                ApiError::internal(failure)
            }
            err => {
                tracing::error!(error = %err, "{failure}");
                ApiError::internal(failure)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cad_core::error::ValidationErrors;

    fn validation(field: &str) -> CadError {
        let mut errors = ValidationErrors::new();
        errors.add(field, "can't be blank");
        CadError::Validation(errors)
    }

    #[test]
    fn test_id_errors_use_id_message() {
        let err = ApiError::from_service(validation("id"), messages::UPDATE_FAILED);
        assert_eq!(err, ApiError::BadRequest(messages::ID_REQUIRED.into()));
    }

    #[test]
    fn test_field_errors_use_fields_message() {
        let err = ApiError::from_service(validation("telefone"), messages::CREATE_FAILED);
        assert_eq!(err, ApiError::BadRequest(messages::FIELDS_REQUIRED.into()));
    }

    #[test]
    fn test_operational_errors_hide_cause() {
        let err = ApiError::from_service(
            CadError::Database("connection refused".into()),
            messages::LIST_FAILED,
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), messages::LIST_FAILED);

        let err = ApiError::from_service(
            CadError::NotFound { entity: "User", id: 4 },
            messages::DELETE_FAILED,
        );
        assert_eq!(err, ApiError::Internal(messages::DELETE_FAILED.into()));
    }
}
