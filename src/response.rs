use std::{error::Error, fmt::Debug};

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::{auth::jwt::TokenError, utils::{error_fmt_chain, DbError}};

/// Uniform `{success, message, data}` body returned by every endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T>{
    pub success: bool,
    pub message: String,
    pub data: Option<T>
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data)
        }
    }

    pub fn ok(message: impl Into<String>, data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(message, data))
    }

    pub fn created(message: impl Into<String>, data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::success(message, data))
    }
}

impl ApiResponse<()> {
    pub fn empty(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()>{
            success: true,
            message: message.into(),
            data: None
        })
    }
}

#[derive(Serialize)]
struct ErrorBody{
    success: bool,
    message: String
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(thiserror::Error)]
pub enum ApiError{
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error)
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        tracing::error!("{:?}", e);
        ApiError::Internal(e.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Signing(_) => ApiError::Internal(e.into()),
            _ => ApiError::unauthorized(e.to_string())
        }
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(e: JsonPayloadError) -> Self {
        match e {
            // EOF before the first character means nothing was sent at all
            JsonPayloadError::Deserialize(ref err) if err.is_eof() && err.line() == 1 && err.column() == 0 => {
                ApiError::bad_request("request body is empty")
            },
            JsonPayloadError::ContentType => {
                ApiError::bad_request("expected a JSON request body")
            },
            other => ApiError::bad_request(other.to_string())
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorBody{
            success: false,
            message: self.to_string()
        })
    }
}
