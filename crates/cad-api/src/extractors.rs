//! Axum extractors for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use cad_db::{DynUserRepository, InMemoryUserRepository};
use serde::de::DeserializeOwned;

use crate::error::{messages, ApiError};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub users: DynUserRepository,
}

impl AppState {
    pub fn new(users: DynUserRepository) -> Self {
        Self { users }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}

/// JSON body extractor whose rejection is a 400 `{"error"}` response.
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(reason = %rejection.body_text(), "could not read request body");
            ApiError::bad_request(messages::INVALID_BODY)
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::warn!(error = %err, "rejected request body");
            ApiError::bad_request(messages::INVALID_BODY)
        })
    }
}

/// Query-string extractor whose rejection is a 400 `{"error"}` response
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "rejected query string");
                Err(ApiError::bad_request(messages::INVALID_QUERY))
            }
        }
    }
}
