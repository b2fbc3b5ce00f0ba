//! Users API handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cad_contracts::users::{CreateUserInput, DeleteUserInput, UpdateUserInput};
use cad_models::User;
use cad_services::users::{
    CreateUserService, DeleteUserService, ListUsersService, UpdateUserService,
};
use cad_services::Callable;

use crate::error::{messages, ApiError, ApiResult};
use crate::extractors::{AppState, JsonBody, QueryParams};

/// List users
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = ListUsersService::new(state.users.as_ref())
        .call(())
        .await
        .map_err(|e| ApiError::from_service(e, messages::LIST_FAILED))?;

    Ok(Json(users))
}

/// Create a user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserInput>,
) -> ApiResult<impl IntoResponse> {
    let user = CreateUserService::new(state.users.as_ref())
        .call(body)
        .await
        .map_err(|e| ApiError::from_service(e, messages::CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user
///
/// PUT /api/users
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UpdateUserInput>,
) -> ApiResult<Json<User>> {
    let user = UpdateUserService::new(state.users.as_ref())
        .call(body)
        .await
        .map_err(|e| ApiError::from_service(e, messages::UPDATE_FAILED))?;

    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /api/users?id=<int>
pub async fn delete_user(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DeleteUserInput>,
) -> ApiResult<StatusCode> {
    DeleteUserService::new(state.users.as_ref())
        .call(params)
        .await
        .map_err(|e| ApiError::from_service(e, messages::DELETE_FAILED))?;

    Ok(StatusCode::NO_CONTENT)
}
