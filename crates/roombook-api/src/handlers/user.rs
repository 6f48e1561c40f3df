//! User management handlers: CRUD, suspension, and password resets.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use roombook_service::user::admin::{CreateUserInput, UpdateUserInput};

use crate::dto::request::{
    ConsumeResetRequest, CreateUserRequest, SuspendRequest, UpdateUserRequest, UserListQuery,
};
use crate::dto::response::{ApiResponse, MessageResponse, ResetTokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserListQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state
        .admin_user_service
        .list_users(&auth, query.role, query.is_suspended)
        .await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .admin_user_service
        .create_user(
            &auth,
            CreateUserInput {
                name: req.name,
                email: req.email,
                password: req.password,
                role: req.role,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin_user_service.get_user(&auth, id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .admin_user_service
        .update_user(
            &auth,
            id,
            UpdateUserInput {
                name: req.name,
                email: req.email,
                role: req.role,
                is_suspended: req.is_suspended,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete_user(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

/// PUT /api/users/{id}/suspend
pub async fn suspend_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SuspendRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .admin_user_service
        .set_suspended(&auth, id, req.is_suspended)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// POST /api/users/{id}/password-reset
pub async fn request_password_reset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResetTokenResponse>>, ApiError> {
    let token = state.reset_service.request_reset(&auth, id).await?;

    Ok(Json(ApiResponse::ok(ResetTokenResponse {
        token: token.token,
        expires_at: token.expires_at,
    })))
}

/// PUT /api/users/{id}/password-reset
///
/// Consumes a reset token. No session is required: possession of a token
/// issued for the path's user is the credential.
pub async fn consume_password_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConsumeResetRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .reset_service
        .consume_reset(id, &req.token, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated".to_string(),
    })))
}
