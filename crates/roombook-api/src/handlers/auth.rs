//! Sign-in handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::SignInRequest;
use crate::dto::response::{ApiResponse, SignInResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<SignInResponse>>, ApiError> {
    let outcome = state.auth_service.sign_in(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(SignInResponse {
        user: UserResponse::from(outcome.user),
        token: outcome.token,
        expires_at: outcome.expires_at,
        redirect_to: outcome.redirect_to.to_string(),
    })))
}
