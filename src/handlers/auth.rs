// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{LoginRequestDto, RegisterRequestDto},
};

// Handler de registro
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = app_state.auth_service.register(payload).await?;
    Ok((StatusCode::OK, Json(response)))
}

// Handler de login
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = app_state.auth_service.login(payload).await?;
    Ok((StatusCode::OK, Json(response)))
}
