// src/handlers/roles.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState, models::utilisateur::RolesRequestDto};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<RolesRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = app_state.roles_service.save(payload).await?;
    Ok((StatusCode::OK, Json(role)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role = app_state.roles_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(role)))
}

pub async fn find_by_role_name(
    State(app_state): State<AppState>,
    Path(role_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let role = app_state.roles_service.find_by_role_name(&role_name).await?;
    Ok((StatusCode::OK, Json(role)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = app_state.roles_service.find_all().await?;
    Ok((StatusCode::OK, Json(roles)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.roles_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RolesRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = app_state.roles_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(role)))
}
