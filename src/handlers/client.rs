// src/handlers/client.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState, models::client::ClientRequestDto};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.save(payload).await?;
    Ok((StatusCode::OK, Json(client)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(client)))
}

pub async fn find_by_nom(
    State(app_state): State<AppState>,
    Path(nom): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.find_by_nom(&nom).await?;
    Ok((StatusCode::OK, Json(client)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.client_service.find_all().await?;
    Ok((StatusCode::OK, Json(clients)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(client)))
}
