// src/handlers/vente.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState, models::vente::VenteRequestDto};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<VenteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let vente = app_state.vente_service.save(payload).await?;
    Ok((StatusCode::OK, Json(vente)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vente = app_state.vente_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(vente)))
}

pub async fn find_by_code(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vente = app_state.vente_service.find_by_code(&code).await?;
    Ok((StatusCode::OK, Json(vente)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ventes = app_state.vente_service.find_all().await?;
    Ok((StatusCode::OK, Json(ventes)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vente_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VenteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let vente = app_state.vente_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(vente)))
}
