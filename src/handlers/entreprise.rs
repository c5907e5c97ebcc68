// src/handlers/entreprise.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::AppError, config::AppState, models::entreprise::EntrepriseRequestDto,
};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<EntrepriseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let entreprise = app_state.entreprise_service.save(payload).await?;
    Ok((StatusCode::OK, Json(entreprise)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entreprise = app_state.entreprise_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(entreprise)))
}

pub async fn find_by_nom(
    State(app_state): State<AppState>,
    Path(nom): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entreprise = app_state.entreprise_service.find_by_nom(&nom).await?;
    Ok((StatusCode::OK, Json(entreprise)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entreprises = app_state.entreprise_service.find_all().await?;
    Ok((StatusCode::OK, Json(entreprises)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.entreprise_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EntrepriseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let entreprise = app_state.entreprise_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(entreprise)))
}
