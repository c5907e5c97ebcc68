// src/handlers/categorie.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState, models::categorie::CategorieRequestDto};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<CategorieRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let categorie = app_state.categorie_service.save(payload).await?;
    Ok((StatusCode::OK, Json(categorie)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let categorie = app_state.categorie_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(categorie)))
}

pub async fn find_by_code(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let categorie = app_state.categorie_service.find_by_code(&code).await?;
    Ok((StatusCode::OK, Json(categorie)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = app_state.categorie_service.find_all().await?;
    Ok((StatusCode::OK, Json(categories)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.categorie_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategorieRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let categorie = app_state.categorie_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(categorie)))
}
