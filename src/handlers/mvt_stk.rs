// src/handlers/mvt_stk.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState, models::mvt_stk::MvtStkRequestDto};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<MvtStkRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let mvt_stk = app_state.mvt_stk_service.save(payload).await?;
    Ok((StatusCode::OK, Json(mvt_stk)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mvt_stk = app_state.mvt_stk_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(mvt_stk)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mvts = app_state.mvt_stk_service.find_all().await?;
    Ok((StatusCode::OK, Json(mvts)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.mvt_stk_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MvtStkRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let mvt_stk = app_state.mvt_stk_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(mvt_stk)))
}
