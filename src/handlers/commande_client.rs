// src/handlers/commande_client.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::commande_client::{CommandeClientRequestDto, LigneCommandeClientRequestDto},
};

pub async fn save(
    State(app_state): State<AppState>,
    Json(payload): Json<CommandeClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state.commande_client_service.save(payload).await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state.commande_client_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn find_by_code(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .find_by_code(&code)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let commandes = app_state.commande_client_service.find_all().await?;
    Ok((StatusCode::OK, Json(commandes)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.commande_client_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CommandeClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .update(id, payload)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

// ---
// Operações sobre as lignes da commande
// ---

pub async fn add_ligne(
    State(app_state): State<AppState>,
    Path(commande_id): Path<i32>,
    Json(payload): Json<LigneCommandeClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .add_ligne(commande_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn update_ligne(
    State(app_state): State<AppState>,
    Path((commande_id, ligne_id)): Path<(i32, i32)>,
    Json(payload): Json<LigneCommandeClientRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .update_ligne(commande_id, ligne_id, payload)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn remove_ligne(
    State(app_state): State<AppState>,
    Path((commande_id, ligne_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .remove_ligne(commande_id, ligne_id)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn remove_all_lignes(
    State(app_state): State<AppState>,
    Path(commande_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let commande = app_state
        .commande_client_service
        .remove_all_lignes(commande_id)
        .await?;
    Ok((StatusCode::OK, Json(commande)))
}

pub async fn find_all_lignes(
    State(app_state): State<AppState>,
    Path(commande_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lignes = app_state
        .commande_client_service
        .find_all_lignes_by_commande_id(commande_id)
        .await?;
    Ok((StatusCode::OK, Json(lignes)))
}
