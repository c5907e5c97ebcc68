// src/handlers/utilisateur.rs

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::{AppError, ErrorCode},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::utilisateur::UtilisateurRequestDto,
};

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::invalid_entity(
        ErrorCode::UtilisateurNotValid,
        "Requête multipart invalide",
        vec![e.to_string()],
    )
}

async fn payload_from_multipart(
    mut multipart: Multipart,
) -> Result<UtilisateurRequestDto, AppError> {
    let mut dto = UtilisateurRequestDto::default();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };
        if name == "image" {
            dto.photo = field.file_name().map(|f| f.to_string());
            continue;
        }
        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "nom" => dto.nom = Some(value),
            "prenom" => dto.prenom = Some(value),
            "email" => dto.email = Some(value),
            "username" => dto.username = Some(value),
            "motDePasse" => dto.mot_de_passe = Some(value),
            // Formato YYYY-MM-DD
            "dateDeNaissance" => dto.date_de_naissance = value.parse().ok(),
            "adresse1" => dto.adresse1 = Some(value),
            "adresse2" => dto.adresse2 = Some(value),
            "ville" => dto.ville = Some(value),
            "codePostal" => dto.code_postal = Some(value),
            "pays" => dto.pays = Some(value),
            "entrepriseId" => dto.entreprise_id = value.parse().ok(),
            _ => {}
        }
    }
    Ok(dto)
}

pub async fn save(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload_from_multipart(multipart).await?;
    let utilisateur = app_state.utilisateur_service.save(payload).await?;
    Ok((StatusCode::OK, Json(utilisateur)))
}

// Handler da rota protegida /me
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthenticatedUser(utilisateur): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let dto = app_state
        .utilisateur_service
        .find_by_id(utilisateur.id)
        .await?;
    Ok((StatusCode::OK, Json(dto)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let utilisateur = app_state.utilisateur_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(utilisateur)))
}

pub async fn find_by_email(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let utilisateur = app_state.utilisateur_service.find_by_email(&email).await?;
    Ok((StatusCode::OK, Json(utilisateur)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let utilisateurs = app_state.utilisateur_service.find_all().await?;
    Ok((StatusCode::OK, Json(utilisateurs)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.utilisateur_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload_from_multipart(multipart).await?;
    let utilisateur = app_state.utilisateur_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(utilisateur)))
}
