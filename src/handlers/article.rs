// src/handlers/article.rs

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::{AppError, ErrorCode},
    config::AppState,
    models::article::ArticleRequestDto,
};

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::invalid_entity(
        ErrorCode::ArticleNotValid,
        "Requête multipart invalide",
        vec![e.to_string()],
    )
}

// Monta o DTO a partir dos campos de texto do form; a parte "image" só
// contribui com o nome do arquivo (o armazenamento do upload fica fora do
// escopo). Campos em falta ficam None e caem na validação do serviço.
async fn payload_from_multipart(mut multipart: Multipart) -> Result<ArticleRequestDto, AppError> {
    let mut dto = ArticleRequestDto::default();
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
            "codeArticle" => dto.code_article = Some(value),
            "designation" => dto.designation = Some(value),
            "prixUnitaireHt" => dto.prix_unitaire_ht = value.parse().ok(),
            "tauxTva" => dto.taux_tva = value.parse().ok(),
            "prixUnitaireTtc" => dto.prix_unitaire_ttc = value.parse().ok(),
            "categorieId" => dto.categorie_id = value.parse().ok(),
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
    let article = app_state.article_service.save(payload).await?;
    Ok((StatusCode::OK, Json(article)))
}

pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = app_state.article_service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(article)))
}

pub async fn find_by_code_article(
    State(app_state): State<AppState>,
    Path(code_article): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = app_state
        .article_service
        .find_by_code_article(&code_article)
        .await?;
    Ok((StatusCode::OK, Json(article)))
}

pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = app_state.article_service.find_all().await?;
    Ok((StatusCode::OK, Json(articles)))
}

pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.article_service.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload_from_multipart(multipart).await?;
    let article = app_state.article_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(article)))
}
