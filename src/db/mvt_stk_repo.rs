// src/db/mvt_stk_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::mvt_stk::{MvtStk, MvtStkRequestDto},
};

// O livro-razão de movimentações: só INSERT/SELECT no caminho normal; o
// update/delete existem apenas para correções administrativas.
#[derive(Clone)]
pub struct MvtStkRepository {
    pool: PgPool,
}

impl MvtStkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MvtStk>, AppError> {
        let mvt_stk = sqlx::query_as::<_, MvtStk>("SELECT * FROM mvts_stk WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(mvt_stk)
    }

    pub async fn find_all(&self) -> Result<Vec<MvtStk>, AppError> {
        let mvts = sqlx::query_as::<_, MvtStk>("SELECT * FROM mvts_stk ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(mvts)
    }

    pub async fn create(&self, dto: &MvtStkRequestDto) -> Result<MvtStk, AppError> {
        let mvt_stk = sqlx::query_as::<_, MvtStk>(
            r#"
            INSERT INTO mvts_stk (date_mvt, quantite, type_mvt, article_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dto.date_mvt)
        .bind(dto.quantite)
        .bind(dto.type_mvt)
        .bind(dto.article_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(mvt_stk)
    }

    pub async fn update(&self, id: i32, dto: &MvtStkRequestDto) -> Result<MvtStk, AppError> {
        let mvt_stk = sqlx::query_as::<_, MvtStk>(
            r#"
            UPDATE mvts_stk
            SET date_mvt = $2, quantite = $3, type_mvt = $4, article_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.date_mvt)
        .bind(dto.quantite)
        .bind(dto.type_mvt)
        .bind(dto.article_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(mvt_stk)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM mvts_stk WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
