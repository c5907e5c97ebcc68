// src/db/roles_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::utilisateur::{Role, Roles},
};

#[derive(Clone)]
pub struct RolesRepository {
    pool: PgPool,
}

impl RolesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Roles>, AppError> {
        let roles = sqlx::query_as::<_, Roles>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(roles)
    }

    pub async fn find_by_role_name(&self, role_name: Role) -> Result<Option<Roles>, AppError> {
        let roles = sqlx::query_as::<_, Roles>("SELECT * FROM roles WHERE role_name = $1")
            .bind(role_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(roles)
    }

    pub async fn find_all(&self) -> Result<Vec<Roles>, AppError> {
        let roles = sqlx::query_as::<_, Roles>("SELECT * FROM roles ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    pub async fn find_all_by_utilisateur_id(
        &self,
        utilisateur_id: i32,
    ) -> Result<Vec<Roles>, AppError> {
        let roles =
            sqlx::query_as::<_, Roles>("SELECT * FROM roles WHERE utilisateur_id = $1 ORDER BY id ASC")
                .bind(utilisateur_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(roles)
    }

    // Executor genérico: o registro cria o utilisateur e o seu role na mesma
    // transação.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        role_name: Role,
        utilisateur_id: i32,
        entreprise_id: Option<i32>,
    ) -> Result<Roles, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let roles = sqlx::query_as::<_, Roles>(
            r#"
            INSERT INTO roles (role_name, utilisateur_id, entreprise_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(role_name)
        .bind(utilisateur_id)
        .bind(entreprise_id)
        .fetch_one(executor)
        .await?;
        Ok(roles)
    }

    pub async fn update(
        &self,
        id: i32,
        role_name: Role,
        utilisateur_id: i32,
        entreprise_id: Option<i32>,
    ) -> Result<Roles, AppError> {
        let roles = sqlx::query_as::<_, Roles>(
            r#"
            UPDATE roles
            SET role_name = $2, utilisateur_id = $3, entreprise_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(role_name)
        .bind(utilisateur_id)
        .bind(entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(roles)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
