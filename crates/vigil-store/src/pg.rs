//! PostgreSQL user provider

use async_trait::async_trait;
use sqlx::PgPool;

use vigil_types::UserId;

use crate::error::StoreResult;
use crate::hash;
use crate::models::{CreateUser, UserRow};
use crate::provider::UserProvider;

/// PostgreSQL-backed user provider
#[derive(Clone)]
pub struct PgUserProvider {
    pool: PgPool,
}

impl PgUserProvider {
    /// Create a new provider over a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user, hashing the supplied password
    pub async fn create(&self, user: CreateUser) -> StoreResult<UserRow> {
        let password_hash = hash::hash_password(&user.password)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, remember_token, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl UserProvider for PgUserProvider {
    type User = UserRow;

    async fn find_by_uid(&self, uid: &str) -> StoreResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, remember_token, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, remember_token, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_remember_token(&self, token: &str) -> StoreResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, remember_token, created_at, updated_at
            FROM users
            WHERE remember_token = $1
            "#,
        )
        .bind(hash::digest_token(token))
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn verify_password(&self, user: &UserRow, password: &str) -> StoreResult<bool> {
        Ok(hash::verify_password(&user.password_hash, password))
    }

    async fn save_remember_token(&self, user: &UserRow, token: &str) -> StoreResult<()> {
        sqlx::query("UPDATE users SET remember_token = $1, updated_at = NOW() WHERE id = $2")
            .bind(hash::digest_token(token))
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
