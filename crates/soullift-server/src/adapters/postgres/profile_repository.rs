//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;

use soullift::{DomainError, Profile, ProfileRepository};

/// PostgreSQL implementation of ProfileRepository
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProfileRow {
    key: String,
    value: serde_json::Value,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            key: row.key,
            value: row.value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find(&self, key: &str) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, key: &str, value: serde_json::Value) -> Result<Profile, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(&value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
