use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{KeyValueStore, StorageError};

use super::SqliteRepository;

#[async_trait]
impl KeyValueStore for SqliteRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_entries WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.try_get::<String, _>("value")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
