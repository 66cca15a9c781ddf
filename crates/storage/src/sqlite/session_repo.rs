use async_trait::async_trait;
use chrono::{DateTime, Utc};
use planner_core::model::{AuthToken, Session, UserIdentity};
use sqlx::Row;

use crate::repository::{SessionRepository, StorageError};

use super::SqliteRepository;

const SESSION_ROW_ID: i64 = 1;

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_session(&self) -> Result<Option<Session>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT identity, token, established_at
            FROM auth_session
            WHERE id = ?1
            ",
        )
        .bind(SESSION_ROW_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let identity: String = row
            .try_get("identity")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let token: String = row
            .try_get("token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let established_at: String = row
            .try_get("established_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let identity = UserIdentity::from_json(&identity)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let established_at = DateTime::parse_from_rfc3339(&established_at)
            .map_err(|err| StorageError::Serialization(err.to_string()))?
            .with_timezone(&Utc);

        Ok(Some(Session::new(
            identity,
            AuthToken::new(token),
            established_at,
        )))
    }

    async fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        let identity = session
            .identity()
            .to_json()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO auth_session (id, identity, token, established_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                identity = excluded.identity,
                token = excluded.token,
                established_at = excluded.established_at
            ",
        )
        .bind(SESSION_ROW_ID)
        .bind(identity)
        .bind(session.token().expose())
        .bind(session.established_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_session WHERE id = ?1")
            .bind(SESSION_ROW_ID)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
