use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::slot::{Slot, SlotStatus};
use uuid::Uuid;

#[async_trait::async_trait]
pub trait SlotRepository {
    async fn create_slot(&self, label: &str, status: SlotStatus) -> Result<Slot, AppError>;
    async fn list_slots(&self) -> Result<Vec<Slot>, AppError>;
    /// Flips available<->booked. The row stays locked between the read and
    /// the write, so concurrent toggles cannot interleave. Returns `None`
    /// when the slot does not exist.
    async fn toggle_slot(&self, id: &Uuid) -> Result<Option<Slot>, AppError>;
}

#[async_trait::async_trait]
impl SlotRepository for PostgresRepository {
    async fn create_slot(&self, label: &str, status: SlotStatus) -> Result<Slot, AppError> {
        let slot = sqlx::query_as::<_, Slot>(
            r#"
            INSERT INTO parking_slot (label, status)
            VALUES ($1, $2)
            RETURNING id, label, status, created_at
            "#,
        )
        .bind(label)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(slot)
    }

    async fn list_slots(&self) -> Result<Vec<Slot>, AppError> {
        let slots = sqlx::query_as::<_, Slot>(
            r#"
            SELECT id, label, status, created_at
            FROM parking_slot
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    async fn toggle_slot(&self, id: &Uuid) -> Result<Option<Slot>, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(slot) = sqlx::query_as::<_, Slot>(
            r#"
            SELECT id, label, status, created_at
            FROM parking_slot
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let updated = sqlx::query_as::<_, Slot>(
            r#"
            UPDATE parking_slot
            SET status = $2
            WHERE id = $1
            RETURNING id, label, status, created_at
            "#,
        )
        .bind(id)
        .bind(slot.status.toggled())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(updated))
    }
}
