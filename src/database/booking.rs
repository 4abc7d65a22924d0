use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::booking::Booking;
use crate::models::slot::{Slot, SlotStatus};
use crate::models::user::User;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait::async_trait]
pub trait BookingRepository {
    /// Creates a booking and marks the slot booked in one transaction.
    /// The slot row is locked for the duration, so two concurrent bookings
    /// against the same slot serialize instead of racing the status update.
    async fn create_booking(&self, user_id: &Uuid, slot_id: &Uuid, time: &str) -> Result<Booking, AppError>;
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;
}

#[derive(sqlx::FromRow)]
struct BookingInsertRow {
    id: Uuid,
    time: String,
    created_at: DateTime<Utc>,
}

/// Flattened join row; aliased columns keep the user and slot fields apart.
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    time: String,
    created_at: DateTime<Utc>,
    user_id: Uuid,
    user_name: String,
    user_email: String,
    user_password_hash: String,
    user_created_at: DateTime<Utc>,
    slot_id: Uuid,
    slot_label: String,
    slot_status: SlotStatus,
    slot_created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user: User {
                id: row.user_id,
                name: row.user_name,
                email: row.user_email,
                password_hash: row.user_password_hash,
                created_at: row.user_created_at,
            },
            slot: Slot {
                id: row.slot_id,
                label: row.slot_label,
                status: row.slot_status,
                created_at: row.slot_created_at,
            },
            time: row.time,
            created_at: row.created_at,
        }
    }
}

#[async_trait::async_trait]
impl BookingRepository for PostgresRepository {
    async fn create_booking(&self, user_id: &Uuid, slot_id: &Uuid, time: &str) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::UserNotFound)?;

        // FOR UPDATE holds the slot row until commit.
        sqlx::query_as::<_, Slot>(
            r#"
            SELECT id, label, status, created_at
            FROM parking_slot
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(slot_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::SlotNotFound)?;

        let inserted = sqlx::query_as::<_, BookingInsertRow>(
            r#"
            INSERT INTO booking (user_id, slot_id, "time")
            VALUES ($1, $2, $3)
            RETURNING id, "time", created_at
            "#,
        )
        .bind(user_id)
        .bind(slot_id)
        .bind(time)
        .fetch_one(&mut *tx)
        .await?;

        let slot = sqlx::query_as::<_, Slot>(
            r#"
            UPDATE parking_slot
            SET status = 'booked'::slot_status
            WHERE id = $1
            RETURNING id, label, status, created_at
            "#,
        )
        .bind(slot_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Booking {
            id: inserted.id,
            user,
            slot,
            time: inserted.time,
            created_at: inserted.created_at,
        })
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT
                b.id,
                b."time",
                b.created_at,
                u.id as user_id,
                u.name as user_name,
                u.email as user_email,
                u.password_hash as user_password_hash,
                u.created_at as user_created_at,
                s.id as slot_id,
                s.label as slot_label,
                s.status as slot_status,
                s.created_at as slot_created_at
            FROM booking b
            JOIN users u ON u.id = b.user_id
            JOIN parking_slot s ON s.id = b.slot_id
            ORDER BY b.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
