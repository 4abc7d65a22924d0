use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "slot_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Available,
    Booked,
}

impl SlotStatus {
    pub fn toggled(self) -> Self {
        match self {
            SlotStatus::Available => SlotStatus::Booked,
            SlotStatus::Booked => SlotStatus::Available,
        }
    }
}

/// Parking slot record. Serialized directly on the slot endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub label: String,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SlotRequest {
    #[validate(length(min = 1, message = "Slot label is required"))]
    pub label: String,
    pub status: Option<SlotStatus>,
}
