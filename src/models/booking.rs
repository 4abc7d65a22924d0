use crate::models::slot::Slot;
use crate::models::user::{User, UserResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Booking with its user and slot expanded to the full stored records.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub user: User,
    pub slot: Slot,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// The ids arrive as strings so a malformed id can be reported as a 400
/// rather than rejected by the JSON parser.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "All fields (userId, slotId, time) are required."))]
    pub user_id: String,
    #[validate(length(min = 1, message = "All fields (userId, slotId, time) are required."))]
    pub slot_id: String,
    #[validate(length(min = 1, message = "All fields (userId, slotId, time) are required."))]
    pub time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub user: UserResponse,
    pub slot: Slot,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: BookingResponse,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            user: UserResponse::from(&booking.user),
            slot: booking.slot.clone(),
            time: booking.time.clone(),
            created_at: booking.created_at,
        }
    }
}
