use crate::database::booking::BookingRepository;
use crate::database::slot::SlotRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::booking::Booking;
use crate::models::slot::{Slot, SlotStatus};
use crate::models::user::User;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredBooking {
    id: Uuid,
    user_id: Uuid,
    slot_id: Uuid,
    time: String,
    created_at: DateTime<Utc>,
}

/// In-memory repository mirroring the store semantics, so services can be
/// tested without a database. Booking creation keeps the same all-or-nothing
/// behavior as the transactional implementation.
#[derive(Default)]
pub struct MemoryRepository {
    users: Mutex<Vec<User>>,
    slots: Mutex<Vec<Slot>>,
    bookings: Mutex<Vec<StoredBooking>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for MemoryRepository {
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait::async_trait]
impl SlotRepository for MemoryRepository {
    async fn create_slot(&self, label: &str, status: SlotStatus) -> Result<Slot, AppError> {
        let slot = Slot {
            id: Uuid::new_v4(),
            label: label.to_string(),
            status,
            created_at: Utc::now(),
        };
        self.slots.lock().unwrap().push(slot.clone());

        Ok(slot)
    }

    async fn list_slots(&self) -> Result<Vec<Slot>, AppError> {
        Ok(self.slots.lock().unwrap().clone())
    }

    async fn toggle_slot(&self, id: &Uuid) -> Result<Option<Slot>, AppError> {
        let mut slots = self.slots.lock().unwrap();
        match slots.iter_mut().find(|s| s.id == *id) {
            Some(slot) => {
                slot.status = slot.status.toggled();
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl BookingRepository for MemoryRepository {
    async fn create_booking(&self, user_id: &Uuid, slot_id: &Uuid, time: &str) -> Result<Booking, AppError> {
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *user_id)
            .cloned()
            .ok_or(AppError::UserNotFound)?;

        let mut slots = self.slots.lock().unwrap();
        let slot = slots.iter_mut().find(|s| s.id == *slot_id).ok_or(AppError::SlotNotFound)?;
        slot.status = SlotStatus::Booked;
        let slot = slot.clone();
        drop(slots);

        let stored = StoredBooking {
            id: Uuid::new_v4(),
            user_id: *user_id,
            slot_id: *slot_id,
            time: time.to_string(),
            created_at: Utc::now(),
        };
        self.bookings.lock().unwrap().push(stored.clone());

        Ok(Booking {
            id: stored.id,
            user,
            slot,
            time: stored.time,
            created_at: stored.created_at,
        })
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let users = self.users.lock().unwrap();
        let slots = self.slots.lock().unwrap();

        let bookings = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .map(|stored| Booking {
                id: stored.id,
                user: users.iter().find(|u| u.id == stored.user_id).cloned().expect("booking references stored user"),
                slot: slots.iter().find(|s| s.id == stored.slot_id).cloned().expect("booking references stored slot"),
                time: stored.time.clone(),
                created_at: stored.created_at,
            })
            .collect();

        Ok(bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggle_round_trip_restores_status() {
        let repo = MemoryRepository::new();
        let slot = repo.create_slot("A1", SlotStatus::Available).await.unwrap();

        let toggled = repo.toggle_slot(&slot.id).await.unwrap().unwrap();
        assert_eq!(toggled.status, SlotStatus::Booked);

        let toggled_back = repo.toggle_slot(&slot.id).await.unwrap().unwrap();
        assert_eq!(toggled_back.status, SlotStatus::Available);
    }

    #[tokio::test]
    async fn toggle_unknown_slot_is_none() {
        let repo = MemoryRepository::new();
        assert!(repo.toggle_slot(&Uuid::new_v4()).await.unwrap().is_none());
    }
}
