use crate::database::booking::BookingRepository;
use crate::error::app_error::AppError;
use crate::models::booking::{Booking, BookingRequest, BookingResponse};
use tracing::info;
use uuid::Uuid;

pub struct BookingService<'a, R: BookingRepository> {
    repository: &'a R,
}

impl<'a, R: BookingRepository> BookingService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        BookingService { repository }
    }

    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, AppError> {
        let user_id = parse_reference_id(&request.user_id)?;
        let slot_id = parse_reference_id(&request.slot_id)?;

        let booking = self.repository.create_booking(&user_id, &slot_id, &request.time).await?;
        info!(booking_id = %booking.id, slot_id = %slot_id, "booking created");

        Ok(booking)
    }

    pub async fn list_bookings(&self) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.repository.list_bookings().await?;

        Ok(bookings.iter().map(BookingResponse::from).collect())
    }
}

fn parse_reference_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid userId or slotId format.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::slot::SlotRepository;
    use crate::database::user::UserRepository;
    use crate::models::slot::SlotStatus;
    use crate::test_utils::MemoryRepository;
    use proptest::prelude::*;

    fn booking_request(user_id: &Uuid, slot_id: &Uuid) -> BookingRequest {
        BookingRequest {
            user_id: user_id.to_string(),
            slot_id: slot_id.to_string(),
            time: "2026-08-07 10:00".to_string(),
        }
    }

    #[tokio::test]
    async fn booking_expands_user_and_slot_and_books_the_slot() {
        let repo = MemoryRepository::new();
        let user = repo.create_user("Jo", "jo@x.com", "hash").await.unwrap();
        let slot = repo.create_slot("A1", SlotStatus::Available).await.unwrap();

        let service = BookingService::new(&repo);
        let booking = service.create_booking(&booking_request(&user.id, &slot.id)).await.unwrap();

        assert_eq!(booking.user.id, user.id);
        assert_eq!(booking.user.email, user.email);
        assert_eq!(booking.slot.id, slot.id);
        assert_eq!(booking.slot.label, "A1");
        assert_eq!(booking.slot.status, SlotStatus::Booked);
        assert_eq!(booking.time, "2026-08-07 10:00");

        let listed = service.list_bookings().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, booking.id);
        assert_eq!(listed[0].user.id, user.id);
        assert_eq!(listed[0].slot.status, SlotStatus::Booked);
    }

    #[tokio::test]
    async fn booking_an_already_booked_slot_still_succeeds() {
        let repo = MemoryRepository::new();
        let user = repo.create_user("Jo", "jo@x.com", "hash").await.unwrap();
        let slot = repo.create_slot("A1", SlotStatus::Booked).await.unwrap();

        let service = BookingService::new(&repo);
        let booking = service.create_booking(&booking_request(&user.id, &slot.id)).await.unwrap();

        assert_eq!(booking.slot.status, SlotStatus::Booked);
        assert_eq!(service.list_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found_and_nothing_is_stored() {
        let repo = MemoryRepository::new();
        let slot = repo.create_slot("A1", SlotStatus::Available).await.unwrap();

        let service = BookingService::new(&repo);
        let err = service
            .create_booking(&booking_request(&Uuid::new_v4(), &slot.id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UserNotFound));
        assert_eq!(err.to_string(), "User not found");
        assert!(service.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_slot_is_not_found_and_nothing_is_stored() {
        let repo = MemoryRepository::new();
        let user = repo.create_user("Jo", "jo@x.com", "hash").await.unwrap();

        let service = BookingService::new(&repo);
        let err = service
            .create_booking(&booking_request(&user.id, &Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SlotNotFound));
        assert_eq!(err.to_string(), "Slot not found");
        assert!(service.list_bookings().await.unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn malformed_reference_ids_are_rejected(raw in "[a-zA-Z0-9 ]{1,40}") {
            prop_assume!(Uuid::parse_str(&raw).is_err());

            let err = parse_reference_id(&raw).unwrap_err();
            prop_assert!(matches!(err, AppError::BadRequest(_)));
            prop_assert_eq!(err.to_string(), "Invalid userId or slotId format.");
        }
    }
}
