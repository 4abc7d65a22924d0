use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::booking::{BookingCreatedResponse, BookingRequest, BookingResponse};
use crate::service::booking::BookingService;
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;
use validator::Validate;

#[rocket::post("/", data = "<payload>")]
pub async fn create_booking(
    pool: &State<PgPool>,
    payload: Json<BookingRequest>,
) -> Result<(Status, Json<BookingCreatedResponse>), AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let service = BookingService::new(&repo);
    let booking = service.create_booking(&payload).await?;

    Ok((
        Status::Created,
        Json(BookingCreatedResponse {
            message: "Booking created successfully".to_string(),
            booking: BookingResponse::from(&booking),
        }),
    ))
}

#[rocket::get("/")]
pub async fn list_bookings(pool: &State<PgPool>) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    let service = BookingService::new(&repo);

    Ok(Json(service.list_bookings().await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_booking, list_bookings]
}
