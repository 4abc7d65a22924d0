use crate::database::postgres_repository::PostgresRepository;
use crate::database::slot::SlotRepository;
use crate::error::app_error::AppError;
use crate::models::slot::{Slot, SlotRequest};
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[rocket::get("/")]
pub async fn list_slots(pool: &State<PgPool>) -> Result<Json<Vec<Slot>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };

    Ok(Json(repo.list_slots().await?))
}

#[rocket::post("/", data = "<payload>")]
pub async fn create_slot(pool: &State<PgPool>, payload: Json<SlotRequest>) -> Result<(Status, Json<Slot>), AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let slot = repo.create_slot(&payload.label, payload.status.unwrap_or_default()).await?;

    Ok((Status::Created, Json(slot)))
}

#[rocket::put("/<id>/toggle")]
pub async fn toggle_slot(pool: &State<PgPool>, id: &str) -> Result<Json<Slot>, AppError> {
    // A malformed id cannot name any slot, so it reports the same way as an
    // unknown one.
    let slot_id = Uuid::parse_str(id).map_err(|_| AppError::SlotNotFound)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    match repo.toggle_slot(&slot_id).await? {
        Some(slot) => Ok(Json(slot)),
        None => Err(AppError::SlotNotFound),
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_slots, create_slot, toggle_slot]
}
