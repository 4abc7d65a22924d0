use crate::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::user::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::service::auth::AuthService;
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;
use validator::Validate;

#[rocket::post("/signup", data = "<payload>")]
pub async fn signup(
    pool: &State<PgPool>,
    config: &State<Config>,
    payload: Json<SignupRequest>,
) -> Result<(Status, Json<MessageResponse>), AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let service = AuthService::new(&repo, &config.auth);
    service.register(&payload).await?;

    Ok((
        Status::Created,
        Json(MessageResponse {
            message: "User registered successfully!".to_string(),
        }),
    ))
}

#[rocket::post("/login", data = "<payload>")]
pub async fn login(
    pool: &State<PgPool>,
    config: &State<Config>,
    payload: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    let service = AuthService::new(&repo, &config.auth);
    let (token, user) = service.login(&payload).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![signup, login]
}
