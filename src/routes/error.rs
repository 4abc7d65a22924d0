use rocket::response::status::Custom;
use rocket::serde::Serialize;
use rocket::serde::json::Json;
use rocket::{Request, catch, http::Status};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Error {
    pub message: String,
}

#[catch(400)]
pub fn bad_request(_: &Request) -> Json<Error> {
    Json(Error {
        message: "Bad request".to_string(),
    })
}

#[catch(404)]
pub fn not_found(_: &Request) -> Json<Error> {
    Json(Error {
        message: "Not found".to_string(),
    })
}

/// Rocket reports missing or unparseable JSON bodies as 422; the wire
/// contract reports those as a plain 400.
#[catch(422)]
pub fn unprocessable_entity(_: &Request) -> Custom<Json<Error>> {
    Custom(
        Status::BadRequest,
        Json(Error {
            message: "All fields are required".to_string(),
        }),
    )
}

#[catch(500)]
pub fn internal_error(_: &Request) -> Json<Error> {
    Json(Error {
        message: "Server error".to_string(),
    })
}
