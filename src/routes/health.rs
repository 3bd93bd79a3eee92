use actix_web::{get, HttpResponse, Responder};

use crate::error::MessageResponse;

/// Liveness probe
///
/// Always answers `{"message": "pong"}`; it does not touch the database.
#[get("/ping")]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("pong"))
}
