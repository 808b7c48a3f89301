use actix_web::{get, web, Responder};

use crate::endpoints::ApiError;

#[get("/health")]
pub async fn health() -> Result<impl Responder, ApiError> {
    Ok(web::Json("The add-on repository is running"))
}
