use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};

use crate::catalog::CatalogError;
use crate::types::manifest::ManifestError;

pub mod addons;
pub mod health;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("Page render was interrupted")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
