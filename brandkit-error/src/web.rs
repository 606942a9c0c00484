use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Transport level failures. Business rejections travel inside
/// `WebResponse` with HTTP 200 instead.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
