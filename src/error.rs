use log::*;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  // 400, field-level detail
  #[error("validation error: {0}")]
  Validation(JsonValue),

  // 404
  #[error("not found: {0}")]
  NotFound(JsonValue),

  // 400
  #[error("bad request: {0}")]
  BadRequest(String),

  // 500, external feed failure
  #[error("upstream error: {0}")]
  Upstream(String),

  // 500
  #[error("internal server error")]
  InternalServerError,

  // Json error
  #[error("Json error: {source}")]
  JsonError {
    #[from]
    source: serde_json::Error,
  },

  #[error("std io error")]
  IOError {
    #[from]
    source: std::io::Error,
  },

  #[error("config error")]
  ConfigError {
    #[from]
    source: config::ConfigError,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl Error {
  /// Build a `Validation` error from a list of field errors.
  pub fn validation<T: Serialize>(errors: T) -> Error {
    Error::Validation(json!({
      "message": "Validation error",
      "errors": errors,
    }))
  }

  pub fn not_found(message: &str) -> Error {
    Error::NotFound(json!({ "message": message }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// the ResponseError trait lets us convert errors to http responses with appropriate data
// https://actix.rs/docs/errors/
impl ResponseError for Error {
  fn error_response(&self) -> HttpResponse {
    match self {
      Error::Validation(ref message) => {
        HttpResponse::build(StatusCode::BAD_REQUEST).json(message)
      },
      Error::NotFound(ref message) => HttpResponse::NotFound().json(message),
      Error::BadRequest(ref message) => {
        HttpResponse::build(StatusCode::BAD_REQUEST).json(json!({ "message": message }))
      },
      Error::Upstream(ref message) => {
        error!("external feed error: {}", message);
        HttpResponse::InternalServerError().json(json!({
          "message": "Failed to fetch external articles",
          "error": message,
        }))
      },
      ref err => {
        error!("InternalServerError: {:?}", err);
        HttpResponse::InternalServerError().json(json!({ "message": "Internal Server Error" }))
      },
    }
  }
}
