use serde::Serialize;

pub mod article;
pub mod user;

pub use self::{article::*, user::*};

/// One failed field in a create/update payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
  pub field: &'static str,
  pub message: String,
}

impl FieldError {
  pub fn new(field: &'static str, message: impl Into<String>) -> FieldError {
    FieldError {
      field,
      message: message.into(),
    }
  }
}
