use serde::{Deserialize, Serialize};

use crate::error::*;

use super::FieldError;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertUser {
  pub username: String,
  pub password: String,
}

impl InsertUser {
  pub fn validate(&self) -> Result<()> {
    let mut errors = Vec::new();
    if self.username.trim().is_empty() {
      errors.push(FieldError::new("username", "username must not be empty"));
    }
    if self.password.is_empty() {
      errors.push(FieldError::new("password", "password must not be empty"));
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(Error::validation(errors))
    }
  }
}
