use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::models::{ArticleStatus, CATEGORIES};

use super::FieldError;

// `default` lets a missing required field reach validate(), which reports
// it by name instead of failing json deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertArticle {
  pub title: String,
  pub content: String,
  pub excerpt: Option<String>,
  pub category: String,
  pub status: Option<String>,
  pub featured_image: Option<String>,
  pub read_time: Option<String>,
  pub author: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
  pub title: Option<String>,
  pub content: Option<String>,
  pub excerpt: Option<String>,
  pub category: Option<String>,
  pub status: Option<String>,
  pub featured_image: Option<String>,
  pub read_time: Option<String>,
  pub author: Option<String>,
}

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
  if value.trim().is_empty() {
    errors.push(FieldError::new(field, format!("{} must not be empty", field)));
  }
}

fn check_category(errors: &mut Vec<FieldError>, value: &str) {
  check_required(errors, "category", value);
  if !value.trim().is_empty() && !CATEGORIES.contains(&value) {
    errors.push(FieldError::new(
      "category",
      format!("unknown category: {}", value),
    ));
  }
}

fn check_status(errors: &mut Vec<FieldError>, value: &str) {
  if ArticleStatus::parse(value).is_none() {
    errors.push(FieldError::new(
      "status",
      format!("status must be 'draft' or 'published', got: {}", value),
    ));
  }
}

impl InsertArticle {
  pub fn validate(&self) -> Result<()> {
    let mut errors = Vec::new();
    check_required(&mut errors, "title", &self.title);
    check_required(&mut errors, "content", &self.content);
    check_category(&mut errors, &self.category);
    if let Some(status) = &self.status {
      check_status(&mut errors, status);
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(Error::validation(errors))
    }
  }
}

impl UpdateArticle {
  /// Same field rules as insert, but every field is optional.  An empty
  /// update is accepted and only bumps `updatedAt`.
  pub fn validate(&self) -> Result<()> {
    let mut errors = Vec::new();
    if let Some(title) = &self.title {
      check_required(&mut errors, "title", title);
    }
    if let Some(content) = &self.content {
      check_required(&mut errors, "content", content);
    }
    if let Some(category) = &self.category {
      check_category(&mut errors, category);
    }
    if let Some(status) = &self.status {
      check_status(&mut errors, status);
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(Error::validation(errors))
    }
  }
}
