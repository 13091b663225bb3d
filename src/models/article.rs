use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

/// Default byline when the payload carries no author.
pub const DEFAULT_AUTHOR: &str = "Urban-Telegraph Team";

/// Accepted category tags.
pub const CATEGORIES: &[&str] = &[
  "urban-life",
  "food-review",
  "technology",
  "environment",
  "culture",
  "business",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
  Draft,
  Published,
}

impl ArticleStatus {
  pub fn parse(value: &str) -> Option<ArticleStatus> {
    match value {
      "draft" => Some(ArticleStatus::Draft),
      "published" => Some(ArticleStatus::Published),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ArticleStatus::Draft => "draft",
      ArticleStatus::Published => "published",
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: String,
  pub title: String,
  pub content: String,
  pub excerpt: Option<String>,
  pub category: String,
  pub status: ArticleStatus,
  pub featured_image: Option<String>,
  pub read_time: Option<String>,
  pub author: String,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
  /// Set once, on the first transition to `published`.  Never cleared
  /// or moved by later edits.
  pub published_at: Option<NaiveDateTime>,
}
