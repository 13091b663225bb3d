use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::forms::{InsertArticle, UpdateArticle};
use crate::models::{Article, ArticleStatus, DEFAULT_AUTHOR};

/// Map entry.  `seq` records insertion order so the read views can break
/// timestamp ties deterministically.
#[derive(Debug)]
struct Stored {
  seq: u64,
  article: Article,
}

#[derive(Debug, Default)]
struct Articles {
  seq: u64,
  by_id: HashMap<String, Stored>,
}

/// Authoritative article collection.  All mutations serialize on the
/// inner mutex, so an article's first `draft` -> `published` transition
/// sets `publishedAt` exactly once even under concurrent updates.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
  inner: Arc<Mutex<Articles>>,
}

impl ArticleStore {
  pub fn create(&self, form: &InsertArticle) -> Article {
    self.create_at(form, Utc::now().naive_utc())
  }

  pub fn update(&self, id: &str, form: &UpdateArticle) -> Option<Article> {
    self.update_at(id, form, Utc::now().naive_utc())
  }

  fn create_at(&self, form: &InsertArticle, now: NaiveDateTime) -> Article {
    let status = form
      .status
      .as_deref()
      .and_then(ArticleStatus::parse)
      .unwrap_or(ArticleStatus::Draft);

    let article = Article {
      id: Uuid::new_v4().to_string(),
      title: form.title.clone(),
      content: form.content.clone(),
      excerpt: form.excerpt.clone(),
      category: form.category.clone(),
      status,
      featured_image: form.featured_image.clone(),
      read_time: form.read_time.clone(),
      author: form
        .author
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
      created_at: now,
      updated_at: now,
      published_at: match status {
        ArticleStatus::Published => Some(now),
        ArticleStatus::Draft => None,
      },
    };

    let mut inner = self.inner.lock().unwrap();
    inner.seq += 1;
    let seq = inner.seq;
    inner.by_id.insert(
      article.id.to_string(),
      Stored {
        seq,
        article: article.clone(),
      },
    );
    article
  }

  /// Merge `form` over the stored record.  Omitted fields are left
  /// unchanged.  Returns `None` for an unknown id.
  fn update_at(&self, id: &str, form: &UpdateArticle, now: NaiveDateTime) -> Option<Article> {
    let mut inner = self.inner.lock().unwrap();
    let stored = inner.by_id.get_mut(id)?;
    let article = &mut stored.article;

    if let Some(title) = &form.title {
      article.title = title.clone();
    }
    if let Some(content) = &form.content {
      article.content = content.clone();
    }
    if let Some(excerpt) = &form.excerpt {
      article.excerpt = Some(excerpt.clone());
    }
    if let Some(category) = &form.category {
      article.category = category.clone();
    }
    if let Some(featured_image) = &form.featured_image {
      article.featured_image = Some(featured_image.clone());
    }
    if let Some(read_time) = &form.read_time {
      article.read_time = Some(read_time.clone());
    }
    if let Some(author) = &form.author {
      article.author = author.clone();
    }
    if let Some(status) = form.status.as_deref().and_then(ArticleStatus::parse) {
      // first publish wins, later edits never move publishedAt
      if status == ArticleStatus::Published && article.status != ArticleStatus::Published {
        article.published_at = Some(now);
      }
      article.status = status;
    }
    article.updated_at = now;

    Some(article.clone())
  }

  pub fn get(&self, id: &str) -> Option<Article> {
    let inner = self.inner.lock().unwrap();
    inner.by_id.get(id).map(|stored| stored.article.clone())
  }

  /// Hard delete.  Returns whether a record was actually removed.
  pub fn delete(&self, id: &str) -> bool {
    let mut inner = self.inner.lock().unwrap();
    inner.by_id.remove(id).is_some()
  }

  /// All articles, newest `createdAt` first.  Ties keep insertion order.
  pub fn all(&self) -> Vec<Article> {
    let inner = self.inner.lock().unwrap();
    let mut entries: Vec<&Stored> = inner.by_id.values().collect();
    entries.sort_by_key(|stored| stored.seq);
    entries.sort_by(|a, b| b.article.created_at.cmp(&a.article.created_at));
    entries.iter().map(|stored| stored.article.clone()).collect()
  }

  /// Published articles only, newest `publishedAt` first.
  pub fn published(&self) -> Vec<Article> {
    let inner = self.inner.lock().unwrap();
    let mut entries: Vec<&Stored> = inner
      .by_id
      .values()
      .filter(|stored| stored.article.status == ArticleStatus::Published)
      .collect();
    entries.sort_by_key(|stored| stored.seq);
    entries.sort_by(|a, b| b.article.published_at.cmp(&a.article.published_at));
    entries.iter().map(|stored| stored.article.clone()).collect()
  }
}
