use log::*;

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::app::*;
use crate::error::*;
use crate::forms::article::*;
use crate::storage::Storage;

/// All articles, newest first (admin dashboard view).
#[get("/articles")]
async fn list(store: web::Data<Storage>) -> Result<HttpResponse> {
  Ok(HttpResponse::Ok().json(store.article.all()))
}

/// Published articles only, newest publication first (public view).
/// Registered before the `{id}` route so "published" is not taken for an id.
#[get("/articles/published")]
async fn list_published(store: web::Data<Storage>) -> Result<HttpResponse> {
  Ok(HttpResponse::Ok().json(store.article.published()))
}

#[get("/articles/{id}")]
async fn get_article(store: web::Data<Storage>, id: web::Path<String>) -> Result<HttpResponse> {
  match store.article.get(&id) {
    Some(article) => Ok(HttpResponse::Ok().json(article)),
    None => Err(Error::not_found("Article not found")),
  }
}

#[post("/articles")]
async fn store_article(
  store: web::Data<Storage>,
  form: web::Json<InsertArticle>,
) -> Result<HttpResponse> {
  let form = form.into_inner();
  form.validate()?;

  let article = store.article.create(&form);
  info!("Article - created {} ({})", article.id, article.status.as_str());
  Ok(HttpResponse::Created().json(article))
}

#[put("/articles/{id}")]
async fn update_article(
  store: web::Data<Storage>,
  id: web::Path<String>,
  form: web::Json<UpdateArticle>,
) -> Result<HttpResponse> {
  let form = form.into_inner();
  form.validate()?;

  match store.article.update(&id, &form) {
    Some(article) => {
      info!("Article - updated {}", article.id);
      Ok(HttpResponse::Ok().json(article))
    },
    None => Err(Error::not_found("Article not found")),
  }
}

#[delete("/articles/{id}")]
async fn delete_article(store: web::Data<Storage>, id: web::Path<String>) -> Result<HttpResponse> {
  if store.article.delete(&id) {
    info!("Article - deleted {}", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Article deleted successfully" })))
  } else {
    Err(Error::not_found("Article not found"))
  }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleService;

impl super::Service for ArticleService {
  fn load_app_config(&mut self, _config: &AppConfig, _prefix: &str) -> Result<()> {
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web
      .service(list)
      .service(list_published)
      .service(get_article)
      .service(store_article)
      .service(update_article)
      .service(delete_article);
  }
}

pub fn new_factory() -> ArticleService {
  Default::default()
}
