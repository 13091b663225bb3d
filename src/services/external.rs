use log::*;

use std::time::Duration;

use actix_web::{client::Client, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::app::*;
use crate::error::*;

const DEFAULT_TIMEZONE: &str = "US/Eastern";

// large enough for a feed of full article bodies
const RESPONSE_LIMIT: usize = 4 * 1024 * 1024;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExternalRequest {
  pub tz: Option<String>,
}

/// Relay the third-party article feed.  The upstream is an opaque JSON
/// endpoint keyed by timezone; nothing about its payload is validated.
#[post("/external/articles")]
async fn external_articles(
  cfg: web::Data<ExternalService>,
  req: web::Json<ExternalRequest>,
) -> Result<HttpResponse> {
  let tz = req
    .into_inner()
    .tz
    .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
  debug!("External - fetching feed for tz={}", tz);

  let client = Client::builder()
    .timeout(Duration::from_secs(cfg.timeout_secs))
    .finish();

  let mut res = client
    .post(&cfg.url)
    .send_json(&json!({ "tz": tz }))
    .await
    .map_err(|err| Error::Upstream(err.to_string()))?;

  if !res.status().is_success() {
    return Err(Error::Upstream(format!(
      "External API error: {}",
      res.status().as_u16()
    )));
  }

  let body: JsonValue = res
    .json()
    .limit(RESPONSE_LIMIT)
    .await
    .map_err(|err| Error::Upstream(err.to_string()))?;

  Ok(HttpResponse::Ok().json(body))
}

#[derive(Debug, Clone)]
pub struct ExternalService {
  pub url: String,
  pub timeout_secs: u64,
}

impl Default for ExternalService {
  fn default() -> Self {
    ExternalService {
      url: String::new(),
      timeout_secs: 10,
    }
  }
}

impl super::Service for ExternalService {
  fn load_app_config(&mut self, config: &AppConfig, _prefix: &str) -> Result<()> {
    self.url = config
      .get_str("External.url")?
      .expect("External.url must be set");
    if let Some(timeout) = config.get_int("External.timeout_secs")? {
      self.timeout_secs = timeout as u64;
    }
    Ok(())
  }

  fn api_config(&self, web: &mut web::ServiceConfig) {
    web.data(self.clone()).service(external_articles);
  }
}

pub fn new_factory() -> ExternalService {
  Default::default()
}
