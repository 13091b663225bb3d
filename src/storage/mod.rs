//! Process-lifetime, in-memory stores.  `Storage` is created once and
//! cloned into every actix worker; clones share the same collections.

mod article;
mod user;

pub use self::{article::*, user::*};

#[derive(Debug, Clone, Default)]
pub struct Storage {
  pub article: ArticleStore,
  pub user: UserStore,
}

impl Storage {
  pub fn new() -> Storage {
    Default::default()
  }
}
