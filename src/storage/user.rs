use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::forms::InsertUser;
use crate::models::User;

#[derive(Debug, Clone, Default)]
pub struct UserStore {
  inner: Arc<Mutex<HashMap<String, User>>>,
}

impl UserStore {
  /// Username uniqueness is checked under the same lock as the insert,
  /// so two concurrent creates cannot both claim a name.  A duplicate
  /// returns `None`.
  pub fn create(&self, form: &InsertUser) -> Option<User> {
    let mut inner = self.inner.lock().unwrap();
    if inner.values().any(|user| user.username == form.username) {
      return None;
    }
    let user = User {
      id: Uuid::new_v4().to_string(),
      username: form.username.clone(),
      password: form.password.clone(),
    };
    inner.insert(user.id.clone(), user.clone());
    Some(user)
  }

  pub fn get(&self, id: &str) -> Option<User> {
    let inner = self.inner.lock().unwrap();
    inner.get(id).cloned()
  }

  pub fn get_by_username(&self, username: &str) -> Option<User> {
    let inner = self.inner.lock().unwrap();
    inner.values().find(|user| user.username == username).cloned()
  }
}
