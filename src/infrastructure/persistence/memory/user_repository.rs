use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::Email,
};

/// In-process implementation of the credential store.
///
/// Backs the test suite and local demos. The uniqueness invariant holds under
/// concurrency because the duplicate check and the insert happen under one
/// lock, mirroring the atomicity a database UNIQUE constraint provides.
pub struct InMemoryUserRepository {
  users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self {
      users: Mutex::new(HashMap::new()),
    }
  }

  /// Number of stored credential records
  pub fn len(&self) -> usize {
    self.users.lock().expect("user store lock poisoned").len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for InMemoryUserRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn insert(&self, user: User) -> Result<User, AuthError> {
    let mut users = self.users.lock().expect("user store lock poisoned");

    if users.values().any(|existing| existing.email == user.email) {
      return Err(AuthError::Repository(RepositoryError::DuplicateKey(
        "users_email_key".to_string(),
      )));
    }

    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().expect("user store lock poisoned");
    Ok(users.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().expect("user store lock poisoned");
    Ok(
      users
        .values()
        .find(|user| user.email == email.as_str())
        .cloned(),
    )
  }
}
