use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::auth::{
  entities::SessionBinding,
  ports::SessionStore,
  value_objects::TokenHash,
};

/// In-process session store keyed by token hash.
///
/// Sessions do not need to survive a restart, so a shared map is the default
/// backing; the lock is held only for the map operation, never across awaits.
pub struct InMemorySessionStore {
  bindings: RwLock<HashMap<TokenHash, SessionBinding>>,
}

impl InMemorySessionStore {
  pub fn new() -> Self {
    Self {
      bindings: RwLock::new(HashMap::new()),
    }
  }
}

impl Default for InMemorySessionStore {
  fn default() -> Self {
    Self::new()
  }
}

impl SessionStore for InMemorySessionStore {
  fn put(&self, token_hash: TokenHash, binding: SessionBinding) {
    self
      .bindings
      .write()
      .expect("session store lock poisoned")
      .insert(token_hash, binding);
  }

  fn get(&self, token_hash: &TokenHash) -> Option<SessionBinding> {
    self
      .bindings
      .read()
      .expect("session store lock poisoned")
      .get(token_hash)
      .cloned()
  }

  fn remove(&self, token_hash: &TokenHash) {
    self
      .bindings
      .write()
      .expect("session store lock poisoned")
      .remove(token_hash);
  }
}
