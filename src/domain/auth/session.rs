use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::SessionBinding;
use super::ports::SessionStore;
use super::value_objects::SessionToken;

/// The principal a valid session token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
  pub display_name: String,
}

/// Tracks the authenticated principal across requests.
///
/// Each successful login issues a fresh random token (token rotation), so an
/// old token can never be replayed into a new session. Bindings carry an
/// explicit TTL; an expired binding behaves exactly like a missing one and is
/// reaped on access. Token transport (the cookie) is the HTTP adapter's
/// concern.
pub struct SessionManager {
  store: Arc<dyn SessionStore>,
  ttl: Duration,
}

impl SessionManager {
  /// Creates a session manager over the given store with a fixed TTL.
  pub fn new(store: Arc<dyn SessionStore>, ttl_seconds: i64) -> Self {
    Self {
      store,
      ttl: Duration::seconds(ttl_seconds),
    }
  }

  /// Establishes a session bound to the given user and returns the fresh
  /// token the client must present on subsequent requests.
  pub fn establish(&self, user_id: Uuid, display_name: &str) -> SessionToken {
    let token = SessionToken::generate();
    let binding = SessionBinding::with_ttl(user_id, display_name.to_string(), self.ttl);
    self.store.put(token.hash(), binding);
    token
  }

  /// Whether the token currently resolves to a live session.
  pub fn is_authenticated(&self, token: &SessionToken) -> bool {
    self.current_user(token).is_some()
  }

  /// Resolves the token to its principal, or `None` when the binding is
  /// absent or expired.
  pub fn current_user(&self, token: &SessionToken) -> Option<AuthenticatedUser> {
    let token_hash = token.hash();
    let binding = self.store.get(&token_hash)?;

    if binding.is_expired() {
      self.store.remove(&token_hash);
      return None;
    }

    Some(AuthenticatedUser {
      user_id: binding.user_id,
      display_name: binding.display_name,
    })
  }

  /// Destroys the binding for this token. Idempotent.
  pub fn terminate(&self, token: &SessionToken) {
    self.store.remove(&token.hash());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemorySessionStore;

  fn manager(ttl_seconds: i64) -> SessionManager {
    SessionManager::new(Arc::new(InMemorySessionStore::new()), ttl_seconds)
  }

  #[test]
  fn established_session_resolves_to_its_principal() {
    let manager = manager(3600);
    let user_id = Uuid::new_v4();

    let token = manager.establish(user_id, "Jane Doe");

    assert!(manager.is_authenticated(&token));
    let current = manager.current_user(&token).unwrap();
    assert_eq!(current.user_id, user_id);
    assert_eq!(current.display_name, "Jane Doe");
  }

  #[test]
  fn unknown_token_is_not_authenticated() {
    let manager = manager(3600);
    assert!(!manager.is_authenticated(&SessionToken::generate()));
  }

  #[test]
  fn terminate_destroys_the_binding() {
    let manager = manager(3600);
    let token = manager.establish(Uuid::new_v4(), "Jane Doe");

    manager.terminate(&token);
    assert!(!manager.is_authenticated(&token));

    // Idempotent
    manager.terminate(&token);
  }

  #[test]
  fn expired_binding_behaves_like_a_missing_one() {
    let manager = manager(-1);
    let token = manager.establish(Uuid::new_v4(), "Jane Doe");

    assert!(manager.current_user(&token).is_none());
    assert!(!manager.is_authenticated(&token));
  }

  #[test]
  fn each_login_issues_a_fresh_token() {
    let manager = manager(3600);
    let user_id = Uuid::new_v4();

    let first = manager.establish(user_id, "Jane Doe");
    let second = manager.establish(user_id, "Jane Doe");

    assert_ne!(first.as_str(), second.as_str());
    // Both remain valid until terminated or expired
    assert!(manager.is_authenticated(&first));
    assert!(manager.is_authenticated(&second));
  }
}
