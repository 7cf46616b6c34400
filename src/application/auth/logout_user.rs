use std::sync::Arc;

use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Use case for logging out a user
pub struct LogoutUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LogoutUserUseCase {
  /// Creates a new instance of LogoutUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Terminates the session for the given token string.
  ///
  /// A malformed or unknown token means there is no session to terminate, so
  /// the operation silently succeeds either way.
  pub fn execute(&self, session_token: &str) {
    if let Ok(token) = SessionToken::from_string(session_token) {
      self.auth_service.logout(&token);
    }
  }
}
