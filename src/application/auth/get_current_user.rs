use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// The authenticated principal behind a request
#[derive(Debug, Clone)]
pub struct CurrentUserResponse {
  pub user_id: Uuid,
  pub display_name: String,
}

/// Use case for resolving the current authenticated user
pub struct GetCurrentUserUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentUserUseCase {
  /// Creates a new instance of GetCurrentUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Resolves the token string to its principal; `None` for a malformed,
  /// unknown or expired token.
  pub fn execute(&self, session_token: &str) -> Option<CurrentUserResponse> {
    let token = SessionToken::from_string(session_token).ok()?;
    let user = self.auth_service.current_user(&token)?;

    Some(CurrentUserResponse {
      user_id: user.user_id,
      display_name: user.display_name,
    })
  }
}
