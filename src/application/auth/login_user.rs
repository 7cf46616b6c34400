use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// The single message shown for every login failure. Unknown email, wrong
/// password, malformed input and store failures must all read identically so
/// a response never reveals whether an account exists.
pub const LOGIN_FAILED: &str = "Login failed. Please check your details and try again.";

/// Command for logging in a user, straight from the form
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

/// User-facing result of a login attempt.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
  Success {
    user_id: Uuid,
    display_name: String,
    /// Opaque token the adapter puts into the session cookie
    session_token: String,
  },
  Failure {
    /// Always [`LOGIN_FAILED`]
    message: &'static str,
    /// Email to re-populate into the form. Never the password.
    email: String,
  },
}

/// Use case for logging in a user.
///
/// The only place login-time `AuthError`s become user-facing text; every
/// failure path funnels into the one generic message.
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  /// Creates a new instance of LoginUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the authentication flow for one form submission.
  pub async fn execute(&self, command: LoginUserCommand) -> LoginOutcome {
    let email_raw = command.email.trim().to_string();

    let failure = |email: String| LoginOutcome::Failure {
      message: LOGIN_FAILED,
      email,
    };

    if email_raw.is_empty() || command.password.is_empty() {
      return failure(email_raw);
    }

    // A malformed email cannot match any stored record; it gets the same
    // generic response as a wrong password, not a validation hint
    let Ok(email) = Email::new(&email_raw) else {
      return failure(email_raw);
    };

    match self
      .auth_service
      .login(email, Password::new(command.password))
      .await
    {
      Ok((user, token)) => {
        tracing::info!(user_id = %user.id, "login successful");
        LoginOutcome::Success {
          user_id: user.id,
          display_name: user.full_name,
          session_token: token.into_inner(),
        }
      }
      Err(AuthError::InvalidCredentials) => failure(email_raw),
      Err(e) => {
        tracing::error!(error = %e, "login failed");
        failure(email_raw)
      }
    }
  }
}
