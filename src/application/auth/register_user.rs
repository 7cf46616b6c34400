use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::{AuthError, ValidationIssue};
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// The single message shown for every registration failure that must not
/// disclose its root cause (duplicate email, store failure). Keeping it one
/// constant guarantees the messages are byte-for-byte identical.
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// One-shot notice set after a successful registration.
pub const REGISTRATION_SUCCESS: &str = "Registration successful! You can now log in.";

/// Command for registering a new user, straight from the form
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub full_name: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
}

/// Values safe to re-populate into the registration form. Never the password.
#[derive(Debug, Clone)]
pub struct RegisterForm {
  pub full_name: String,
  pub email: String,
}

/// User-facing result of a registration attempt.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
  Success {
    user_id: Uuid,
  },
  Failure {
    /// Ordered, user-safe messages: either the verbatim validation issues or
    /// the single generic failure line
    violations: Vec<String>,
    repopulate: RegisterForm,
  },
}

/// Use case for registering a new user.
///
/// This is the only place registration-time `AuthError`s become user-facing
/// text. Validation issues pass through verbatim; everything else collapses
/// into [`REGISTRATION_FAILED`] and the detail goes to the log.
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the registration flow for one form submission.
  pub async fn execute(&self, command: RegisterUserCommand) -> RegisterOutcome {
    let full_name = command.full_name.trim().to_string();
    let email_raw = command.email.trim().to_string();
    let password_raw = command.password.trim().to_string();
    let confirm_raw = command.confirm_password.trim().to_string();

    let repopulate = RegisterForm {
      full_name: full_name.clone(),
      email: email_raw.clone(),
    };

    // Step one: form-level checks. These are aggregated, and the password
    // policy is not consulted until they all pass.
    let mut issues: Vec<ValidationIssue> = Vec::new();

    if full_name.is_empty() || email_raw.is_empty() || password_raw.is_empty() {
      issues.push(ValidationIssue::AllFieldsRequired);
    }

    if password_raw != confirm_raw {
      issues.push(ValidationIssue::PasswordsDoNotMatch);
    }

    let email = match Email::new(&email_raw) {
      Ok(email) => Some(email),
      Err(_) => {
        if !email_raw.is_empty() {
          issues.push(ValidationIssue::InvalidEmail);
        }
        None
      }
    };

    if !issues.is_empty() {
      return RegisterOutcome::Failure {
        violations: issues.iter().map(ToString::to_string).collect(),
        repopulate,
      };
    }

    // Empty email is caught above, so `email` is present here
    let Some(email) = email else {
      return RegisterOutcome::Failure {
        violations: vec![ValidationIssue::InvalidEmail.to_string()],
        repopulate,
      };
    };

    match self
      .auth_service
      .register(full_name, email, Password::new(password_raw))
      .await
    {
      Ok(user) => {
        tracing::info!(user_id = %user.id, "user registered");
        RegisterOutcome::Success { user_id: user.id }
      }
      Err(AuthError::Validation(issues)) => RegisterOutcome::Failure {
        violations: issues.iter().map(ToString::to_string).collect(),
        repopulate,
      },
      Err(AuthError::EmailAlreadyExists) => {
        // Deliberately not logged at error level and never disclosed
        tracing::debug!("registration rejected for an email that is already taken");
        RegisterOutcome::Failure {
          violations: vec![REGISTRATION_FAILED.to_string()],
          repopulate,
        }
      }
      Err(e) => {
        tracing::error!(error = %e, "registration failed");
        RegisterOutcome::Failure {
          violations: vec![REGISTRATION_FAILED.to_string()],
          repopulate,
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::SessionManager;
  use crate::infrastructure::persistence::memory::{InMemorySessionStore, InMemoryUserRepository};
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn use_case() -> RegisterUserUseCase {
    let sessions = SessionManager::new(Arc::new(InMemorySessionStore::new()), 3600);
    let auth_service = AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap()),
      Arc::new(sessions),
    );
    RegisterUserUseCase::new(Arc::new(auth_service))
  }

  fn command(email: &str, password: &str, confirm: &str) -> RegisterUserCommand {
    RegisterUserCommand {
      full_name: "Jane Doe".to_string(),
      email: email.to_string(),
      password: password.to_string(),
      confirm_password: confirm.to_string(),
    }
  }

  #[tokio::test]
  async fn valid_submission_succeeds() {
    let use_case = use_case();
    let outcome = use_case
      .execute(command("jane@example.com", "Abc123#de", "Abc123#de"))
      .await;
    assert!(matches!(outcome, RegisterOutcome::Success { .. }));
  }

  #[tokio::test]
  async fn empty_fields_and_mismatch_are_reported_together() {
    let use_case = use_case();
    let outcome = use_case.execute(command("jane@example.com", "", "x")).await;

    match outcome {
      RegisterOutcome::Failure { violations, .. } => {
        assert_eq!(
          violations,
          vec![
            "All fields are required.".to_string(),
            "Passwords do not match.".to_string(),
          ]
        );
      }
      RegisterOutcome::Success { .. } => panic!("expected failure"),
    }
  }

  #[tokio::test]
  async fn policy_violations_are_surfaced_verbatim() {
    let use_case = use_case();
    let outcome = use_case
      .execute(command("jane@example.com", "Password1!", "Password1!"))
      .await;

    match outcome {
      RegisterOutcome::Failure { violations, .. } => {
        assert!(violations.contains(&"Password cannot contain the word 'password'.".to_string()));
      }
      RegisterOutcome::Success { .. } => panic!("expected failure"),
    }
  }

  #[tokio::test]
  async fn malformed_email_is_a_validation_issue() {
    let use_case = use_case();
    let outcome = use_case
      .execute(command("not-an-email", "Abc123#de", "Abc123#de"))
      .await;

    match outcome {
      RegisterOutcome::Failure { violations, .. } => {
        assert_eq!(violations, vec!["Please enter a valid email address.".to_string()]);
      }
      RegisterOutcome::Success { .. } => panic!("expected failure"),
    }
  }

  #[tokio::test]
  async fn duplicate_email_gets_the_generic_message() {
    let use_case = use_case();

    let first = use_case
      .execute(command("jane@example.com", "Abc123#de", "Abc123#de"))
      .await;
    assert!(matches!(first, RegisterOutcome::Success { .. }));

    let second = use_case
      .execute(command("jane@example.com", "Xyz789#ab", "Xyz789#ab"))
      .await;

    match second {
      RegisterOutcome::Failure { violations, repopulate } => {
        assert_eq!(violations, vec![REGISTRATION_FAILED.to_string()]);
        // The form keeps the name and email, never the password
        assert_eq!(repopulate.full_name, "Jane Doe");
        assert_eq!(repopulate.email, "jane@example.com");
      }
      RegisterOutcome::Success { .. } => panic!("expected failure"),
    }
  }

  #[tokio::test]
  async fn store_outage_gets_the_same_generic_message() {
    use crate::domain::auth::entities::User;
    use crate::domain::auth::errors::RepositoryError;
    use crate::domain::auth::ports::UserRepository;
    use uuid::Uuid;

    struct FailingUserRepository;

    #[async_trait::async_trait]
    impl UserRepository for FailingUserRepository {
      async fn insert(&self, _user: User) -> Result<User, AuthError> {
        Err(AuthError::Repository(RepositoryError::QueryFailed(
          "connection reset".to_string(),
        )))
      }

      async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, AuthError> {
        Err(AuthError::Repository(RepositoryError::QueryFailed(
          "connection reset".to_string(),
        )))
      }

      async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, AuthError> {
        Err(AuthError::Repository(RepositoryError::QueryFailed(
          "connection reset".to_string(),
        )))
      }
    }

    let sessions = SessionManager::new(Arc::new(InMemorySessionStore::new()), 3600);
    let auth_service = AuthService::new(
      Arc::new(FailingUserRepository),
      Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap()),
      Arc::new(sessions),
    );
    let use_case = RegisterUserUseCase::new(Arc::new(auth_service));

    let outcome = use_case
      .execute(command("jane@example.com", "Abc123#de", "Abc123#de"))
      .await;

    // Indistinguishable from the duplicate-email response
    match outcome {
      RegisterOutcome::Failure { violations, .. } => {
        assert_eq!(violations, vec![REGISTRATION_FAILED.to_string()]);
      }
      RegisterOutcome::Success { .. } => panic!("expected failure"),
    }
  }

  #[tokio::test]
  async fn fields_are_trimmed_before_validation() {
    let use_case = use_case();
    let outcome = use_case
      .execute(RegisterUserCommand {
        full_name: "  Jane Doe  ".to_string(),
        email: " jane@example.com ".to_string(),
        password: " Abc123#de ".to_string(),
        confirm_password: " Abc123#de ".to_string(),
      })
      .await;
    assert!(matches!(outcome, RegisterOutcome::Success { .. }));
  }
}
