use std::sync::Arc;

use super::entities::User;
use super::errors::{AuthError, HashError, RepositoryError, ValidationIssue};
use super::password_policy;
use super::ports::{PasswordHasher, UserRepository};
use super::session::SessionManager;
use super::value_objects::{Email, Password, PasswordHash, SessionToken};

/// Authentication service implementing the registration and login flows.
///
/// The service works with internal error variants only; translating failures
/// into user-facing text is the application layer's job.
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  sessions: Arc<SessionManager>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<SessionManager>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      sessions,
    }
  }

  /// Registers a new user.
  ///
  /// Runs the password policy, checks email uniqueness, hashes the password
  /// and persists the credential record. The uniqueness pre-check and the
  /// insert are not atomic together; a race-induced duplicate surfaces from
  /// the store as a constraint violation and is mapped to
  /// [`AuthError::EmailAlreadyExists`] like any other duplicate.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` with the ordered policy violations if
  /// the password is too weak, `AuthError::EmailAlreadyExists` if the email
  /// is taken, or a repository/hash error for infrastructure failures.
  pub async fn register(
    &self,
    full_name: String,
    email: Email,
    password: Password,
  ) -> Result<User, AuthError> {
    let violations = password_policy::evaluate(password.as_str());
    if !violations.is_empty() {
      return Err(AuthError::Validation(
        violations.into_iter().map(ValidationIssue::Policy).collect(),
      ));
    }

    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Err(AuthError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::new(email.into_inner(), password_hash.into_inner(), full_name);

    match self.user_repo.insert(user).await {
      Ok(user) => Ok(user),
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AuthError::EmailAlreadyExists)
      }
      Err(e) => Err(e),
    }
  }

  /// Authenticates a user and establishes a fresh session on success.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password; the caller must not distinguish the two.
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(User, SessionToken), AuthError> {
    let user = self
      .user_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash = PasswordHash::from_hash(&user.password_hash)
      .map_err(|_| AuthError::Hash(HashError::InvalidFormat))?;

    if !self.password_hasher.verify(&password, &stored_hash).await? {
      return Err(AuthError::InvalidCredentials);
    }

    let token = self.sessions.establish(user.id, &user.full_name);

    Ok((user, token))
  }

  /// Terminates the session for this token.
  pub fn logout(&self, token: &SessionToken) {
    self.sessions.terminate(token);
  }

  /// Resolves the session token to its principal, if any.
  pub fn current_user(&self, token: &SessionToken) -> Option<super::session::AuthenticatedUser> {
    self.sessions.current_user(token)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::password_policy::PolicyViolation;
  use crate::infrastructure::persistence::memory::{InMemorySessionStore, InMemoryUserRepository};
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn service() -> AuthService {
    let sessions = SessionManager::new(Arc::new(InMemorySessionStore::new()), 3600);
    AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      // Minimal work factor to keep tests quick
      Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap()),
      Arc::new(sessions),
    )
  }

  #[tokio::test]
  async fn register_persists_a_hashed_credential() {
    let service = service();

    let user = service
      .register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Abc123#de"),
      )
      .await
      .unwrap();

    assert_eq!(user.email, "jane@example.com");
    assert_ne!(user.password_hash, "Abc123#de");
    assert!(user.password_hash.starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn register_rejects_a_weak_password_with_ordered_violations() {
    let service = service();

    let result = service
      .register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("abc"),
      )
      .await;

    match result {
      Err(AuthError::Validation(issues)) => {
        assert_eq!(
          issues,
          vec![
            ValidationIssue::Policy(PolicyViolation::TooShort),
            ValidationIssue::Policy(PolicyViolation::MissingUppercase),
            ValidationIssue::Policy(PolicyViolation::MissingDigit),
            ValidationIssue::Policy(PolicyViolation::MissingSpecial),
          ]
        );
      }
      other => panic!("expected validation failure, got {:?}", other.map(|u| u.email)),
    }
  }

  #[tokio::test]
  async fn register_refuses_a_taken_email() {
    let service = service();
    let email = Email::new("jane@example.com").unwrap();

    service
      .register("Jane Doe".to_string(), email.clone(), Password::new("Abc123#de"))
      .await
      .unwrap();

    let result = service
      .register("Other Jane".to_string(), email, Password::new("Xyz789#ab"))
      .await;

    assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn login_establishes_a_session_for_valid_credentials() {
    let service = service();

    service
      .register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Abc123#de"),
      )
      .await
      .unwrap();

    let (user, token) = service
      .login(Email::new("jane@example.com").unwrap(), Password::new("Abc123#de"))
      .await
      .unwrap();

    let current = service.current_user(&token).unwrap();
    assert_eq!(current.user_id, user.id);
    assert_eq!(current.display_name, "Jane Doe");
  }

  #[tokio::test]
  async fn login_failures_are_indistinguishable() {
    let service = service();

    service
      .register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Abc123#de"),
      )
      .await
      .unwrap();

    let wrong_password = service
      .login(Email::new("jane@example.com").unwrap(), Password::new("wrong"))
      .await;
    let unknown_email = service
      .login(Email::new("nobody@example.com").unwrap(), Password::new("Abc123#de"))
      .await;

    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn concurrent_registrations_for_one_email_store_one_record() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let sessions = SessionManager::new(Arc::new(InMemorySessionStore::new()), 3600);
    let service = Arc::new(AuthService::new(
      repo.clone(),
      Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap()),
      Arc::new(sessions),
    ));

    let (first, second) = tokio::join!(
      service.register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Abc123#de"),
      ),
      service.register(
        "Other Jane".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Xyz789#ab"),
      ),
    );

    // Exactly one attempt wins; the loser sees a duplicate regardless of
    // whether the race is caught by the pre-check or by the store
    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert_eq!(repo.len(), 1);

    let loser = if first.is_ok() { second } else { first };
    assert!(matches!(loser, Err(AuthError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn logout_invalidates_the_session() {
    let service = service();

    service
      .register(
        "Jane Doe".to_string(),
        Email::new("jane@example.com").unwrap(),
        Password::new("Abc123#de"),
      )
      .await
      .unwrap();

    let (_, token) = service
      .login(Email::new("jane@example.com").unwrap(), Password::new("Abc123#de"))
      .await
      .unwrap();

    service.logout(&token);
    assert!(service.current_user(&token).is_none());
  }
}
