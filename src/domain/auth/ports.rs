use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{SessionBinding, User};
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash, TokenHash};

/// Credential store port.
///
/// Email uniqueness is enforced here as a hard constraint: `insert` must be
/// atomic and fail with `RepositoryError::DuplicateKey` when the email is
/// already taken, independent of any pre-check performed by the flows.
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new credential record. Fails atomically on duplicate email.
  async fn insert(&self, user: User) -> Result<User, AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with the configured work factor
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a stored hash using the hash
  /// function's own verification primitive
  async fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, AuthError>;
}

/// Storage port for session bindings, keyed by token hash.
///
/// Where and how bindings persist (in-process map, database) is an
/// infrastructure concern; the session manager only relies on these three
/// operations.
pub trait SessionStore: Send + Sync {
  /// Stores a binding under the given token hash, replacing any prior one
  fn put(&self, token_hash: TokenHash, binding: SessionBinding);

  /// Looks up a binding; expiry is the caller's concern
  fn get(&self, token_hash: &TokenHash) -> Option<SessionBinding>;

  /// Removes a binding; removing an absent binding is a no-op
  fn remove(&self, token_hash: &TokenHash);
}
