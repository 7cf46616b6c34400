use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential record for a registered portal user.
///
/// `email` is the unique key; `password_hash` is always the output of the
/// adaptive one-way hasher, never the raw password. Created by the
/// registration flow and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's email address (unique)
  pub email: String,
  /// Hashed password using Argon2
  pub password_hash: String,
  /// User's full name
  pub full_name: String,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(email: String, password_hash: String, full_name: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      email,
      password_hash,
      full_name,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      email,
      password_hash,
      full_name,
      created_at,
      updated_at,
    }
  }
}

/// The server-side state a session token points at.
///
/// Bound to exactly one user; created at login, destroyed at logout, treated
/// as absent once expired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionBinding {
  /// The authenticated user this binding belongs to
  pub user_id: Uuid,
  /// Name shown in the authenticated view
  pub display_name: String,
  /// Timestamp when the session expires
  pub expires_at: DateTime<Utc>,
  /// Timestamp when the session was created
  pub created_at: DateTime<Utc>,
}

impl SessionBinding {
  /// Creates a binding that expires `ttl` from now.
  pub fn with_ttl(user_id: Uuid, display_name: String, ttl: Duration) -> Self {
    let now = Utc::now();
    Self {
      user_id,
      display_name,
      expires_at: now + ttl,
      created_at: now,
    }
  }

  /// Checks if the session has expired
  pub fn is_expired(&self) -> bool {
    self.expires_at <= Utc::now()
  }
}
