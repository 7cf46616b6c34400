pub mod entities;
pub mod errors;
pub mod password_policy;
pub mod ports;
pub mod services;
pub mod session;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{SessionBinding, User};
pub use errors::{AuthError, HashError, RepositoryError, ValidationIssue};
pub use password_policy::PolicyViolation;
pub use services::AuthService;
pub use session::{AuthenticatedUser, SessionManager};
pub use value_objects::{Email, Password, PasswordHash, SessionToken, TokenHash};
