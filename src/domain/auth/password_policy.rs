use thiserror::Error;

/// A single password-strength rule violation.
///
/// The `Display` form of each variant is the exact user-facing message; the
/// registration flow surfaces these verbatim since they describe the public
/// policy, not secret data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
  #[error("Password field cannot be empty.")]
  Required,

  #[error("Password cannot contain the word 'password'.")]
  ContainsWordPassword,

  #[error("Password must be greater than 8 characters.")]
  TooShort,

  #[error("Password must contain at least one uppercase letter.")]
  MissingUppercase,

  #[error("Password must contain at least one lowercase letter.")]
  MissingLowercase,

  #[error("Password must contain at least one number.")]
  MissingDigit,

  #[error("Password must contain at least one special character.")]
  MissingSpecial,

  #[error("First character cannot be a number.")]
  LeadingDigit,

  #[error("First character cannot be a special character.")]
  LeadingSpecial,

  #[error("Last character cannot be a special character.")]
  TrailingSpecial,
}

/// Evaluates the password-strength policy against a raw candidate password.
///
/// Returns the ordered list of violations; an empty list means the password is
/// acceptable. The function is pure: no side effects, stable output for
/// identical input. Rules are evaluated independently rather than
/// short-circuited, so a weak password reports every rule it breaks at once.
///
/// An empty password short-circuits to a single [`PolicyViolation::Required`];
/// the first/last-character rules only apply to non-empty input.
pub fn evaluate(password: &str) -> Vec<PolicyViolation> {
  if password.is_empty() {
    return vec![PolicyViolation::Required];
  }

  let mut violations = Vec::new();

  if password.to_ascii_lowercase().contains("password") {
    violations.push(PolicyViolation::ContainsWordPassword);
  }

  if password.len() <= 8 {
    violations.push(PolicyViolation::TooShort);
  }

  if !password.chars().any(|c| c.is_ascii_uppercase()) {
    violations.push(PolicyViolation::MissingUppercase);
  }

  if !password.chars().any(|c| c.is_ascii_lowercase()) {
    violations.push(PolicyViolation::MissingLowercase);
  }

  if !password.chars().any(|c| c.is_ascii_digit()) {
    violations.push(PolicyViolation::MissingDigit);
  }

  if password.chars().all(|c| c.is_ascii_alphanumeric()) {
    violations.push(PolicyViolation::MissingSpecial);
  }

  // The position rules mirror the original form checks: a digit takes
  // precedence over "special" for the first character.
  if let Some(first) = password.chars().next() {
    if first.is_ascii_digit() {
      violations.push(PolicyViolation::LeadingDigit);
    } else if !first.is_ascii_alphanumeric() {
      violations.push(PolicyViolation::LeadingSpecial);
    }
  }

  if let Some(last) = password.chars().last() {
    if !last.is_ascii_alphanumeric() {
      violations.push(PolicyViolation::TrailingSpecial);
    }
  }

  violations
}
