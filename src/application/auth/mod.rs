//! Authentication use cases
//!
//! The registration and login flows live here as far as the user is
//! concerned: these use cases orchestrate the domain service and are the only
//! layer that turns internal failures into user-facing text.

mod get_current_user;
mod login_user;
mod logout_user;
mod register_user;

pub use get_current_user::{CurrentUserResponse, GetCurrentUserUseCase};
pub use login_user::{LOGIN_FAILED, LoginOutcome, LoginUserCommand, LoginUserUseCase};
pub use logout_user::LogoutUserUseCase;
pub use register_user::{
  REGISTRATION_FAILED, REGISTRATION_SUCCESS, RegisterForm, RegisterOutcome, RegisterUserCommand,
  RegisterUserUseCase,
};
