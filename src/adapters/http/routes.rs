use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  GetCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RegisterUserUseCase,
};

use super::handlers::{pages, web_auth};
use super::templates::TemplateEngine;

/// Everything the portal routes need to run, bundled so `main` wires it once.
#[derive(Clone)]
pub struct PortalDependencies {
  pub templates: TemplateEngine,
  pub register_use_case: Arc<RegisterUserUseCase>,
  pub login_use_case: Arc<LoginUserUseCase>,
  pub logout_use_case: Arc<LogoutUserUseCase>,
  pub current_user_use_case: Arc<GetCurrentUserUseCase>,
}

/// Configure the patient portal routes
///
/// # Routes
///
/// - GET / - Public landing page
/// - GET /register - Registration form
/// - POST /register - Registration form submission
/// - GET /login - Login form (shows any pending one-shot notice)
/// - POST /login - Login form submission
/// - POST /logout - Terminate the session and clear the cookie
/// - GET /home - Authenticated home page
pub fn configure_portal_routes(cfg: &mut web::ServiceConfig, deps: PortalDependencies) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.logout_use_case))
    .app_data(web::Data::new(deps.current_user_use_case))
    // Public pages
    .route("/", web::get().to(pages::index_page))
    .route("/register", web::get().to(web_auth::register_page))
    .route("/register", web::post().to(web_auth::register_submit))
    .route("/login", web::get().to(web_auth::login_page))
    .route("/login", web::post().to(web_auth::login_submit))
    .route("/logout", web::post().to(web_auth::logout))
    // Authenticated pages
    .route("/home", web::get().to(pages::home_page));
}
