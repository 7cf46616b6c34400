use actix_web::{
  HttpRequest, HttpResponse,
  cookie::{Cookie, SameSite},
  http::header,
  web,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::flash::Flash;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::{
  LoginOutcome, LoginUserCommand, LoginUserUseCase, LogoutUserUseCase, REGISTRATION_SUCCESS,
  RegisterOutcome, RegisterUserCommand, RegisterUserUseCase,
};

const SESSION_COOKIE: &str = "session_token";

/// Extract the session token from the request cookie, if present
pub(crate) fn session_token(req: &HttpRequest) -> Option<String> {
  req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}

fn session_cookie(token: String) -> Cookie<'static> {
  Cookie::build(SESSION_COOKIE, token)
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .finish()
}

fn clear_session_cookie() -> Cookie<'static> {
  let mut cookie = Cookie::new(SESSION_COOKIE, "");
  cookie.set_path("/");
  cookie.make_removal();
  cookie
}

#[derive(Deserialize)]
pub struct RegisterFormData {
  full_name: String,
  email: String,
  password: String,
  confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginFormData {
  email: String,
  password: String,
}

/// Render the registration page
pub async fn register_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let html = templates
    .render_page("pages/register.html.tera", "Register")
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Handle registration form submission
pub async fn register_submit(
  form: web::Form<RegisterFormData>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let command = RegisterUserCommand {
    full_name: form.full_name,
    email: form.email,
    password: form.password,
    confirm_password: form.confirm_password,
  };

  match use_case.execute(command).await {
    RegisterOutcome::Success { .. } => {
      // One-shot success notice, then over to the login page
      Ok(
        HttpResponse::SeeOther()
          .cookie(Flash::set(REGISTRATION_SUCCESS))
          .insert_header((header::LOCATION, "/login"))
          .finish(),
      )
    }
    RegisterOutcome::Failure {
      violations,
      repopulate,
    } => {
      let mut context = tera::Context::new();
      context.insert("title", "Register");
      context.insert("violations", &violations);
      context.insert("full_name", &repopulate.full_name);
      context.insert("email", &repopulate.email);

      let html = templates
        .render("pages/register.html.tera", &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::BadRequest()
          .content_type("text/html")
          .body(html),
      )
    }
  }
}

/// Render the login page, showing any pending one-shot notice
pub async fn login_page(
  templates: web::Data<TemplateEngine>,
  req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
  let (notice, removal) = Flash::consume(&req);

  let mut context = tera::Context::new();
  context.insert("title", "Login");
  if let Some(notice) = notice {
    context.insert("notice", &notice);
  }

  let html = templates
    .render("pages/login.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(
    HttpResponse::Ok()
      .cookie(removal)
      .content_type("text/html")
      .body(html),
  )
}

/// Handle login form submission
pub async fn login_submit(
  form: web::Form<LoginFormData>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let command = LoginUserCommand {
    email: form.email,
    password: form.password,
  };

  match use_case.execute(command).await {
    LoginOutcome::Success { session_token, .. } => Ok(
      HttpResponse::SeeOther()
        .cookie(session_cookie(session_token))
        .insert_header((header::LOCATION, "/home"))
        .finish(),
    ),
    LoginOutcome::Failure { message, email } => {
      let mut context = tera::Context::new();
      context.insert("title", "Login");
      context.insert("error", message);
      context.insert("email", &email);

      let html = templates
        .render("pages/login.html.tera", &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::BadRequest()
          .content_type("text/html")
          .body(html),
      )
    }
  }
}

/// Handle logout: terminate the session and clear the cookie
pub async fn logout(
  use_case: web::Data<Arc<LogoutUserUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
  if let Some(token) = session_token(&req) {
    use_case.execute(&token);
  }

  Ok(
    HttpResponse::SeeOther()
      .cookie(clear_session_cookie())
      .insert_header((header::LOCATION, "/login"))
      .finish(),
  )
}
