use actix_web::{HttpRequest, HttpResponse, http::header, web};
use std::sync::Arc;

use crate::adapters::http::handlers::web_auth::session_token;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::GetCurrentUserUseCase;

/// Render the portal landing page
pub async fn index_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let html = templates
    .render_page("pages/index.html.tera", "Primary Oaks Surgery")
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Render the authenticated home page, or bounce to login
pub async fn home_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<GetCurrentUserUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
  let current = session_token(&req).and_then(|token| use_case.execute(&token));

  let Some(user) = current else {
    return Ok(
      HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login"))
        .finish(),
    );
  };

  let mut context = tera::Context::new();
  context.insert("title", "Home");
  context.insert(
    "user",
    &serde_json::json!({
        "display_name": user.display_name,
    }),
  );

  let html = templates
    .render("pages/home.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
