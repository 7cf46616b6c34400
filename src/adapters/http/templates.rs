use std::sync::Arc;
use tera::Tera;

/// Template engine wrapper for rendering HTML pages.
///
/// Autoescaping is on for all templates, so user-supplied text (names,
/// emails, violation messages) is escaped at render time and nowhere else;
/// the values used for comparison and hashing are never altered.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec![".html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }

  /// Render a page with just a title in the context
  pub fn render_page(&self, template: &str, title: &str) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("title", title);
    self.tera.render(template, &context)
  }
}
