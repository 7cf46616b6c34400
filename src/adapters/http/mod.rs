pub mod flash;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use flash::Flash;
pub use routes::{PortalDependencies, configure_portal_routes};
pub use templates::TemplateEngine;
