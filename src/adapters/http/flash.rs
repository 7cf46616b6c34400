use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};

const FLASH_COOKIE: &str = "flash_msg";

/// One-shot notice carried across a redirect in a short-lived cookie.
///
/// `set` attaches the message to the redirect response; `consume` reads it on
/// the next request and returns a removal cookie alongside, so the message is
/// delivered at most once. Cookie values cannot safely carry spaces or
/// punctuation, so the message travels hex encoded.
pub struct Flash;

impl Flash {
  /// Builds the cookie carrying the message.
  pub fn set(message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, hex::encode(message))
      .path("/")
      .http_only(true)
      .same_site(SameSite::Lax)
      .finish()
  }

  /// Reads the pending message, if any, plus the removal cookie that clears
  /// it. The removal cookie must be attached to the response even when the
  /// message is unreadable, so a corrupt cookie cannot stick around.
  pub fn consume(req: &HttpRequest) -> (Option<String>, Cookie<'static>) {
    let message = req
      .cookie(FLASH_COOKIE)
      .and_then(|cookie| hex::decode(cookie.value()).ok())
      .and_then(|bytes| String::from_utf8(bytes).ok());

    let mut removal = Cookie::new(FLASH_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    (message, removal)
  }
}
