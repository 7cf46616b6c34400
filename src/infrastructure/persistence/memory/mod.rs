mod session_store;
mod user_repository;

pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
