mod argon2_hasher;

pub use argon2_hasher::{
  Argon2PasswordHasher, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM, DEFAULT_TIME_COST,
};
