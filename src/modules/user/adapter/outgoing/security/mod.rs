mod argon2_hasher;
mod random_reset_code;

pub use argon2_hasher::Argon2Hasher;
pub use random_reset_code::RandomResetCodeGenerator;
