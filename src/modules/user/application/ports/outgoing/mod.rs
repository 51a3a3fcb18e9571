pub mod password_hasher;
pub mod reset_code_generator;
mod user_query;
mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use reset_code_generator::ResetCodeGenerator;
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError, UserResult};
