mod change_email;
mod change_password;
mod change_username;
mod get_users;
mod issue_reset_code;
mod register_user;
mod remove_user;
mod reset_password;
mod verify_credentials;

pub use change_email::{change_email_handler, ChangeEmailRequest};
pub use change_password::{change_password_handler, ChangePasswordRequest};
pub use change_username::{change_username_handler, ChangeUsernameRequest};
pub use get_users::get_users_handler;
pub use issue_reset_code::{issue_reset_code_handler, IssueResetCodeRequest, ResetCodeResponse};
pub use register_user::{register_user_handler, RegisterUserRequest};
pub use remove_user::remove_user_handler;
pub use reset_password::{reset_password_handler, ResetPasswordRequest};
pub use verify_credentials::{
    verify_credentials_handler, VerifyCredentialsRequest, VerifyCredentialsResponse,
};

// utoipa path structs, needed by the OpenApi derive
pub use change_email::__path_change_email_handler;
pub use change_password::__path_change_password_handler;
pub use change_username::__path_change_username_handler;
pub use get_users::__path_get_users_handler;
pub use issue_reset_code::__path_issue_reset_code_handler;
pub use register_user::__path_register_user_handler;
pub use remove_user::__path_remove_user_handler;
pub use reset_password::__path_reset_password_handler;
pub use verify_credentials::__path_verify_credentials_handler;
