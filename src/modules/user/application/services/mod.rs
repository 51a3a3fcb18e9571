mod change_email_service;
mod change_password_service;
mod change_username_service;
mod get_users_service;
mod issue_reset_code_service;
mod register_user_service;
mod remove_user_service;
mod reset_password_service;
mod verify_credentials_service;

pub use change_email_service::ChangeEmailService;
pub use change_password_service::ChangePasswordService;
pub use change_username_service::ChangeUsernameService;
pub use get_users_service::GetUsersService;
pub use issue_reset_code_service::IssueResetCodeService;
pub use register_user_service::RegisterUserService;
pub use remove_user_service::RemoveUserService;
pub use reset_password_service::ResetPasswordService;
pub use verify_credentials_service::VerifyCredentialsService;
