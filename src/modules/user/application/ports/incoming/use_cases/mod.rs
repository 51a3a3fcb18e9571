mod change_email_use_case;
mod change_password_use_case;
mod change_username_use_case;
mod get_users_use_case;
mod issue_reset_code_use_case;
mod register_user_use_case;
mod remove_user_use_case;
mod reset_password_use_case;
mod verify_credentials_use_case;

pub use change_email_use_case::{
    ChangeEmailCommand, ChangeEmailCommandError, ChangeEmailError, ChangeEmailUseCase,
};
pub use change_password_use_case::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError, ChangePasswordUseCase,
};
pub use change_username_use_case::{
    ChangeUsernameCommand, ChangeUsernameCommandError, ChangeUsernameError, ChangeUsernameUseCase,
};
pub use get_users_use_case::{GetUsersError, GetUsersUseCase, UserView};
pub use issue_reset_code_use_case::{IssueResetCodeError, IssueResetCodeUseCase};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use remove_user_use_case::{RemoveUserError, RemoveUserUseCase};
pub use reset_password_use_case::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError, ResetPasswordUseCase,
};
pub use verify_credentials_use_case::{VerifyCredentialsError, VerifyCredentialsUseCase};
