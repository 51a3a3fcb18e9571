use std::sync::Arc;

use crate::user::application::{
    ports::{
        incoming::use_cases::{
            ChangeEmailUseCase, ChangePasswordUseCase, ChangeUsernameUseCase, GetUsersUseCase,
            IssueResetCodeUseCase, RegisterUserUseCase, RemoveUserUseCase, ResetPasswordUseCase,
            VerifyCredentialsUseCase,
        },
        outgoing::{PasswordHasher, ResetCodeGenerator, UserQuery, UserRepository},
    },
    services::{
        ChangeEmailService, ChangePasswordService, ChangeUsernameService, GetUsersService,
        IssueResetCodeService, RegisterUserService, RemoveUserService, ResetPasswordService,
        VerifyCredentialsService,
    },
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub verify_credentials: Arc<dyn VerifyCredentialsUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub change_email: Arc<dyn ChangeEmailUseCase + Send + Sync>,
    pub change_username: Arc<dyn ChangeUsernameUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveUserUseCase + Send + Sync>,
    pub issue_reset_code: Arc<dyn IssueResetCodeUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
}

impl UserUseCases {
    /// Wires every user service over one query/repository pair.
    pub fn new<Q, R>(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        reset_codes: Arc<dyn ResetCodeGenerator + Send + Sync>,
    ) -> Self
    where
        Q: UserQuery + Clone + Send + Sync + 'static,
        R: UserRepository + Clone + Send + Sync + 'static,
    {
        Self {
            register: Arc::new(RegisterUserService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&hasher),
            )),
            get_list: Arc::new(GetUsersService::new(query.clone())),
            verify_credentials: Arc::new(VerifyCredentialsService::new(
                query.clone(),
                Arc::clone(&hasher),
            )),
            change_password: Arc::new(ChangePasswordService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&hasher),
            )),
            change_email: Arc::new(ChangeEmailService::new(query.clone(), repository.clone())),
            change_username: Arc::new(ChangeUsernameService::new(
                query.clone(),
                repository.clone(),
            )),
            remove: Arc::new(RemoveUserService::new(query.clone(), repository.clone())),
            issue_reset_code: Arc::new(IssueResetCodeService::new(
                query.clone(),
                repository.clone(),
                reset_codes,
            )),
            reset_password: Arc::new(ResetPasswordService::new(query, repository, hasher)),
        }
    }
}
