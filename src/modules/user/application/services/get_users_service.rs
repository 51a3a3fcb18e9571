use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{GetUsersError, GetUsersUseCase, UserView},
    outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserView>, GetUsersError> {
        let users = self
            .query
            .list_users()
            .await
            .map_err(|e| GetUsersError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(UserView::from).collect())
    }
}
