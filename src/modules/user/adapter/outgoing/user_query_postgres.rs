use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one_by(
        &self,
        filter: impl sea_orm::sea_query::IntoCondition,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(filter)
            .order_by_asc(UserColumn::Id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserModel::to_query_result))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one_by(UserColumn::Username.eq(username)).await
    }

    /// Emails are not unique; the oldest account wins.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one_by(UserColumn::Email.eq(email)).await
    }

    async fn find_by_reset_code(
        &self,
        code: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one_by(UserColumn::ResetCode.eq(code)).await
    }

    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(UserModel::to_query_result).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use crate::user::application::domain::entities::UserId;

    fn user_model(id: i64, username: &str, reset_code: Option<&str>) -> UserModel {
        UserModel {
            id,
            username: username.to_string(),
            password_hash: "hashed".to_string(),
            email: format!("{username}@example.com"),
            reset_code: reset_code.map(str::to_string),
            topics_opened: 2,
            messages_sent: 5,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_username_maps_every_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(7, "alice", None)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_username("alice").await.unwrap().unwrap();

        assert_eq!(user.id, UserId::from(7));
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "hashed");
        assert_eq!(user.topics_opened, 2);
        assert_eq!(user.messages_sent, 5);
        assert!(user.reset_code.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_reset_code_returns_holder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(3, "bob", Some("123456"))]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_reset_code("123456").await.unwrap().unwrap();

        assert_eq!(user.username, "bob");
        assert_eq!(user.reset_code.as_deref(), Some("123456"));
    }

    #[tokio::test]
    async fn test_list_users_keeps_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                user_model(1, "alice", None),
                user_model(2, "bob", None),
            ]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let users = query.list_users().await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_find_by_email_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("a@x.com").await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {other:?}"),
        }
    }
}
