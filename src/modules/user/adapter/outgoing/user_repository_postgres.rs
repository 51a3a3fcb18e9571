use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::shared::db::is_unique_violation;
use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            UserRepositoryError::UserAlreadyExists
        } else {
            UserRepositoryError::DatabaseError(e.to_string())
        }
    }

    /// Single-column UPDATE by id; zero affected rows means the user is gone.
    /// A unique violation on `column` is reported as `conflict`.
    async fn update_column(
        &self,
        user_id: UserId,
        column: UserColumn,
        value: Option<String>,
        conflict: UserRepositoryError,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(column, Expr::value(value))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    conflict
                } else {
                    UserRepositoryError::DatabaseError(e.to_string())
                }
            })?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn detach_topics_stmt(user_id: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE topics SET creator_id = NULL WHERE creator_id = $1",
            vec![user_id.value().into()],
        )
    }

    fn detach_messages_stmt(user_id: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE messages SET user_id = NULL WHERE user_id = $1",
            vec![user_id.value().into()],
        )
    }

    fn delete_stmt(user_id: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            vec![user_id.value().into()],
        )
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active = UserActiveModel {
            id: NotSet,
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            email: Set(data.email),
            reset_code: Set(None),
            topics_opened: Set(0),
            messages_sent: Set(0),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_column(
            user_id,
            UserColumn::PasswordHash, Some(password_hash),
            UserRepositoryError::UserAlreadyExists,
        )
        .await
    }

    async fn update_email(
        &self,
        user_id: UserId,
        email: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_column(
            user_id,
            UserColumn::Email, Some(email),
            UserRepositoryError::UserAlreadyExists,
        )
        .await
    }

    async fn update_username(
        &self,
        user_id: UserId,
        username: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_column(
            user_id,
            UserColumn::Username, Some(username),
            UserRepositoryError::UserAlreadyExists,
        )
        .await
    }

    async fn set_reset_code(
        &self,
        user_id: UserId,
        code: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_column(
            user_id,
            UserColumn::ResetCode,
            Some(code),
            UserRepositoryError::ResetCodeTaken,
        )
        .await
    }

    async fn complete_password_reset(
        &self,
        user_id: UserId,
        code: String,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(password_hash))
            .col_expr(UserColumn::ResetCode, Expr::value(Option::<String>::None))
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::ResetCode.eq(code))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        // Consumed concurrently, or replaced by a newer code
        if result.rows_affected == 0 {
            return Err(UserRepositoryError::StaleResetCode);
        }
        Ok(())
    }

    /// Authored topics and messages survive with their author cleared.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        for stmt in [
            Self::detach_topics_stmt(user_id),
            Self::detach_messages_stmt(user_id),
        ] {
            if let Err(e) = txn.execute(stmt).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        let deleted = match txn.execute(Self::delete_stmt(user_id)).await {
            Ok(res) => res.rows_affected(),
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if deleted == 0 {
            let _ = txn.rollback().await;
            return Err(UserRepositoryError::UserNotFound);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
