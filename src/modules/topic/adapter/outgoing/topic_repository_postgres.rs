use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, NotSet, Set,
    Statement, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::ActiveModel as TopicActiveModel;
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};
use crate::topic::application::domain::entities::VoteDirection;
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQueryResult, TopicRepository, TopicRepositoryError,
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn bump_topics_opened_stmt(creator: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE users SET topics_opened = topics_opened + 1 WHERE id = $1",
            vec![creator.value().into()],
        )
    }

    /// Messages follow through `ON DELETE CASCADE`.
    fn delete_stmt(title: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "DELETE FROM topics WHERE title = $1",
            vec![title.into()],
        )
    }

    fn vote_stmt(title: &str, direction: VoteDirection) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE topics SET upvotes = upvotes + $2 WHERE title = $1",
            vec![title.into(), direction.delta().into()],
        )
    }

    fn map_db_err(e: DbErr) -> TopicRepositoryError {
        if is_unique_violation(&e) {
            TopicRepositoryError::TopicAlreadyExists
        } else if is_foreign_key_violation(&e) {
            TopicRepositoryError::CreatorNotFound
        } else {
            TopicRepositoryError::DatabaseError(e.to_string())
        }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicQueryResult, TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let active = TopicActiveModel {
            id: NotSet,
            title: Set(data.title),
            messages: Set(0),
            upvotes: Set(0),
            created_at: NotSet,
            creator_id: Set(Some(data.creator.value())),
        };

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let bumped = match txn
            .execute(Self::bump_topics_opened_stmt(data.creator))
            .await
        {
            Ok(res) => res.rows_affected(),
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if bumped == 0 {
            let _ = txn.rollback().await;
            return Err(TopicRepositoryError::CreatorNotFound);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_query_result())
    }

    async fn delete_topic(&self, title: &str) -> Result<(), TopicRepositoryError> {
        let result = self
            .db
            .execute(Self::delete_stmt(title))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        Ok(())
    }

    async fn vote(
        &self,
        title: &str,
        direction: VoteDirection,
    ) -> Result<(), TopicRepositoryError> {
        let result = self
            .db
            .execute(Self::vote_stmt(title, direction))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}
