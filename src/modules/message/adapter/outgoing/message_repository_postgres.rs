use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    DbErr, NotSet, Set, Statement, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::ActiveModel as MessageActiveModel;
use crate::message::application::domain::entities::{MessageId, Reaction};
use crate::message::application::ports::outgoing::{
    CreateMessageData, MessageQueryResult, MessageRepository, MessageRepositoryError,
};
use crate::topic::application::domain::entities::TopicId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn bump_messages_sent_stmt(author: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE users SET messages_sent = messages_sent + 1 WHERE id = $1",
            vec![author.value().into()],
        )
    }

    fn bump_topic_messages_stmt(topic_id: TopicId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE topics SET messages = messages + 1 WHERE id = $1",
            vec![topic_id.value().into()],
        )
    }

    /// Parent links never cross topics, so holding the child's topic row
    /// serializes every re-parenting that could close a cycle.
    fn lock_topic_of_stmt(child: MessageId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT t.id FROM topics t
            JOIN messages m ON m.topic_id = t.id
            WHERE m.id = $1
            FOR NO KEY UPDATE OF t
            "#,
            vec![child.value().into()],
        )
    }

    /// `id` and every message above it. `UNION` drops repeated rows, so a
    /// corrupted chain still terminates.
    fn ancestry_stmt(id: MessageId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            WITH RECURSIVE chain AS (
                SELECT id, parent_id FROM messages WHERE id = $1
                UNION
                SELECT m.id, m.parent_id FROM messages m
                JOIN chain c ON m.id = c.parent_id
            )
            SELECT id FROM chain
            "#,
            vec![id.value().into()],
        )
    }

    fn set_parent_stmt(child: MessageId, parent: MessageId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE messages SET parent_id = $2 WHERE id = $1",
            vec![child.value().into(), parent.value().into()],
        )
    }

    fn react_stmt(id: MessageId, reaction: Reaction) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE messages SET likes = likes + $2 WHERE id = $1",
            vec![id.value().into(), reaction.delta().into()],
        )
    }

    fn map_db_err(e: DbErr) -> MessageRepositoryError {
        MessageRepositoryError::DatabaseError(e.to_string())
    }

    /// Runs one counter update; zero rows means the referenced row is gone.
    async fn bump(
        txn: &DatabaseTransaction,
        stmt: Statement,
        missing: MessageRepositoryError,
    ) -> Result<(), MessageRepositoryError> {
        let result = txn.execute(stmt).await.map_err(Self::map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(missing);
        }
        Ok(())
    }

    /// Counters first: the updated author and topic rows stay locked until
    /// commit, so neither can vanish before the insert references them.
    async fn insert_counted(
        txn: &DatabaseTransaction,
        data: CreateMessageData,
    ) -> Result<MessageQueryResult, MessageRepositoryError> {
        Self::bump(
            txn,
            Self::bump_messages_sent_stmt(data.author),
            MessageRepositoryError::AuthorNotFound,
        )
        .await?;
        Self::bump(
            txn,
            Self::bump_topic_messages_stmt(data.topic_id),
            MessageRepositoryError::TopicNotFound,
        )
        .await?;

        let active = MessageActiveModel {
            id: NotSet,
            message: Set(data.message),
            created_at: NotSet,
            likes: Set(0),
            user_id: Set(Some(data.author.value())),
            parent_id: Set(None),
            topic_id: Set(data.topic_id.value()),
        };

        let inserted = active.insert(txn).await.map_err(Self::map_db_err)?;
        Ok(inserted.to_query_result())
    }

    async fn link_to_parent(
        txn: &DatabaseTransaction,
        child: MessageId,
        parent: MessageId,
    ) -> Result<(), MessageRepositoryError> {
        let locked = txn
            .query_one(Self::lock_topic_of_stmt(child))
            .await
            .map_err(Self::map_db_err)?;
        if locked.is_none() {
            return Err(MessageRepositoryError::MessageNotFound);
        }

        let rows = txn
            .query_all(Self::ancestry_stmt(parent))
            .await
            .map_err(Self::map_db_err)?;
        let chain = rows
            .iter()
            .map(|row| row.try_get::<i64>("", "id").map(MessageId::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)?;

        // The chain starts at the parent itself, so self-links are caught too
        if chain.is_empty() {
            return Err(MessageRepositoryError::ParentNotFound);
        }
        if chain.contains(&child) {
            return Err(MessageRepositoryError::CycleDetected);
        }

        let result = txn
            .execute(Self::set_parent_stmt(child, parent))
            .await
            .map_err(Self::map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(MessageRepositoryError::MessageNotFound);
        }
        Ok(())
    }

    async fn update_one(&self, stmt: Statement) -> Result<(), MessageRepositoryError> {
        let result = self.db.execute(stmt).await.map_err(Self::map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(MessageRepositoryError::MessageNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageQueryResult, MessageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let result = Self::insert_counted(&txn, data).await;
        match result {
            Ok(message) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(message)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn set_parent(
        &self,
        child: MessageId,
        parent: MessageId,
    ) -> Result<(), MessageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let result = Self::link_to_parent(&txn, child, parent).await;
        match result {
            Ok(()) => txn.commit().await.map_err(Self::map_db_err),
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn react(
        &self,
        id: MessageId,
        reaction: Reaction,
    ) -> Result<(), MessageRepositoryError> {
        self.update_one(Self::react_stmt(id, reaction)).await
    }
}
