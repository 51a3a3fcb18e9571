use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::{
    Column as MessageColumn, Entity as MessageEntity, Model as MessageModel,
};
use crate::message::application::domain::entities::MessageId;
use crate::message::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageQueryResult,
};
use crate::topic::application::domain::entities::TopicId;

#[derive(Debug, Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn find_by_id(
        &self,
        id: MessageId,
    ) -> Result<Option<MessageQueryResult>, MessageQueryError> {
        let model = MessageEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(MessageModel::to_query_result))
    }

    async fn list_by_topic(
        &self,
        topic_id: TopicId,
    ) -> Result<Vec<MessageQueryResult>, MessageQueryError> {
        let models: Vec<MessageModel> = MessageEntity::find()
            .filter(MessageColumn::TopicId.eq(topic_id.value()))
            .order_by_asc(MessageColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(MessageModel::to_query_result)
            .collect())
    }
}
