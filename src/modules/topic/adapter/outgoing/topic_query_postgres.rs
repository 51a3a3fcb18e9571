use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicQueryResult};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_topics(&self) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .order_by_asc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(TopicModel::to_query_result).collect())
    }

    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model = TopicEntity::find()
            .filter(TopicColumn::Title.eq(title))
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(TopicModel::to_query_result))
    }

    async fn count_topics(&self) -> Result<u64, TopicQueryError> {
        TopicEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))
    }
}
