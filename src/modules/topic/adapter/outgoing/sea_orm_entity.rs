use sea_orm::entity::prelude::*;

use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::outgoing::TopicQueryResult;
use crate::user::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub title: String,

    pub messages: i64,

    pub upvotes: i64,

    pub created_at: DateTimeWithTimeZone,

    pub creator_id: Option<i64>,
}

impl Model {
    pub fn to_query_result(self) -> TopicQueryResult {
        TopicQueryResult {
            id: TopicId::from(self.id),
            title: self.title,
            messages: self.messages,
            upvotes: self.upvotes,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            creator_id: self.creator_id.map(UserId::from),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CreatorId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "SetNull"
    )]
    Creator,
}

impl ActiveModelBehavior for ActiveModel {}
