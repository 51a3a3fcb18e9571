use sea_orm::entity::prelude::*;

use crate::message::application::domain::entities::MessageId;
use crate::message::application::ports::outgoing::MessageQueryResult;
use crate::topic::application::domain::entities::TopicId;
use crate::user::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub created_at: DateTimeWithTimeZone,

    pub likes: i64,

    pub user_id: Option<i64>,

    pub parent_id: Option<i64>,

    pub topic_id: i64,
}

impl Model {
    pub fn to_query_result(self) -> MessageQueryResult {
        MessageQueryResult {
            id: MessageId::from(self.id),
            message: self.message,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            likes: self.likes,
            user_id: self.user_id.map(UserId::from),
            parent_id: self.parent_id.map(MessageId::from),
            topic_id: TopicId::from(self.topic_id),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "SetNull"
    )]
    Author,

    #[sea_orm(
        belongs_to = "crate::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::topic::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,

    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}
