use sea_orm::entity::prelude::*;

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::{UserQueryResult, UserResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub reset_code: Option<String>,
    pub topics_opened: i64,
    pub messages_sent: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_query_result(self) -> UserQueryResult {
        UserQueryResult {
            id: UserId::from(self.id),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            reset_code: self.reset_code,
            topics_opened: self.topics_opened,
            messages_sent: self.messages_sent,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }

    pub fn to_repository_result(self) -> UserResult {
        UserResult {
            id: UserId::from(self.id),
            username: self.username,
            email: self.email,
        }
    }
}
