//! In-memory implementation of every outgoing port.
//!
//! Mirrors the store's constraints (unique usernames, titles and reset codes,
//! SET NULL on user removal, CASCADE on topic removal, counter bookkeeping)
//! so service flows can be exercised end to end without Postgres.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::message::application::domain::entities::{MessageId, Reaction};
use crate::message::application::ports::outgoing::{
    CreateMessageData, MessageQuery, MessageQueryError, MessageQueryResult, MessageRepository,
    MessageRepositoryError,
};
use crate::topic::application::domain::entities::{TopicId, VoteDirection};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicQueryResult, TopicRepository,
    TopicRepositoryError,
};
use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError, UserResult,
};

use super::stubs::PlainHasher;

#[derive(Default)]
struct ForumState {
    last_user_id: i64,
    last_topic_id: i64,
    last_message_id: i64,
    users: Vec<UserQueryResult>,
    topics: Vec<TopicQueryResult>,
    messages: Vec<MessageQueryResult>,
}

#[derive(Clone, Default)]
pub struct InMemoryForum {
    state: Arc<Mutex<ForumState>>,
    failure: Option<String>,
}

impl InMemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every port call fails with a database error carrying `msg`.
    pub fn failing(msg: &str) -> Self {
        Self {
            state: Arc::default(),
            failure: Some(msg.to_string()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ForumState> {
        self.state.lock().unwrap()
    }

    fn fail<E>(&self, to_err: impl FnOnce(String) -> E) -> Result<(), E> {
        match &self.failure {
            Some(msg) => Err(to_err(msg.clone())),
            None => Ok(()),
        }
    }

    // ============================================================
    // Seeding & inspection
    // ============================================================

    /// Seeds a user whose password is `pw`.
    pub fn seed_user(&self, username: &str, email: &str) -> UserId {
        self.seed_user_with_password(username, email, "pw")
    }

    pub fn seed_user_with_password(&self, username: &str, email: &str, password: &str) -> UserId {
        let mut state = self.state();
        insert_user(
            &mut state,
            CreateUserData {
                username: username.to_string(),
                email: email.to_string(),
                password_hash: PlainHasher::hash_of(password),
            },
        )
        .unwrap()
        .id
    }

    pub fn seed_topic(&self, title: &str, creator: UserId) -> TopicId {
        let mut state = self.state();
        insert_topic(
            &mut state,
            CreateTopicData {
                title: title.to_string(),
                creator,
            },
        )
        .unwrap()
        .id
    }

    pub fn seed_message(&self, topic_id: TopicId, author: UserId, text: &str) -> MessageId {
        let mut state = self.state();
        insert_message(
            &mut state,
            CreateMessageData {
                topic_id,
                author,
                message: text.to_string(),
            },
        )
        .unwrap()
        .id
    }

    pub fn user(&self, username: &str) -> Option<UserQueryResult> {
        self.state()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn topic(&self, title: &str) -> Option<TopicQueryResult> {
        self.state().topics.iter().find(|t| t.title == title).cloned()
    }

    pub fn message(&self, id: MessageId) -> Option<MessageQueryResult> {
        self.state().messages.iter().find(|m| m.id == id).cloned()
    }
}

// ============================================================
// Row helpers (constraint checks live here)
// ============================================================

fn insert_user(
    state: &mut ForumState,
    data: CreateUserData,
) -> Result<UserResult, UserRepositoryError> {
    if state.users.iter().any(|u| u.username == data.username) {
        return Err(UserRepositoryError::UserAlreadyExists);
    }

    state.last_user_id += 1;
    let user = UserQueryResult {
        id: UserId::from(state.last_user_id),
        username: data.username,
        email: data.email,
        password_hash: data.password_hash,
        reset_code: None,
        topics_opened: 0,
        messages_sent: 0,
        created_at: Utc::now(),
    };
    let result = UserResult {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
    };
    state.users.push(user);
    Ok(result)
}

fn insert_topic(
    state: &mut ForumState,
    data: CreateTopicData,
) -> Result<TopicQueryResult, TopicRepositoryError> {
    if state.topics.iter().any(|t| t.title == data.title) {
        return Err(TopicRepositoryError::TopicAlreadyExists);
    }
    let creator = state
        .users
        .iter_mut()
        .find(|u| u.id == data.creator)
        .ok_or(TopicRepositoryError::CreatorNotFound)?;
    creator.topics_opened += 1;

    state.last_topic_id += 1;
    let topic = TopicQueryResult {
        id: TopicId::from(state.last_topic_id),
        title: data.title,
        messages: 0,
        upvotes: 0,
        created_at: Utc::now(),
        creator_id: Some(data.creator),
    };
    state.topics.push(topic.clone());
    Ok(topic)
}

fn insert_message(
    state: &mut ForumState,
    data: CreateMessageData,
) -> Result<MessageQueryResult, MessageRepositoryError> {
    let author_idx = state
        .users
        .iter()
        .position(|u| u.id == data.author)
        .ok_or(MessageRepositoryError::AuthorNotFound)?;
    let topic_idx = state
        .topics
        .iter()
        .position(|t| t.id == data.topic_id)
        .ok_or(MessageRepositoryError::TopicNotFound)?;

    state.users[author_idx].messages_sent += 1;
    state.topics[topic_idx].messages += 1;

    state.last_message_id += 1;
    let message = MessageQueryResult {
        id: MessageId::from(state.last_message_id),
        message: data.message,
        created_at: Utc::now(),
        likes: 0,
        user_id: Some(data.author),
        parent_id: None,
        topic_id: data.topic_id,
    };
    state.messages.push(message.clone());
    Ok(message)
}

/// `id` and every message above it, stopping at a repeat.
fn ancestry(state: &ForumState, id: MessageId) -> Vec<MessageId> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(id);

    while let Some(cur) = current {
        if !seen.insert(cur) {
            break;
        }
        let Some(message) = state.messages.iter().find(|m| m.id == cur) else {
            break;
        };
        chain.push(cur);
        current = message.parent_id;
    }
    chain
}

fn user_mut(
    state: &mut ForumState,
    user_id: UserId,
) -> Result<&mut UserQueryResult, UserRepositoryError> {
    state
        .users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(UserRepositoryError::UserNotFound)
}

// ============================================================
// User ports
// ============================================================

#[async_trait]
impl UserQuery for InMemoryForum {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fail(UserQueryError::DatabaseError)?;
        Ok(self.user(username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fail(UserQueryError::DatabaseError)?;
        Ok(self.state().users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_reset_code(
        &self,
        code: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.fail(UserQueryError::DatabaseError)?;
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.reset_code.as_deref() == Some(code))
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError> {
        self.fail(UserQueryError::DatabaseError)?;
        Ok(self.state().users.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryForum {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        insert_user(&mut self.state(), data)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        user_mut(&mut self.state(), user_id)?.password_hash = password_hash;
        Ok(())
    }

    async fn update_email(
        &self,
        user_id: UserId,
        email: String,
    ) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        user_mut(&mut self.state(), user_id)?.email = email;
        Ok(())
    }

    async fn update_username(
        &self,
        user_id: UserId,
        username: String,
    ) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        let mut state = self.state();
        if state
            .users
            .iter()
            .any(|u| u.username == username && u.id != user_id)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        user_mut(&mut state, user_id)?.username = username;
        Ok(())
    }

    async fn set_reset_code(
        &self,
        user_id: UserId,
        code: String,
    ) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        let mut state = self.state();
        if state
            .users
            .iter()
            .any(|u| u.reset_code.as_deref() == Some(code.as_str()) && u.id != user_id)
        {
            return Err(UserRepositoryError::ResetCodeTaken);
        }
        user_mut(&mut state, user_id)?.reset_code = Some(code);
        Ok(())
    }

    async fn complete_password_reset(
        &self,
        user_id: UserId,
        code: String,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        let mut state = self.state();
        let user = user_mut(&mut state, user_id)?;
        if user.reset_code.as_deref() != Some(code.as_str()) {
            return Err(UserRepositoryError::StaleResetCode);
        }
        user.password_hash = password_hash;
        user.reset_code = None;
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.fail(UserRepositoryError::DatabaseError)?;
        let mut state = self.state();
        let idx = state
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        for topic in state.topics.iter_mut() {
            if topic.creator_id == Some(user_id) {
                topic.creator_id = None;
            }
        }
        for message in state.messages.iter_mut() {
            if message.user_id == Some(user_id) {
                message.user_id = None;
            }
        }
        state.users.remove(idx);
        Ok(())
    }
}

// ============================================================
// Topic ports
// ============================================================

#[async_trait]
impl TopicQuery for InMemoryForum {
    async fn list_topics(&self) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
        self.fail(TopicQueryError::DatabaseError)?;
        Ok(self.state().topics.clone())
    }

    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        self.fail(TopicQueryError::DatabaseError)?;
        Ok(self.topic(title))
    }

    async fn count_topics(&self) -> Result<u64, TopicQueryError> {
        self.fail(TopicQueryError::DatabaseError)?;
        Ok(self.state().topics.len() as u64)
    }
}

#[async_trait]
impl TopicRepository for InMemoryForum {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicQueryResult, TopicRepositoryError> {
        self.fail(TopicRepositoryError::DatabaseError)?;
        insert_topic(&mut self.state(), data)
    }

    async fn delete_topic(&self, title: &str) -> Result<(), TopicRepositoryError> {
        self.fail(TopicRepositoryError::DatabaseError)?;
        let mut state = self.state();
        let idx = state
            .topics
            .iter()
            .position(|t| t.title == title)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        let topic = state.topics.remove(idx);
        state.messages.retain(|m| m.topic_id != topic.id);
        Ok(())
    }

    async fn vote(
        &self,
        title: &str,
        direction: VoteDirection,
    ) -> Result<(), TopicRepositoryError> {
        self.fail(TopicRepositoryError::DatabaseError)?;
        let mut state = self.state();
        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.title == title)
            .ok_or(TopicRepositoryError::TopicNotFound)?;
        topic.upvotes += direction.delta();
        Ok(())
    }
}

// ============================================================
// Message ports
// ============================================================

#[async_trait]
impl MessageQuery for InMemoryForum {
    async fn find_by_id(
        &self,
        id: MessageId,
    ) -> Result<Option<MessageQueryResult>, MessageQueryError> {
        self.fail(MessageQueryError::DatabaseError)?;
        Ok(self.message(id))
    }

    async fn list_by_topic(
        &self,
        topic_id: TopicId,
    ) -> Result<Vec<MessageQueryResult>, MessageQueryError> {
        self.fail(MessageQueryError::DatabaseError)?;
        Ok(self
            .state()
            .messages
            .iter()
            .filter(|m| m.topic_id == topic_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MessageRepository for InMemoryForum {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageQueryResult, MessageRepositoryError> {
        self.fail(MessageRepositoryError::DatabaseError)?;
        insert_message(&mut self.state(), data)
    }

    async fn set_parent(
        &self,
        child: MessageId,
        parent: MessageId,
    ) -> Result<(), MessageRepositoryError> {
        self.fail(MessageRepositoryError::DatabaseError)?;
        let mut state = self.state();
        if !state.messages.iter().any(|m| m.id == child) {
            return Err(MessageRepositoryError::MessageNotFound);
        }
        let chain = ancestry(&state, parent);
        if chain.is_empty() {
            return Err(MessageRepositoryError::ParentNotFound);
        }
        if chain.contains(&child) {
            return Err(MessageRepositoryError::CycleDetected);
        }

        if let Some(message) = state.messages.iter_mut().find(|m| m.id == child) {
            message.parent_id = Some(parent);
        }
        Ok(())
    }

    async fn react(
        &self,
        id: MessageId,
        reaction: Reaction,
    ) -> Result<(), MessageRepositoryError> {
        self.fail(MessageRepositoryError::DatabaseError)?;
        let mut state = self.state();
        let message = state
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MessageRepositoryError::MessageNotFound)?;
        message.likes += reaction.delta();
        Ok(())
    }
}
