use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::user::application::domain::entities::ResetCode;
use crate::user::application::ports::outgoing::{HashError, PasswordHasher, ResetCodeGenerator};

// ============================================================
// Password hashing
// ============================================================

/// Reversible "hash" so tests stay fast and assertions stay readable.
#[derive(Clone, Copy, Default)]
pub struct PlainHasher;

impl PlainHasher {
    pub fn hash_of(password: &str) -> String {
        format!("plain${password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if !hash.starts_with("plain$") {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == Self::hash_of(password))
    }
}

#[derive(Clone, Copy, Default)]
pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

// ============================================================
// Reset codes
// ============================================================

pub struct FixedResetCodeGenerator {
    code: u32,
}

impl FixedResetCodeGenerator {
    pub fn new(code: u32) -> Self {
        Self { code }
    }
}

impl ResetCodeGenerator for FixedResetCodeGenerator {
    fn generate(&self) -> ResetCode {
        ResetCode::from_number(self.code).unwrap()
    }
}

/// Hands out the given codes in order, one per draw.
pub struct SequenceResetCodeGenerator {
    codes: Mutex<VecDeque<u32>>,
}

impl SequenceResetCodeGenerator {
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            codes: Mutex::new(codes.into_iter().collect()),
        }
    }
}

impl ResetCodeGenerator for SequenceResetCodeGenerator {
    fn generate(&self) -> ResetCode {
        let code = self
            .codes
            .lock()
            .unwrap()
            .pop_front()
            .expect("sequence exhausted");
        ResetCode::from_number(code).unwrap()
    }
}
