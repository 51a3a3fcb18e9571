use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("Username must be 3 to 20 characters of letters, digits or underscore")]
    InvalidFormat,
}

/// A username that satisfies `^[A-Za-z0-9_]{3,20}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        if username_pattern().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(UsernameError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("static username pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetCodeError {
    #[error("Reset code must be a 6-digit number between 100000 and 999999")]
    InvalidFormat,
}

/// Six-digit numeric password reset code.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResetCode(String);

impl ResetCode {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;

    pub fn from_number(n: u32) -> Result<Self, ResetCodeError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n.to_string()))
        } else {
            Err(ResetCodeError::InvalidFormat)
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ResetCodeError> {
        let raw = raw.trim();
        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResetCodeError::InvalidFormat);
        }
        let n: u32 = raw.parse().map_err(|_| ResetCodeError::InvalidFormat)?;
        Self::from_number(n)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Reset codes are bearer credentials
impl fmt::Debug for ResetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResetCode(******)")
    }
}
