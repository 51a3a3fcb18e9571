pub mod message;
pub mod topic;
pub mod user;
