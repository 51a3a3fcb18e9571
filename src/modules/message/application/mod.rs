pub mod domain;
pub mod ports;
pub mod services;
pub mod message_use_cases;
