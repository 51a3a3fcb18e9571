pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod user_use_cases;
