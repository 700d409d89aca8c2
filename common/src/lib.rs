pub mod config;
pub mod greeting;
pub mod parity;
pub mod person;
pub mod script;
