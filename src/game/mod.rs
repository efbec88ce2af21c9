//! Game module - configuration, the current floor and the message log

pub mod colors;
mod config;
mod floor;
mod messages;

pub use config::{GameConfig, PlayerStats};
pub use floor::Floor;
pub use messages::{Message, MessageLog, DEFAULT_LOG_CAPACITY};
