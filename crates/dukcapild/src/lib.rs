//! dukcapild - Telegram transport for the Dispendukcapil service-desk bot.

pub mod config;
pub mod handlers;

pub use config::Config;
pub use handlers::{answer, plan, BotData, Incoming, Outgoing};
