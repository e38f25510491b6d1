//! dukcapilctl - offline inspection of the service-desk bot's tables.

pub mod cli;
pub mod commands;
pub mod output;
