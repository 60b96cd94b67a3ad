//! Campaign Console - tokenization and entity resolution for console commands

pub mod command;
pub mod console;
pub mod core;
pub mod world;
