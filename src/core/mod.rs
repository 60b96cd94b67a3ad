pub mod config;
pub mod error;
pub mod types;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use types::EntityKind;
