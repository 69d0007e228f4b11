mod error;
mod settings;


pub use error::{ConfigError, Result};
pub use settings::{DEFAULT_HOSTNAME, DEFAULT_PORT, DisplayConfig};
