mod config_error;
mod error_code;
mod pitwall_error;

pub use config_error::ConfigError;
pub use error_code::{codes, PitwallErrorCode};
pub use pitwall_error::{PitwallError, PitwallResult};
