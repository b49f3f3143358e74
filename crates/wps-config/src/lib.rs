//! # Work Package Configuration
//!
//! [`Settings`] is loaded from a YAML file layered under `wps_`-prefixed
//! environment variables (component A's configuration schema), and
//! validated once at startup.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;
