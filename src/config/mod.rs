//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → VisionConfig (validated, immutable)
//!     → HttpAnnotator + ClientOptions
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets are referenced by environment variable name where possible

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::VisionConfig;
pub use schema::AuthConfig;
pub use schema::ClientConfig;
pub use schema::LimitsConfig;
