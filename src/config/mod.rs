//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, loaded at startup)
//!     → config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply PORT / MELI_API_URL / ... overrides)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with, read_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ProxyConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
