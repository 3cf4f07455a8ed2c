//! Marketplace Search Proxy Library
//!
//! Forwards search and item-detail requests to a marketplace API and reshapes the JSON
//! responses into a small, stable client-facing schema.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mapping;
pub mod observability;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
