//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or the configured level)
//!     → Metrics endpoint (Prometheus scrape, only when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to the request span, so every event inside a handler carries it
//! - Recording metrics without an installed exporter is a no-op

pub mod logging;
pub mod metrics;
