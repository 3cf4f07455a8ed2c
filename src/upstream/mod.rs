//! Upstream marketplace API subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (build URL, GET, status check)
//!     → types.rs (decode into Raw* payloads, unknown fields dropped)
//!     → mapping subsystem
//! ```
//!
//! # Design Decisions
//! - No retries, caching or explicit timeouts: a call resolves or fails once
//! - Every failure is an `UpstreamError`; callers decide how it surfaces

pub mod client;
pub mod error;
pub mod types;

pub use client::{MarketplaceClient, SearchQuery};
pub use error::{UpstreamError, UpstreamResult};
pub use types::{
    CategoryId, RawDescription, RawFilter, RawFilterValue, RawItemDetail, RawPicture,
    RawSearchResponse, RawSearchResult, RawShipping,
};
