//! Response mapping subsystem.
//!
//! # Data Flow
//! ```text
//! RawSearchResponse
//!     → category.rs (pick filter list once, resolve each listing's category)
//!     → price.rs (split each price)
//!     → search.rs → PublicSearchResponse
//!
//! RawItemDetail
//!     → price.rs, picture selection, sold quantity
//!     → item.rs → PublicItemDetail (description attached after the second fetch)
//! ```
//!
//! # Design Decisions
//! - Pure functions: no I/O, no failure; shape mismatches degrade to absent fields
//! - Category fallback never fails a request

pub mod category;
pub mod item;
pub mod price;
pub mod search;
pub mod types;

pub use category::{category_values, resolve_category};
pub use item::{map_item, sold_quantity};
pub use price::{format_price, PublicPrice};
pub use search::map_search;
pub use types::{Author, PublicItem, PublicItemDetail, PublicItemResponse, PublicSearchResponse};
