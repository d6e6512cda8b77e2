//! Upstream bike-share API access.
//!
//! The upstream publishes three independent resources:
//! - the station list (descriptive data, changes rarely)
//! - an availability snapshot, which declares its own refresh rate and
//!   generation timestamp
//! - the open/closed status of the network
//!
//! Each is fetched separately and may fail on its own.

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{BikeClient, BikeClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::UpstreamError;
pub use mock::MockUpstream;
pub use source::UpstreamSource;
