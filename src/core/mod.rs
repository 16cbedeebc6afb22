//! Core components of the `market-snapshot` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`SnapClient`] HTTP client and its builder.
//! - The primary [`SnapError`] type.
//! - The provider service traits the aggregation logic is written against.

/// The HTTP client (`SnapClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SnapError`) for the crate.
pub mod error;
/// Service traits abstracting the indicator, price-history and news providers.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SnapClient`
pub use client::{SnapClient, SnapClientBuilder};
pub use error::SnapError;
pub use services::{IndicatorService, NewsService, PriceHistoryService, SummaryRequest};
