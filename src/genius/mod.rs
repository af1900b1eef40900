//! Genius API integration
//!
//! Looks up artists on Genius by free-text search term:
//! search songs, take the primary artist of the first hit, then fetch the
//! artist detail for name, ID and follower count.
//!
//! # Architecture
//!
//! - **Domain** (`domain.rs`) - [`ArtistRecord`] rows and [`GeniusError`]
//! - **DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain rows
//! - **Client** (`client.rs`) - Authenticated reqwest session
//! - **Traits** (`traits.rs`) - [`GeniusApi`] seam for mocking
//! - **Service** (`service.rs`) - The [`Genius`] facade the collectors use
//!
//! API docs: https://docs.genius.com

mod adapter;
mod client;
pub mod domain;
pub mod dto;
mod service;
pub mod traits;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeniusClient};
pub use domain::{ArtistRecord, GeniusError, LookupOutcome, NOT_AVAILABLE};
pub use service::{DEFAULT_PER_PAGE, DEFAULT_REQUEST_DELAY, Genius, GeniusSettings};
pub use traits::GeniusApi;
