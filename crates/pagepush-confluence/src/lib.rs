//! Confluence page publishing.
//!
//! Sync HTTP client for the Confluence REST API with bearer-token
//! authentication, plus the publisher that drives versioned page
//! updates for a batch of resolved pages.

mod client;
mod error;
mod publisher;
mod types;

pub use client::ConfluenceClient;
pub use error::ConfluenceError;
pub use publisher::{PageOutcome, PagePublisher, PublishReport, PublishedPage};
pub use types::{Body, Links, Page, Storage, Version};
