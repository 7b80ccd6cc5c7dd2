//! Page publisher for Confluence.
//!
//! This module provides the [`PagePublisher`] struct that drives the
//! update workflow for a batch of resolved pages:
//!
//! 1. Construct the versioned storage-format payload
//! 2. Issue the update request
//! 3. Record a per-page outcome
//!
//! A failing page is recorded and publishing continues with the next
//! page. In dry-run mode no requests are made at all.
//!
//! # Example
//!
//! ```ignore
//! use pagepush_confluence::{ConfluenceClient, PagePublisher};
//!
//! let client = ConfluenceClient::new("https://confluence.example.com", token);
//! let publisher = PagePublisher::new(&client);
//!
//! let report = publisher.publish_all(&pages);
//! for outcome in &report.outcomes {
//!     println!("{}: {:?}", outcome.page_id, outcome.result.is_ok());
//! }
//! ```

mod executor;
mod result;

pub use executor::PagePublisher;
pub use result::{PageOutcome, PublishReport, PublishedPage};
