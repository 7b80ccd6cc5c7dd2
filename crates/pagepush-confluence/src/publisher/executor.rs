//! Publisher implementation.

use pagepush_content::ResolvedPage;
use tracing::warn;

use crate::client::ConfluenceClient;
use crate::error::ConfluenceError;

use super::result::{PageOutcome, PublishReport, PublishedPage};

/// Publishes resolved pages to Confluence.
pub struct PagePublisher<'a> {
    client: &'a ConfluenceClient,
    dry_run: bool,
}

impl<'a> PagePublisher<'a> {
    /// Create a new page publisher.
    #[must_use]
    pub fn new(client: &'a ConfluenceClient) -> Self {
        Self {
            client,
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode.
    ///
    /// In dry-run mode no requests are made; each page reports what
    /// would be sent.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Publish a single page.
    ///
    /// # Errors
    ///
    /// Returns an error if the update request fails or the service
    /// rejects it (including version conflicts).
    pub fn publish(&self, page: &ResolvedPage) -> Result<PublishedPage, ConfluenceError> {
        if self.dry_run {
            return Ok(PublishedPage {
                id: page.page_id.clone(),
                title: page.title.clone(),
                version: page.version,
                url: None,
                body_bytes: page.html.len(),
            });
        }

        let updated = self
            .client
            .update_page(&page.page_id, &page.title, page.version, &page.html)?;
        let url = self.client.page_url(&updated);

        Ok(PublishedPage {
            id: updated.id,
            title: updated.title,
            version: updated.version.number,
            url: Some(url),
            body_bytes: page.html.len(),
        })
    }

    /// Publish a batch of pages in order.
    ///
    /// A failing page is recorded in its outcome and publishing
    /// continues with the next page.
    pub fn publish_all(&self, pages: &[ResolvedPage]) -> PublishReport {
        let mut outcomes = Vec::with_capacity(pages.len());
        for page in pages {
            let result = self.publish(page);
            if let Err(err) = &result {
                warn!("Failed to update page {}: {}", page.page_id, err);
            }
            outcomes.push(PageOutcome {
                page_id: page.page_id.clone(),
                title: page.title.clone(),
                result,
            });
        }
        PublishReport { outcomes }
    }
}
