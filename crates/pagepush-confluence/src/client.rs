//! Confluence REST API client.
//!
//! Sync HTTP client for the Confluence Server/Data Center REST API
//! with bearer-token (personal access token) authentication.

use std::time::Duration;

use tracing::info;
use ureq::Agent;

use crate::error::ConfluenceError;
use crate::types::Page;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl ConfluenceClient {
    /// Create client with bearer-token authentication.
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Update an existing page to the given version.
    ///
    /// The version number is sent exactly as supplied. The service
    /// rejects stale numbers, so re-running with an already-applied
    /// version fails the page instead of forking its history.
    pub fn update_page(
        &self,
        page_id: &str,
        title: &str,
        version: u32,
        html: &str,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content/{}", self.api_url(), page_id);
        let payload = build_payload(title, version, html);

        info!("Updating page {} to version {}", page_id, version);

        let payload_bytes = serde_json::to_vec(&payload)?;

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])
            .map_err(|e| ConfluenceError::Http {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ConfluenceError::Http {
                status,
                body: error_body,
            });
        }

        let page: Page = body_reader.read_json()?;
        info!("Updated page {} to version {}", page_id, page.version.number);
        Ok(page)
    }

    /// Web URL for a page returned by an update call.
    pub fn page_url(&self, page: &Page) -> String {
        if let Some(links) = &page.links
            && let Some(webui) = &links.webui
        {
            return format!("{}{}", self.base_url, webui);
        }

        format!(
            "{}/pages/viewpage.action?pageId={}",
            self.base_url, page.id
        )
    }
}

/// Request body for a versioned page update.
fn build_payload(title: &str, version: u32, html: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "page",
        "title": title,
        "version": {"number": version},
        "body": {
            "storage": {
                "value": html,
                "representation": "storage"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Links, Version};
    use pretty_assertions::assert_eq;

    #[test]
    fn build_payload_shape() {
        let payload = build_payload("Release Notes", 4, "<p>body</p>");
        assert_eq!(payload["type"], "page");
        assert_eq!(payload["title"], "Release Notes");
        assert_eq!(payload["version"]["number"], 4);
        assert_eq!(payload["body"]["storage"]["value"], "<p>body</p>");
        assert_eq!(payload["body"]["storage"]["representation"], "storage");
    }

    #[test]
    fn build_payload_version_is_passed_through() {
        // The caller owns version monotonicity; nothing increments here.
        let payload = build_payload("T", 1, "");
        assert_eq!(payload["version"]["number"], 1);
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = ConfluenceClient::new("https://confluence.example.com/", "pat");
        assert_eq!(client.base_url(), "https://confluence.example.com");
        assert_eq!(client.api_url(), "https://confluence.example.com/rest/api");
    }

    fn page_with_links(links: Option<Links>) -> Page {
        Page {
            id: "123".to_owned(),
            content_type: "page".to_owned(),
            title: "T".to_owned(),
            version: Version {
                number: 2,
                message: None,
            },
            body: None,
            links,
        }
    }

    #[test]
    fn page_url_prefers_webui_link() {
        let client = ConfluenceClient::new("https://confluence.example.com", "pat");
        let page = page_with_links(Some(Links {
            webui: Some("/display/DOC/T".to_owned()),
            self_link: None,
        }));
        assert_eq!(
            client.page_url(&page),
            "https://confluence.example.com/display/DOC/T"
        );
    }

    #[test]
    fn page_url_falls_back_to_viewpage() {
        let client = ConfluenceClient::new("https://confluence.example.com", "pat");
        let page = page_with_links(None);
        assert_eq!(
            client.page_url(&page),
            "https://confluence.example.com/pages/viewpage.action?pageId=123"
        );
    }
}
