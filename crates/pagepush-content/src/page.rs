//! Resolved page content.

/// A page body ready to publish, with its target page and version.
///
/// The version number is taken verbatim from the input; the publishing
/// layer sends it as-is.
#[derive(Debug, Clone)]
pub struct ResolvedPage {
    /// Target page ID on the remote service.
    pub page_id: String,
    /// Page title to set.
    pub title: String,
    /// Version number to write.
    pub version: u32,
    /// HTML body in storage format.
    pub html: String,
}
