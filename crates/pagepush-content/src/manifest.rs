//! JSON page manifests for the static-HTML variant.
//!
//! A manifest lists the pages to update and, for each, the local file
//! holding its HTML body. File paths are interpreted relative to the
//! manifest's own directory so a manifest can be invoked from anywhere.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ContentError;
use crate::page::ResolvedPage;

/// Manifest listing the pages to publish.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Pages to update, in publish order.
    pub pages: Vec<ManifestPage>,

    /// Directory the manifest was loaded from (set after loading).
    #[serde(skip)]
    base_dir: PathBuf,
}

/// A single manifest entry: target page plus the file holding its body.
#[derive(Debug, Deserialize)]
pub struct ManifestPage {
    /// Target page ID on the remote service.
    pub page_id: String,
    /// Page title to set.
    pub page_title: String,
    /// Version number to write.
    pub version: u32,
    /// HTML file path, relative to the manifest.
    pub html_file: PathBuf,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest: Self =
            serde_json::from_str(&content).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        manifest.base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(manifest)
    }

    /// Read each page's HTML body, yielding outcomes in entry order.
    ///
    /// A page whose file cannot be read produces an error outcome for
    /// that page; the remaining pages still resolve.
    pub fn resolve(&self) -> Vec<Result<ResolvedPage, ContentError>> {
        self.pages
            .iter()
            .map(|page| self.resolve_page(page))
            .collect()
    }

    fn resolve_page(&self, page: &ManifestPage) -> Result<ResolvedPage, ContentError> {
        let path = self.base_dir.join(&page.html_file);
        let html = std::fs::read_to_string(&path)
            .map_err(|source| ContentError::Read { path, source })?;
        Ok(ResolvedPage {
            page_id: page.page_id.clone(),
            title: page.page_title.clone(),
            version: page.version,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("pages.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_parses_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{
  "pages": [
    {"page_id": "123", "page_title": "Release Notes", "version": 4, "html_file": "notes.html"},
    {"page_id": "456", "page_title": "Overview", "version": 2, "html_file": "sub/overview.html"}
  ]
}"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.pages.len(), 2);
        assert_eq!(manifest.pages[0].page_id, "123");
        assert_eq!(manifest.pages[0].page_title, "Release Notes");
        assert_eq!(manifest.pages[0].version, 4);
        assert_eq!(manifest.pages[1].html_file, PathBuf::from("sub/overview.html"));
    }

    #[test]
    fn load_invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{not json");

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
        assert!(err.to_string().contains("pages.json"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Manifest::load(Path::new("/nonexistent/pages.json")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/pages.json"));
    }

    #[test]
    fn resolve_reads_files_relative_to_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.html"), "<p>notes</p>").unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{"pages": [{"page_id": "123", "page_title": "Notes", "version": 1, "html_file": "notes.html"}]}"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        let resolved = manifest.resolve();
        assert_eq!(resolved.len(), 1);
        let page = resolved[0].as_ref().unwrap();
        assert_eq!(page.page_id, "123");
        assert_eq!(page.title, "Notes");
        assert_eq!(page.version, 1);
        assert_eq!(page.html, "<p>notes</p>");
    }

    #[test]
    fn resolve_missing_file_fails_only_that_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.html"), "<p>ok</p>").unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{
  "pages": [
    {"page_id": "1", "page_title": "Missing", "version": 1, "html_file": "gone.html"},
    {"page_id": "2", "page_title": "Present", "version": 1, "html_file": "ok.html"}
  ]
}"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        let resolved = manifest.resolve();
        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].is_err());
        assert!(resolved[1].is_ok());
        assert_eq!(resolved[1].as_ref().unwrap().html, "<p>ok</p>");
    }

    #[test]
    fn resolve_empty_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"pages": []}"#);

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.resolve().is_empty());
    }
}
