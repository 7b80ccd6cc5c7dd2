//! Template rendering for page bodies.
//!
//! Thin wrapper around a minijinja environment with a filesystem loader.
//! Templates see the data file's `common` block, the page's `fields`,
//! and the page title. HTML auto-escaping follows the template's file
//! extension.

use std::path::Path;

use minijinja::{Environment, context, path_loader};

use crate::data::{DataFile, TemplatePage};
use crate::error::ContentError;
use crate::page::ResolvedPage;

/// Renders page templates from a templates directory.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer that loads templates from `templates_dir`.
    #[must_use]
    pub fn new(templates_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir));
        Self { env }
    }

    /// Render one page with the file-level `common` data in scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be loaded or rendering fails.
    pub fn render_page(
        &self,
        data: &DataFile,
        page: &TemplatePage,
    ) -> Result<ResolvedPage, ContentError> {
        let template = self.env.get_template(&page.template)?;
        let html = template.render(context! {
            common => &data.common,
            fields => &page.fields,
            page_title => &page.page_title,
        })?;
        Ok(ResolvedPage {
            page_id: page.page_id.clone(),
            title: page.page_title.clone(),
            version: page.version,
            html,
        })
    }

    /// Render every page in a data file, yielding outcomes in page order.
    pub fn render_all(&self, data: &DataFile) -> Vec<Result<ResolvedPage, ContentError>> {
        data.pages
            .iter()
            .map(|page| self.render_page(data, page))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn data_file(yaml: &str) -> DataFile {
        let mut data: DataFile = serde_yaml::from_str(yaml).unwrap();
        data.path = "test.yaml".into();
        data
    }

    #[test]
    fn render_page_sees_common_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("card.html"),
            "<h1>{{ page_title }}</h1><p>{{ common.team }}: {{ fields.tier }}</p>",
        )
        .unwrap();
        let renderer = TemplateRenderer::new(dir.path());

        let data = data_file(
            r"
common:
  team: payments
pages:
  - page_id: '1'
    page_title: ID Card
    version: 3
    template: card.html
    fields:
      tier: gold
",
        );

        let page = renderer.render_page(&data, &data.pages[0]).unwrap();
        assert_eq!(page.html, "<h1>ID Card</h1><p>payments: gold</p>");
        assert_eq!(page.page_id, "1");
        assert_eq!(page.version, 3);
    }

    #[test]
    fn render_page_escapes_html_values() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("card.html"), "<p>{{ fields.note }}</p>").unwrap();
        let renderer = TemplateRenderer::new(dir.path());

        let data = data_file(
            r"
pages:
  - page_id: '1'
    page_title: Card
    version: 1
    template: card.html
    fields:
      note: <script>alert(1)</script>
",
        );

        let page = renderer.render_page(&data, &data.pages[0]).unwrap();
        assert!(page.html.contains("&lt;script&gt;"));
        assert!(!page.html.contains("<script>"));
    }

    #[test]
    fn render_page_unknown_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = TemplateRenderer::new(dir.path());

        let data = data_file(
            r"
pages:
  - page_id: '1'
    page_title: Card
    version: 1
    template: missing.html
",
        );

        let err = renderer.render_page(&data, &data.pages[0]).unwrap_err();
        assert!(matches!(err, ContentError::Template(_)));
    }

    #[test]
    fn render_all_bad_template_fails_only_that_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.html"), "<p>{{ page_title }}</p>").unwrap();
        let renderer = TemplateRenderer::new(dir.path());

        let data = data_file(
            r"
pages:
  - page_id: '1'
    page_title: Broken
    version: 1
    template: missing.html
  - page_id: '2'
    page_title: Fine
    version: 1
    template: ok.html
",
        );

        let results = renderer.render_all(&data);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().html, "<p>Fine</p>");
    }

    #[test]
    fn render_all_empty_data_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = TemplateRenderer::new(dir.path());
        let data = data_file("common:\n  team: payments\n");
        assert!(renderer.render_all(&data).is_empty());
    }
}
