//! `pagepush render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use pagepush_confluence::PagePublisher;
use pagepush_content::{TemplateRenderer, load_data_dir};

use crate::error::CliError;
use crate::output::Output;

use super::connection::ConnectionArgs;
use super::report::{self, PageSource, RunSummary};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Directory of YAML page-data files.
    data_dir: PathBuf,

    /// Directory of HTML templates (default: "templates" beside the data directory).
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Preview the updates without calling the page service.
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    connection: ConnectionArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the data
    /// directory cannot be listed. Per-file and per-page failures are
    /// reported and reflected in the summary instead.
    pub(crate) fn execute(self) -> Result<RunSummary, CliError> {
        let output = Output::new();

        let client = self.connection.client(&output)?;
        let publisher = PagePublisher::new(&client).dry_run(self.dry_run);

        let templates_dir = self
            .templates
            .clone()
            .unwrap_or_else(|| default_templates_dir(&self.data_dir));
        let renderer = TemplateRenderer::new(&templates_dir);

        let files = load_data_dir(&self.data_dir)?;
        output.info(&format!(
            "Rendering pages from {} data file(s) in {}...",
            files.len(),
            self.data_dir.display()
        ));

        let mut file_failures = 0;
        let mut sources = Vec::new();
        for file in files {
            match file {
                Ok(data) => {
                    sources.extend(data.pages.iter().zip(renderer.render_all(&data)).map(
                        |(page, body)| PageSource {
                            page_id: page.page_id.clone(),
                            title: page.page_title.clone(),
                            body,
                        },
                    ));
                }
                Err(err) => {
                    output.error(&format!("{err}"));
                    file_failures += 1;
                }
            }
        }

        let mut summary = report::run(&publisher, &output, sources, self.dry_run);
        summary.failed += file_failures;
        Ok(summary)
    }
}

/// Default templates directory: a `templates` directory next to the
/// page-data directory.
fn default_templates_dir(data_dir: &Path) -> PathBuf {
    data_dir.parent().unwrap_or(Path::new(".")).join("templates")
}
