//! `pagepush publish` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagepush_confluence::PagePublisher;
use pagepush_content::Manifest;

use crate::error::CliError;
use crate::output::Output;

use super::connection::ConnectionArgs;
use super::report::{self, PageSource, RunSummary};

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to the JSON page manifest.
    manifest: PathBuf,

    /// Preview the updates without calling the page service.
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    connection: ConnectionArgs,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the manifest cannot be loaded.
    /// Per-page failures are reported and reflected in the summary instead.
    pub(crate) fn execute(self) -> Result<RunSummary, CliError> {
        let output = Output::new();

        let client = self.connection.client(&output)?;
        let publisher = PagePublisher::new(&client).dry_run(self.dry_run);

        let manifest = Manifest::load(&self.manifest)?;
        output.info(&format!(
            "Publishing {} page(s) from {}...",
            manifest.pages.len(),
            self.manifest.display()
        ));

        let sources = manifest
            .pages
            .iter()
            .zip(manifest.resolve())
            .map(|(entry, body)| PageSource {
                page_id: entry.page_id.clone(),
                title: entry.page_title.clone(),
                body,
            })
            .collect();

        Ok(report::run(&publisher, &output, sources, self.dry_run))
    }
}
