//! Per-page result reporting shared by the publishing commands.

use pagepush_confluence::{PagePublisher, PublishedPage};
use pagepush_content::{ContentError, ResolvedPage};

use crate::output::Output;

/// A page heading into the publish step, or the reason it never got there.
pub(crate) struct PageSource {
    pub(crate) page_id: String,
    pub(crate) title: String,
    pub(crate) body: Result<ResolvedPage, ContentError>,
}

/// Counts for the final summary line and the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) published: usize,
    pub(crate) failed: usize,
}

/// Publish the resolvable pages and report every outcome.
///
/// Pages that failed content resolution are reported first and counted
/// as failures; the rest go through the publisher in order.
pub(crate) fn run(
    publisher: &PagePublisher<'_>,
    output: &Output,
    sources: Vec<PageSource>,
    dry_run: bool,
) -> RunSummary {
    if dry_run {
        output.highlight("[DRY RUN] No changes will be made.");
    }

    let mut failed = 0;
    let mut pages = Vec::with_capacity(sources.len());
    for source in sources {
        match source.body {
            Ok(page) => pages.push(page),
            Err(err) => {
                output.error(&format!(
                    "Failed to resolve page {} \"{}\": {err}",
                    source.page_id, source.title
                ));
                failed += 1;
            }
        }
    }

    let report = publisher.publish_all(&pages);
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(page) => print_published(output, page, dry_run),
            Err(err) => output.error(&format!(
                "Failed to update page {} \"{}\": {err}",
                outcome.page_id, outcome.title
            )),
        }
    }

    let published = report.succeeded();
    failed += report.failed();

    print_summary(output, published, failed, dry_run);
    RunSummary { published, failed }
}

fn print_published(output: &Output, page: &PublishedPage, dry_run: bool) {
    if dry_run {
        output.info(&format!(
            "Would update page {} \"{}\" to v{} ({} bytes)",
            page.id, page.title, page.version, page.body_bytes
        ));
        return;
    }

    output.success(&format!(
        "Updated page {} \"{}\" to v{}",
        page.id, page.title, page.version
    ));
    if let Some(url) = &page.url {
        output.info(&format!("  {url}"));
    }
}

fn print_summary(output: &Output, published: usize, failed: usize, dry_run: bool) {
    let verb = if dry_run { "would be updated" } else { "updated" };
    let msg = format!("\n{published} page(s) {verb}, {failed} failed.");
    if failed == 0 {
        output.success(&msg);
    } else {
        output.warning(&msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepush_confluence::ConfluenceClient;
    use pretty_assertions::assert_eq;

    fn source_ok(id: &str) -> PageSource {
        PageSource {
            page_id: id.to_owned(),
            title: format!("Page {id}"),
            body: Ok(ResolvedPage {
                page_id: id.to_owned(),
                title: format!("Page {id}"),
                version: 1,
                html: "<p>x</p>".to_owned(),
            }),
        }
    }

    fn source_err(id: &str) -> PageSource {
        PageSource {
            page_id: id.to_owned(),
            title: format!("Page {id}"),
            body: Err(ContentError::Read {
                path: "missing.html".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            }),
        }
    }

    #[test]
    fn dry_run_counts_resolved_pages() {
        let client = ConfluenceClient::new("https://confluence.example.com", "pat");
        let publisher = PagePublisher::new(&client).dry_run(true);
        let output = Output::new();

        let summary = run(
            &publisher,
            &output,
            vec![source_ok("1"), source_ok("2")],
            true,
        );
        assert_eq!(
            summary,
            RunSummary {
                published: 2,
                failed: 0
            }
        );
    }

    #[test]
    fn resolution_failures_count_as_failed() {
        let client = ConfluenceClient::new("https://confluence.example.com", "pat");
        let publisher = PagePublisher::new(&client).dry_run(true);
        let output = Output::new();

        let summary = run(
            &publisher,
            &output,
            vec![source_err("1"), source_ok("2")],
            true,
        );
        assert_eq!(
            summary,
            RunSummary {
                published: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn empty_input_publishes_nothing() {
        let client = ConfluenceClient::new("https://confluence.example.com", "pat");
        let publisher = PagePublisher::new(&client).dry_run(true);
        let output = Output::new();

        let summary = run(&publisher, &output, vec![], true);
        assert_eq!(
            summary,
            RunSummary {
                published: 0,
                failed: 0
            }
        );
    }
}
