//! Content resolution for page publishing.
//!
//! Turns local inputs into ready-to-publish page bodies. Two variants:
//!
//! - Static HTML: a JSON manifest lists target pages and the files
//!   holding their bodies ([`Manifest`]).
//! - Rendered HTML: YAML page-data files feed minijinja templates
//!   ([`DataFile`], [`TemplateRenderer`]).
//!
//! Both produce [`ResolvedPage`] values in input order. Resolution is
//! per-page: one bad file or template never aborts the rest.

mod data;
mod error;
mod manifest;
mod page;
mod template;

pub use data::{DataFile, TemplatePage, load_data_dir};
pub use error::ContentError;
pub use manifest::{Manifest, ManifestPage};
pub use page::ResolvedPage;
pub use template::TemplateRenderer;
