//! YAML page-data files for the template variant.
//!
//! Each data file carries a `common` block shared by every page it
//! declares, plus the per-page entries naming the template to render
//! and the page-specific field values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ContentError;

/// Page-data file: shared context plus the pages it feeds.
#[derive(Debug, Deserialize)]
pub struct DataFile {
    /// Values available to every page rendered from this file.
    #[serde(default)]
    pub common: BTreeMap<String, serde_yaml::Value>,

    /// Pages to render, in publish order.
    #[serde(default)]
    pub pages: Vec<TemplatePage>,

    /// Source file (set after loading).
    #[serde(skip)]
    pub path: PathBuf,
}

/// A page rendered from a template.
#[derive(Debug, Deserialize)]
pub struct TemplatePage {
    /// Target page ID on the remote service.
    pub page_id: String,
    /// Page title to set.
    pub page_title: String,
    /// Version number to write.
    pub version: u32,
    /// Template filename within the templates directory.
    pub template: String,
    /// Page-specific template values.
    #[serde(default)]
    pub fields: BTreeMap<String, serde_yaml::Value>,
}

impl DataFile {
    /// Load a single page-data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data: Self = serde_yaml::from_str(&content).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        data.path = path.to_path_buf();
        Ok(data)
    }
}

/// Load every `*.yaml` / `*.yml` file directly inside `dir`.
///
/// Files are sorted by name so publish order is stable across runs.
/// An unparseable file produces an error outcome for that file; the
/// remaining files still load.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed.
pub fn load_data_dir(dir: &Path) -> Result<Vec<Result<DataFile, ContentError>>, ContentError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths.iter().map(|path| DataFile::load(path)).collect())
}
