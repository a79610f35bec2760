//! Static export of the whole site.
//!
//! Writes every route plus `404.html` under an output directory, laid out so
//! any static file host serves the same paths as the HTTP server.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExportError;
use crate::layout::SiteMeta;
use crate::not_found;
use crate::route::Route;

/// File name of the exported not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";

/// One file written by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Path of the written file.
    pub path: PathBuf,
    /// Size in bytes.
    pub bytes: usize,
}

/// Summary of a completed export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Files written, in order.
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    /// Total bytes written.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Render every page and write it below `out_dir`.
///
/// Missing directories are created. Existing files are overwritten.
///
/// # Errors
///
/// Returns [`ExportError`] if a directory cannot be created or a file cannot
/// be written.
pub fn export_site(out_dir: &Path, site: &SiteMeta) -> Result<ExportReport, ExportError> {
    let mut report = ExportReport::default();

    for route in Route::ALL {
        let path = out_dir.join(route.export_path());
        let html = route.render(site);
        write_page(&path, &html)?;
        debug!(route = %route, path = %path.display(), bytes = html.len(), "exported page");
        report.files.push(ExportedFile {
            path,
            bytes: html.len(),
        });
    }

    let path = out_dir.join(NOT_FOUND_FILE);
    let html = not_found::render(site);
    write_page(&path, &html)?;
    debug!(path = %path.display(), bytes = html.len(), "exported not-found page");
    report.files.push(ExportedFile {
        path,
        bytes: html.len(),
    });

    info!(
        out_dir = %out_dir.display(),
        files = report.files.len(),
        bytes = report.total_bytes(),
        "site export complete"
    );
    Ok(report)
}

fn write_page(path: &Path, html: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, html).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
