//! Directory-scanning batch driver.
//!
//! Pairs every `{site}-backlinks.*` export in a directory with its
//! `{site}-backlinks_refdomains.*` counterpart, merges each pair and writes
//! one workbook per site. A failing pair is logged and skipped; the rest of
//! the directory is still processed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::application::services::merge_service::{
    FilePair, MergeService, UploadedFile, merged_filename,
};
use crate::domain::error::MergeError;
use crate::domain::file_pair::{FileRole, UNKNOWN_SITE_DOMAIN, classify, extract_site_domain};
use crate::domain::workbook::{WorkbookReader, WorkbookWriter};
use crate::infrastructure::spreadsheet::has_allowed_extension;

/// Backlinks and refdomains exports for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePair {
    pub site_domain: String,
    pub backlinks: PathBuf,
    pub refdomains: PathBuf,
}

/// Result of scanning an input directory.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Complete pairs, ordered by site domain.
    pub pairs: Vec<SitePair>,
    /// Export files that could not be paired.
    pub unpaired: Vec<String>,
}

/// How output files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputNaming {
    /// `{domain}-merged.xlsx`
    Plain,
    /// `{domain}-merged-{YYYYMMDD}.xlsx`
    Dated(NaiveDate),
}

impl OutputNaming {
    pub fn filename(&self, domain: &str) -> String {
        match self {
            OutputNaming::Plain => merged_filename(domain, None),
            OutputNaming::Dated(date) => merged_filename(domain, Some(*date)),
        }
    }
}

/// A successfully written output workbook.
#[derive(Debug, Clone)]
pub struct MergedFile {
    pub site_domain: String,
    pub path: PathBuf,
    pub records: usize,
}

/// A pair that was skipped because its merge failed.
#[derive(Debug, Clone)]
pub struct FailedPair {
    pub site_domain: String,
    pub error: String,
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub merged: Vec<MergedFile>,
    pub failed: Vec<FailedPair>,
    pub unpaired: Vec<String>,
}

#[derive(Default)]
struct Slots {
    backlinks: Option<PathBuf>,
    refdomains: Option<PathBuf>,
}

/// Service running merges over a whole directory.
pub struct BatchService<R: WorkbookReader, W: WorkbookWriter> {
    merge_service: Arc<MergeService<R, W>>,
}

impl<R: WorkbookReader, W: WorkbookWriter> BatchService<R, W> {
    /// Creates a new batch service.
    pub fn new(merge_service: Arc<MergeService<R, W>>) -> Self {
        Self { merge_service }
    }

    /// Scans `input_dir` for export files and pairs them by site domain.
    ///
    /// Files are visited in name order so results are reproducible. Files
    /// without a spreadsheet extension or an export role are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn discover(input_dir: &Path) -> Result<Discovery> {
        let mut names: Vec<String> = fs::read_dir(input_dir)
            .with_context(|| format!("Failed to read input directory {}", input_dir.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut discovery = Discovery::default();
        let mut sites: BTreeMap<String, Slots> = BTreeMap::new();

        for name in names {
            if !has_allowed_extension(&name) {
                continue;
            }
            let role = classify(&name);
            if role == FileRole::Unknown {
                continue;
            }

            let site = extract_site_domain(&name);
            if site == UNKNOWN_SITE_DOMAIN {
                tracing::warn!(file = %name, "Skipping export that does not follow the naming convention");
                discovery.unpaired.push(name);
                continue;
            }

            let slots = sites.entry(site.clone()).or_default();
            let slot = match role {
                FileRole::Backlinks => &mut slots.backlinks,
                _ => &mut slots.refdomains,
            };
            if slot.is_some() {
                tracing::warn!(file = %name, site = %site, "Duplicate export for site, ignoring");
                discovery.unpaired.push(name);
                continue;
            }
            *slot = Some(input_dir.join(&name));
        }

        for (site_domain, slots) in sites {
            match (slots.backlinks, slots.refdomains) {
                (Some(backlinks), Some(refdomains)) => discovery.pairs.push(SitePair {
                    site_domain,
                    backlinks,
                    refdomains,
                }),
                (Some(backlinks), None) => {
                    tracing::warn!(site = %site_domain, "Missing refdomains file");
                    discovery.unpaired.push(file_name(&backlinks));
                }
                (None, Some(refdomains)) => {
                    tracing::warn!(site = %site_domain, "Missing backlinks file");
                    discovery.unpaired.push(file_name(&refdomains));
                }
                (None, None) => {}
            }
        }

        Ok(discovery)
    }

    /// Merges every pair found in `input_dir` into `output_dir`.
    ///
    /// The output directory is created if needed. Per-pair failures are
    /// collected in [`BatchReport::failed`] rather than aborting the run.
    ///
    /// # Errors
    ///
    /// Returns an error only if a directory cannot be read or created.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        naming: OutputNaming,
    ) -> Result<BatchReport> {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;

        let discovery = Self::discover(input_dir)?;
        let mut report = BatchReport {
            unpaired: discovery.unpaired,
            ..BatchReport::default()
        };

        for pair in &discovery.pairs {
            tracing::info!(site = %pair.site_domain, "Processing site");

            match self.merge_site(pair, output_dir, naming) {
                Ok(merged) => {
                    tracing::info!(
                        site = %merged.site_domain,
                        path = %merged.path.display(),
                        records = merged.records,
                        "Completed"
                    );
                    report.merged.push(merged);
                }
                Err(e) => {
                    tracing::error!(site = %pair.site_domain, error = %e, "Merge failed, skipping");
                    report.failed.push(FailedPair {
                        site_domain: pair.site_domain.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Reads, merges and writes a single site pair.
    ///
    /// # Errors
    ///
    /// Any [`MergeError`]; file system failures are reported as [`MergeError::Merge`].
    pub fn merge_site(
        &self,
        pair: &SitePair,
        output_dir: &Path,
        naming: OutputNaming,
    ) -> Result<MergedFile, MergeError> {
        let files = FilePair {
            backlinks: load(&pair.backlinks)?,
            refdomains: load(&pair.refdomains)?,
        };

        let outcome = self.merge_service.merge_pair(&files)?;
        let bytes = self.merge_service.render(&outcome)?;

        let path = output_dir.join(naming.filename(&outcome.domain));
        tracing::debug!(path = %path.display(), "Saving merged data");
        fs::write(&path, bytes)
            .map_err(|e| MergeError::Merge(format!("Failed to write {}: {e}", path.display())))?;

        Ok(MergedFile {
            site_domain: outcome.domain,
            path,
            records: outcome.table.len(),
        })
    }

    /// Merged workbooks already present in `output_dir`.
    pub fn existing_outputs(output_dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(output_dir) else {
            return Vec::new();
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.contains("-merged") && n.ends_with(".xlsx"))
            })
            .collect();
        found.sort();
        found
    }
}

fn load(path: &Path) -> Result<UploadedFile, MergeError> {
    tracing::debug!(path = %path.display(), "Reading export");
    let data = fs::read(path)
        .map_err(|e| MergeError::Merge(format!("Failed to read {}: {e}", path.display())))?;
    Ok(UploadedFile::new(file_name(path), data))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
