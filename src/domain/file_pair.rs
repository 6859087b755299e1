//! Filename conventions for the two export files.
//!
//! Exports are named `{site}-backlinks.xlsx` and
//! `{site}-backlinks_refdomains.xlsx`. This module is string surgery on those
//! names only; it never looks at file contents and is unrelated to the
//! per-row URL handling in [`crate::domain::normalizer`].

use std::path::Path;

use crate::domain::error::MergeError;

const REFDOMAINS_MARKER: &str = "backlinks_refdomains";
const BACKLINKS_MARKER: &str = "backlinks";

const REFDOMAINS_SUFFIX: &str = "-backlinks_refdomains";
const BACKLINKS_SUFFIX: &str = "-backlinks";

/// Site domain reported for filenames that follow neither convention.
pub const UNKNOWN_SITE_DOMAIN: &str = "unknown";

/// Declared role of an uploaded export, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Backlinks,
    RefDomains,
    Unknown,
}

/// Determines the role of a file from its name (case-insensitive).
///
/// The refdomains marker is checked first because it also contains the
/// backlinks marker.
pub fn classify(filename: &str) -> FileRole {
    let lower = filename.to_lowercase();
    if lower.contains(REFDOMAINS_MARKER) {
        FileRole::RefDomains
    } else if lower.contains(BACKLINKS_MARKER) {
        FileRole::Backlinks
    } else {
        FileRole::Unknown
    }
}

/// Extracts the site domain a filename was exported for.
///
/// Strips the extension, then the `-backlinks_refdomains` or `-backlinks`
/// suffix. Names carrying neither suffix yield [`UNKNOWN_SITE_DOMAIN`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_site_domain("foo-backlinks.xlsx"), "foo");
/// assert_eq!(extract_site_domain("foo-backlinks_refdomains.xlsx"), "foo");
/// assert_eq!(extract_site_domain("report.xlsx"), "unknown");
/// ```
pub fn extract_site_domain(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    if stem.contains(REFDOMAINS_SUFFIX) {
        stem.replace(REFDOMAINS_SUFFIX, "")
    } else if stem.contains(BACKLINKS_SUFFIX) {
        stem.replace(BACKLINKS_SUFFIX, "")
    } else {
        UNKNOWN_SITE_DOMAIN.to_string()
    }
}

/// Confirms that both files were exported for the same site.
///
/// # Errors
///
/// Returns [`MergeError::DomainMismatch`] carrying both extracted values when
/// they differ.
pub fn validate_pair(
    backlinks_filename: &str,
    refdomains_filename: &str,
) -> Result<String, MergeError> {
    let backlinks = extract_site_domain(backlinks_filename);
    let refdomains = extract_site_domain(refdomains_filename);

    if backlinks != refdomains {
        return Err(MergeError::DomainMismatch {
            backlinks,
            refdomains,
        });
    }

    Ok(backlinks)
}
