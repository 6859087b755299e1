//! Joined output rows.

use serde::{Serialize, Serializer};

use super::backlink::{SOURCE_TITLE_COLUMN, SOURCE_URL_COLUMN};
use super::ref_domain::{DOMAIN_ASCORE_COLUMN, DOMAIN_COLUMN};

/// Output column names, in order.
pub const MERGED_COLUMNS: [&str; 4] = [
    DOMAIN_ASCORE_COLUMN,
    DOMAIN_COLUMN,
    SOURCE_TITLE_COLUMN,
    SOURCE_URL_COLUMN,
];

/// One (referring domain, backlink) match. Never mutated after the join.
///
/// Serializes with the spreadsheet column names as keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    #[serde(rename = "Domain ascore", serialize_with = "serialize_score")]
    pub domain_ascore: Option<f64>,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Source title")]
    pub source_title: String,
    #[serde(rename = "Source url")]
    pub source_url: String,
}

/// Whole scores are emitted as integers, as the exports store them.
fn serialize_score<S: Serializer>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match score {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// Sorted result of a merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTable {
    rows: Vec<MergedRow>,
}

impl MergedTable {
    pub fn new(rows: Vec<MergedRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &MERGED_COLUMNS
    }

    pub fn rows(&self) -> &[MergedRow] {
        &self.rows
    }

    /// First `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[MergedRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
