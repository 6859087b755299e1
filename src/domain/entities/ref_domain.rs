//! Row of a referring-domains export.

use crate::domain::error::MergeError;
use crate::domain::table::{Cell, Table};

/// Column holding the referring domain name.
pub const DOMAIN_COLUMN: &str = "Domain";
/// Column holding the authority score of the referring domain.
pub const DOMAIN_ASCORE_COLUMN: &str = "Domain ascore";

/// A distinct domain hosting at least one backlink, with its authority score.
///
/// Uniqueness of `domain` is not enforced; duplicates are joined like any
/// other row.
#[derive(Debug, Clone, PartialEq)]
pub struct RefDomainRow {
    /// Domain as exported; `None` for empty cells, which never match.
    pub domain: Option<String>,
    /// Authority score; `None` when the cell is blank.
    pub domain_ascore: Option<f64>,
}

impl RefDomainRow {
    pub fn new(domain: impl Into<String>, domain_ascore: f64) -> Self {
        Self {
            domain: Some(domain.into()),
            domain_ascore: Some(domain_ascore),
        }
    }

    /// Reads all rows of `table` using the resolved column positions.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Merge`] if a score cell holds non-numeric text.
    pub fn collect(
        table: &Table,
        domain_column: usize,
        ascore_column: usize,
    ) -> Result<Vec<Self>, MergeError> {
        (0..table.len())
            .map(|i| {
                Self::from_cells(table.cell(i, domain_column), table.cell(i, ascore_column))
                    .map_err(|value| {
                        MergeError::Merge(format!(
                            "Non-numeric {DOMAIN_ASCORE_COLUMN} '{value}' in refdomains row {}",
                            i + 2
                        ))
                    })
            })
            .collect()
    }

    /// Builds a row from its two cells; on a bad score returns the offending text.
    fn from_cells(domain: &Cell, ascore: &Cell) -> Result<Self, String> {
        let domain_ascore = ascore
            .to_number()
            .map_err(|_| ascore.to_text().unwrap_or_default())?;

        Ok(Self {
            domain: domain.to_text(),
            domain_ascore,
        })
    }
}
