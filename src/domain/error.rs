//! Error kinds produced by the merge core.

use std::fmt;

/// Which of the two input workbooks an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Backlinks,
    RefDomains,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Backlinks => f.write_str("backlinks"),
            TableKind::RefDomains => f.write_str("refdomains"),
        }
    }
}

/// Failures of pairing, validating or merging one pair of exports.
///
/// Every variant is scoped to a single file pair; none of them is fatal to
/// the process.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The two filenames imply different site domains.
    #[error(
        "Domain mismatch: '{backlinks}' and '{refdomains}'. Make sure both files belong to the same domain."
    )]
    DomainMismatch {
        backlinks: String,
        refdomains: String,
    },

    /// A required column is absent from one of the input tables.
    #[error("Missing required column in {table} file: {missing_column}")]
    Schema {
        table: TableKind,
        missing_column: String,
    },

    /// A filename matches neither the backlinks nor the refdomains convention.
    #[error(
        "Could not determine the type of '{0}' (expected \"backlinks\" or \"backlinks_refdomains\" in the filename)"
    )]
    UnclassifiedFile(String),

    /// Any lower-level read, parse or write failure, carrying the cause message.
    #[error("Error merging files: {0}")]
    Merge(String),
}

impl MergeError {
    pub fn schema(table: TableKind, missing_column: impl Into<String>) -> Self {
        Self::Schema {
            table,
            missing_column: missing_column.into(),
        }
    }

    pub fn merge(cause: impl fmt::Display) -> Self {
        Self::Merge(cause.to_string())
    }
}
