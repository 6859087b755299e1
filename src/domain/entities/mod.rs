//! Row types of the two input exports and of the merged output.
//!
//! # Entity Types
//!
//! - [`BacklinkRow`] - A row of the backlinks export (`Source url`, `Source title`)
//! - [`RefDomainRow`] - A row of the referring-domains export (`Domain`, `Domain ascore`)
//! - [`MergedRow`] - One joined (referring domain, backlink) pair
//! - [`MergedTable`] - The sorted merge result
//!
//! All entities are transient: created per merge, held in memory, and
//! discarded once the output workbook has been produced.

pub mod backlink;
pub mod merged_row;
pub mod ref_domain;

pub use backlink::{BacklinkRow, SOURCE_TITLE_COLUMN, SOURCE_URL_COLUMN};
pub use merged_row::{MERGED_COLUMNS, MergedRow, MergedTable};
pub use ref_domain::{DOMAIN_ASCORE_COLUMN, DOMAIN_COLUMN, RefDomainRow};
