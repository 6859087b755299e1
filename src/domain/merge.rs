//! Join of a backlinks table against a referring-domains table.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::entities::{
    BacklinkRow, DOMAIN_ASCORE_COLUMN, DOMAIN_COLUMN, MergedRow, MergedTable, RefDomainRow,
    SOURCE_TITLE_COLUMN, SOURCE_URL_COLUMN,
};
use crate::domain::error::{MergeError, TableKind};
use crate::domain::normalizer::normalize_domain;
use crate::domain::table::Table;

/// Merges the two exports into a ranked table.
///
/// # Algorithm
///
/// 1. Each backlink's `Source url` is normalized with [`normalize_domain`]
/// 2. Inner equi-join on `Domain == normalized domain` (exact, case-sensitive;
///    rows without a domain never match). Duplicate keys on either side
///    produce the full cross-product
/// 3. Stable sort by `Domain ascore` descending (missing scores last), then
///    `Domain` ascending
///
/// Output follows referring-domain order, then backlink order, before sorting,
/// so ties keep a reproducible order.
///
/// # Errors
///
/// - [`MergeError::Schema`] if a required column is absent from either table
/// - [`MergeError::Merge`] if a score cell cannot be read as a number
///
/// No partial result is returned on failure.
pub fn merge_tables(backlinks: &Table, refdomains: &Table) -> Result<MergedTable, MergeError> {
    let url_column = require_column(backlinks, TableKind::Backlinks, SOURCE_URL_COLUMN)?;
    let title_column = require_column(backlinks, TableKind::Backlinks, SOURCE_TITLE_COLUMN)?;
    let domain_column = require_column(refdomains, TableKind::RefDomains, DOMAIN_COLUMN)?;
    let ascore_column = require_column(refdomains, TableKind::RefDomains, DOMAIN_ASCORE_COLUMN)?;

    let backlinks = BacklinkRow::collect(backlinks, url_column, title_column);
    let refdomains = RefDomainRow::collect(refdomains, domain_column, ascore_column)?;

    let mut rows = join(&refdomains, &backlinks);
    rows.sort_by(rank);

    Ok(MergedTable::new(rows))
}

fn require_column(table: &Table, kind: TableKind, name: &str) -> Result<usize, MergeError> {
    table
        .column_index(name)
        .ok_or_else(|| MergeError::schema(kind, name))
}

fn join(refdomains: &[RefDomainRow], backlinks: &[BacklinkRow]) -> Vec<MergedRow> {
    let mut by_domain: HashMap<String, Vec<&BacklinkRow>> = HashMap::new();
    for row in backlinks {
        if let Some(domain) = normalize_domain(row.source_url.as_deref()) {
            by_domain.entry(domain).or_default().push(row);
        }
    }

    let mut merged = Vec::new();
    for ref_row in refdomains {
        let Some(domain) = ref_row.domain.as_deref() else {
            continue;
        };
        let Some(matches) = by_domain.get(domain) else {
            continue;
        };

        for backlink in matches {
            merged.push(MergedRow {
                domain_ascore: ref_row.domain_ascore,
                domain: domain.to_string(),
                source_title: backlink.source_title.clone(),
                source_url: backlink.source_url.clone().unwrap_or_default(),
            });
        }
    }

    merged
}

/// Score descending with missing scores last, then domain ascending.
///
/// `-0.0` and `0.0` compare equal.
fn rank(a: &MergedRow, b: &MergedRow) -> Ordering {
    let by_score = match (a.domain_ascore, b.domain_ascore) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_score.then_with(|| a.domain.cmp(&b.domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Cell;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn backlinks(rows: &[(&str, &str)]) -> Table {
        Table::new(
            vec![SOURCE_URL_COLUMN.to_string(), SOURCE_TITLE_COLUMN.to_string()],
            rows.iter().map(|(u, t)| vec![text(u), text(t)]).collect(),
        )
    }

    fn refdomains(rows: &[(&str, f64)]) -> Table {
        Table::new(
            vec![DOMAIN_COLUMN.to_string(), DOMAIN_ASCORE_COLUMN.to_string()],
            rows.iter()
                .map(|(d, s)| vec![text(d), Cell::Number(*s)])
                .collect(),
        )
    }

    #[test]
    fn test_merge_orders_by_score_descending() {
        let bl = backlinks(&[("http://a.com", "T1"), ("http://b.com", "T2")]);
        let rd = refdomains(&[("a.com", 50.0), ("b.com", 90.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();

        assert_eq!(
            merged.rows(),
            &[
                MergedRow {
                    domain_ascore: Some(90.0),
                    domain: "b.com".into(),
                    source_title: "T2".into(),
                    source_url: "http://b.com".into(),
                },
                MergedRow {
                    domain_ascore: Some(50.0),
                    domain: "a.com".into(),
                    source_title: "T1".into(),
                    source_url: "http://a.com".into(),
                },
            ]
        );
    }

    #[test]
    fn test_merge_is_inner_join() {
        let bl = backlinks(&[("http://a.com/1", "A"), ("http://nomatch.com", "N")]);
        let rd = refdomains(&[("a.com", 10.0), ("other.com", 20.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.rows()[0].domain, "a.com");
    }

    #[test]
    fn test_merge_preserves_cross_product_multiplicity() {
        let bl = backlinks(&[("http://x.com/1", "one"), ("https://www.x.com/2", "two")]);
        let rd = refdomains(&[("x.com", 5.0), ("x.com", 5.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();

        assert_eq!(merged.len(), 4);
        assert!(merged.rows().iter().all(|r| r.domain == "x.com"));
        let titles: Vec<&str> = merged.rows().iter().map(|r| r.source_title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "one", "two"]);
    }

    #[test]
    fn test_merge_match_is_case_sensitive() {
        let bl = backlinks(&[("http://Example.com", "T")]);
        let rd = refdomains(&[("example.com", 10.0)]);

        assert!(merge_tables(&bl, &rd).unwrap().is_empty());
    }

    #[test]
    fn test_merge_ties_broken_by_domain() {
        let bl = backlinks(&[("http://c.com", "C"), ("http://a.com", "A"), ("http://b.com", "B")]);
        let rd = refdomains(&[("c.com", 10.0), ("b.com", 10.0), ("a.com", 10.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();
        let domains: Vec<&str> = merged.rows().iter().map(|r| r.domain.as_str()).collect();

        assert_eq!(domains, ["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_merge_signed_zero_scores_tie() {
        let bl = backlinks(&[("http://b.com", "B"), ("http://a.com", "A")]);
        let rd = refdomains(&[("b.com", 0.0), ("a.com", -0.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();
        let domains: Vec<&str> = merged.rows().iter().map(|r| r.domain.as_str()).collect();

        assert_eq!(domains, ["a.com", "b.com"]);
    }

    #[test]
    fn test_merge_missing_score_sorts_last() {
        let bl = backlinks(&[("http://a.com", "A"), ("http://b.com", "B")]);
        let rd = Table::new(
            vec![DOMAIN_COLUMN.to_string(), DOMAIN_ASCORE_COLUMN.to_string()],
            vec![
                vec![text("a.com"), Cell::Empty],
                vec![text("b.com"), Cell::Number(1.0)],
            ],
        );

        let merged = merge_tables(&bl, &rd).unwrap();

        assert_eq!(merged.rows()[0].domain, "b.com");
        assert_eq!(merged.rows()[1].domain_ascore, None);
    }

    #[test]
    fn test_merge_skips_rows_without_domain() {
        let bl = Table::new(
            vec![SOURCE_URL_COLUMN.to_string(), SOURCE_TITLE_COLUMN.to_string()],
            vec![
                vec![Cell::Empty, text("empty")],
                vec![Cell::Number(3.0), text("number")],
                vec![text("  "), text("blank")],
            ],
        );
        let rd = Table::new(
            vec![DOMAIN_COLUMN.to_string(), DOMAIN_ASCORE_COLUMN.to_string()],
            vec![vec![Cell::Empty, Cell::Number(1.0)], vec![text("3"), Cell::Number(2.0)]],
        );

        assert!(merge_tables(&bl, &rd).unwrap().is_empty());
    }

    #[test]
    fn test_merge_missing_backlinks_column() {
        let bl = Table::new(vec![SOURCE_URL_COLUMN.to_string()], vec![]);
        let rd = refdomains(&[]);

        let err = merge_tables(&bl, &rd).unwrap_err();
        match err {
            MergeError::Schema {
                table,
                missing_column,
            } => {
                assert_eq!(table, TableKind::Backlinks);
                assert_eq!(missing_column, SOURCE_TITLE_COLUMN);
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_missing_refdomains_column() {
        let bl = backlinks(&[]);
        let rd = Table::new(vec![DOMAIN_COLUMN.to_string()], vec![]);

        let err = merge_tables(&bl, &rd).unwrap_err();
        assert!(matches!(
            err,
            MergeError::Schema {
                table: TableKind::RefDomains,
                ..
            }
        ));
    }

    #[test]
    fn test_merge_extra_columns_are_ignored() {
        let bl = Table::new(
            vec![
                "Page ascore".to_string(),
                SOURCE_TITLE_COLUMN.to_string(),
                SOURCE_URL_COLUMN.to_string(),
            ],
            vec![vec![Cell::Number(3.0), text("T"), text("a.com/page")]],
        );
        let rd = refdomains(&[("a.com", 42.0)]);

        let merged = merge_tables(&bl, &rd).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.rows()[0].source_url, "a.com/page");
        assert_eq!(merged.rows()[0].source_title, "T");
    }
}
