//! Upload pairing and merge orchestration.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::MergedTable;
use crate::domain::error::MergeError;
use crate::domain::file_pair::{FileRole, classify, validate_pair};
use crate::domain::merge::merge_tables;
use crate::domain::workbook::{WorkbookReader, WorkbookWriter};
use crate::infrastructure::spreadsheet::has_allowed_extension;

/// A spreadsheet file as received from a caller.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }
}

/// Two uploads with their roles resolved.
#[derive(Debug, Clone)]
pub struct FilePair {
    pub backlinks: UploadedFile,
    pub refdomains: UploadedFile,
}

/// Result of merging one file pair.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Site domain shared by both filenames.
    pub domain: String,
    pub table: MergedTable,
}

/// Rejections of an upload request before any file content is read.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Please upload files")]
    NoFiles,

    #[error("Please upload exactly 2 files")]
    WrongFileCount(usize),

    #[error("One of the files has no name")]
    MissingFilename,

    #[error("File {0} is not a valid Excel file")]
    UnsupportedExtension(String),

    #[error("Could not find backlinks file (should contain \"backlinks\" in filename)")]
    MissingBacklinks,

    #[error("Could not find refdomains file (should contain \"backlinks_refdomains\" in filename)")]
    MissingRefDomains,

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Name of the downloadable result: `{domain}-merged.xlsx`, or
/// `{domain}-merged-{YYYYMMDD}.xlsx` when a date is given.
pub fn merged_filename(domain: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{domain}-merged-{}.xlsx", date.format("%Y%m%d")),
        None => format!("{domain}-merged.xlsx"),
    }
}

/// Service turning a pair of exports into a ranked workbook.
///
/// Holds the workbook codec; the merge itself is delegated to the pure
/// [`merge_tables`] core.
pub struct MergeService<R: WorkbookReader, W: WorkbookWriter> {
    reader: Arc<R>,
    writer: Arc<W>,
}

impl<R: WorkbookReader, W: WorkbookWriter> MergeService<R, W> {
    /// Creates a new merge service.
    pub fn new(reader: Arc<R>, writer: Arc<W>) -> Self {
        Self { reader, writer }
    }

    /// Assigns roles to exactly two uploaded files.
    ///
    /// # Validation
    ///
    /// - Exactly two files, each with a non-empty name
    /// - Extension `xlsx` or `xls` (case-insensitive)
    /// - Each name classifies as backlinks or refdomains
    /// - One file of each role
    ///
    /// # Errors
    ///
    /// Returns the first [`UploadError`] encountered, in the order above.
    /// An unrecognisable name yields [`MergeError::UnclassifiedFile`].
    pub fn pair_uploads(&self, files: Vec<UploadedFile>) -> Result<FilePair, UploadError> {
        match files.len() {
            0 => return Err(UploadError::NoFiles),
            2 => {}
            n => return Err(UploadError::WrongFileCount(n)),
        }

        let mut backlinks = None;
        let mut refdomains = None;

        for file in files {
            if file.filename.is_empty() {
                return Err(UploadError::MissingFilename);
            }
            if !has_allowed_extension(&file.filename) {
                return Err(UploadError::UnsupportedExtension(file.filename));
            }

            match classify(&file.filename) {
                FileRole::Backlinks => backlinks = Some(file),
                FileRole::RefDomains => refdomains = Some(file),
                FileRole::Unknown => {
                    return Err(MergeError::UnclassifiedFile(file.filename).into());
                }
            }
        }

        Ok(FilePair {
            backlinks: backlinks.ok_or(UploadError::MissingBacklinks)?,
            refdomains: refdomains.ok_or(UploadError::MissingRefDomains)?,
        })
    }

    /// Validates, decodes and merges a file pair.
    ///
    /// The filename check runs first so mismatched uploads are rejected
    /// without decoding either workbook.
    ///
    /// # Errors
    ///
    /// - [`MergeError::DomainMismatch`] if the filenames name different sites
    /// - [`MergeError::Schema`] if a required column is missing
    /// - [`MergeError::Merge`] if a workbook cannot be read
    pub fn merge_pair(&self, pair: &FilePair) -> Result<MergeOutcome, MergeError> {
        let domain = validate_pair(&pair.backlinks.filename, &pair.refdomains.filename)?;

        let backlinks = self.reader.read_table(&pair.backlinks.data)?;
        let refdomains = self.reader.read_table(&pair.refdomains.data)?;
        let table = merge_tables(&backlinks, &refdomains)?;

        tracing::info!(
            domain = %domain,
            backlinks = backlinks.len(),
            refdomains = refdomains.len(),
            merged = table.len(),
            "Merged file pair"
        );

        Ok(MergeOutcome { domain, table })
    }

    /// Pairs and merges two uploads in one step.
    pub fn merge_uploads(&self, files: Vec<UploadedFile>) -> Result<MergeOutcome, UploadError> {
        let pair = self.pair_uploads(files)?;
        Ok(self.merge_pair(&pair)?)
    }

    /// Encodes a merge result as workbook bytes.
    pub fn render(&self, outcome: &MergeOutcome) -> Result<Vec<u8>, MergeError> {
        self.writer.write_table(&outcome.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        DOMAIN_ASCORE_COLUMN, DOMAIN_COLUMN, SOURCE_TITLE_COLUMN, SOURCE_URL_COLUMN,
    };
    use crate::domain::table::{Cell, Table};
    use crate::domain::workbook::{MockWorkbookReader, MockWorkbookWriter};

    fn backlinks_table() -> Table {
        Table::new(
            vec![SOURCE_URL_COLUMN.to_string(), SOURCE_TITLE_COLUMN.to_string()],
            vec![vec![
                Cell::Text("https://www.a.com/post".into()),
                Cell::Text("Post".into()),
            ]],
        )
    }

    fn refdomains_table() -> Table {
        Table::new(
            vec![DOMAIN_COLUMN.to_string(), DOMAIN_ASCORE_COLUMN.to_string()],
            vec![vec![Cell::Text("a.com".into()), Cell::Number(33.0)]],
        )
    }

    fn service(
        reader: MockWorkbookReader,
    ) -> MergeService<MockWorkbookReader, MockWorkbookWriter> {
        MergeService::new(Arc::new(reader), Arc::new(MockWorkbookWriter::new()))
    }

    fn upload(name: &str, data: &[u8]) -> UploadedFile {
        UploadedFile::new(name, data.to_vec())
    }

    #[test]
    fn test_pair_uploads_assigns_roles_in_any_order() {
        let svc = service(MockWorkbookReader::new());

        let pair = svc
            .pair_uploads(vec![
                upload("foo-backlinks_refdomains.xlsx", b"r"),
                upload("foo-backlinks.xlsx", b"b"),
            ])
            .unwrap();

        assert_eq!(pair.backlinks.filename, "foo-backlinks.xlsx");
        assert_eq!(pair.refdomains.filename, "foo-backlinks_refdomains.xlsx");
    }

    #[test]
    fn test_pair_uploads_requires_two_files() {
        let svc = service(MockWorkbookReader::new());

        assert!(matches!(svc.pair_uploads(vec![]), Err(UploadError::NoFiles)));
        assert!(matches!(
            svc.pair_uploads(vec![upload("foo-backlinks.xlsx", b"")]),
            Err(UploadError::WrongFileCount(1))
        ));
    }

    #[test]
    fn test_pair_uploads_rejects_empty_name_and_extension() {
        let svc = service(MockWorkbookReader::new());

        assert!(matches!(
            svc.pair_uploads(vec![upload("", b""), upload("foo-backlinks.xlsx", b"")]),
            Err(UploadError::MissingFilename)
        ));

        let err = svc
            .pair_uploads(vec![
                upload("foo-backlinks.csv", b""),
                upload("foo-backlinks_refdomains.xlsx", b""),
            ])
            .unwrap_err();
        assert_eq!(err.to_string(), "File foo-backlinks.csv is not a valid Excel file");
    }

    #[test]
    fn test_pair_uploads_unclassified() {
        let svc = service(MockWorkbookReader::new());

        let err = svc
            .pair_uploads(vec![upload("report.xlsx", b""), upload("foo-backlinks.xlsx", b"")])
            .unwrap_err();

        assert!(matches!(
            err,
            UploadError::Merge(MergeError::UnclassifiedFile(ref name)) if name == "report.xlsx"
        ));
    }

    #[test]
    fn test_pair_uploads_two_backlinks_files() {
        let svc = service(MockWorkbookReader::new());

        let err = svc
            .pair_uploads(vec![
                upload("foo-backlinks.xlsx", b""),
                upload("bar-backlinks.xlsx", b""),
            ])
            .unwrap_err();

        assert!(matches!(err, UploadError::MissingRefDomains));
    }

    #[test]
    fn test_merge_pair_mismatch_reads_nothing() {
        let mut reader = MockWorkbookReader::new();
        reader.expect_read_table().times(0);
        let svc = service(reader);

        let pair = FilePair {
            backlinks: upload("foo-backlinks.xlsx", b""),
            refdomains: upload("bar-backlinks_refdomains.xlsx", b""),
        };

        assert!(matches!(
            svc.merge_pair(&pair),
            Err(MergeError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_merge_pair_success() {
        let mut reader = MockWorkbookReader::new();
        reader
            .expect_read_table()
            .times(2)
            .returning(|data| match data {
                b"backlinks" => Ok(backlinks_table()),
                _ => Ok(refdomains_table()),
            });
        let svc = service(reader);

        let outcome = svc
            .merge_uploads(vec![
                upload("a.com-backlinks.xlsx", b"backlinks"),
                upload("a.com-backlinks_refdomains.xlsx", b"refdomains"),
            ])
            .unwrap();

        assert_eq!(outcome.domain, "a.com");
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows()[0].domain_ascore, Some(33.0));
        assert_eq!(outcome.table.rows()[0].source_title, "Post");
    }

    #[test]
    fn test_merge_pair_read_failure_is_wrapped() {
        let mut reader = MockWorkbookReader::new();
        reader
            .expect_read_table()
            .returning(|_| Err(MergeError::merge("Cannot detect file format")));
        let svc = service(reader);

        let pair = FilePair {
            backlinks: upload("foo-backlinks.xlsx", b""),
            refdomains: upload("foo-backlinks_refdomains.xlsx", b""),
        };

        let err = svc.merge_pair(&pair).unwrap_err();
        assert_eq!(err.to_string(), "Error merging files: Cannot detect file format");
    }

    #[test]
    fn test_render_delegates_to_writer() {
        let mut writer = MockWorkbookWriter::new();
        writer
            .expect_write_table()
            .times(1)
            .returning(|_| Ok(vec![1, 2, 3]));
        let svc = MergeService::new(Arc::new(MockWorkbookReader::new()), Arc::new(writer));

        let outcome = MergeOutcome {
            domain: "foo".into(),
            table: MergedTable::default(),
        };

        assert_eq!(svc.render(&outcome).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_merged_filename() {
        assert_eq!(merged_filename("foo", None), "foo-merged.xlsx");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(merged_filename("foo", Some(date)), "foo-merged-20240309.xlsx");
    }
}
