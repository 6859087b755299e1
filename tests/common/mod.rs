#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use backlink_merger::infrastructure::spreadsheet::XLSX_CONTENT_TYPE;
use backlink_merger::state::AppState;
use rust_xlsxwriter::Workbook;

pub const TEST_UPLOAD_LIMIT: usize = 50 * 1024 * 1024;

/// Cell written into a test workbook.
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub fn create_test_state() -> AppState {
    AppState::with_xlsx(TEST_UPLOAD_LIMIT)
}

/// Builds an in-memory xlsx with a header row followed by `rows`.
pub fn build_workbook(headers: &[&str], rows: &[Vec<Value>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            match value {
                Value::Text(s) => {
                    sheet.write_string(r, col as u16, *s).unwrap();
                }
                Value::Number(n) => {
                    sheet.write_number(r, col as u16, *n).unwrap();
                }
                Value::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Backlinks export from `(source url, source title)` pairs.
pub fn backlinks_workbook(rows: &[(&str, &str)]) -> Vec<u8> {
    let rows: Vec<Vec<Value>> = rows
        .iter()
        .map(|(url, title)| vec![Value::Text(title), Value::Text(url)])
        .collect();
    build_workbook(&["Source title", "Source url", "Anchor"], &rows)
}

/// Refdomains export from `(domain, ascore)` pairs.
pub fn refdomains_workbook(rows: &[(&str, f64)]) -> Vec<u8> {
    let rows: Vec<Vec<Value>> = rows
        .iter()
        .map(|(domain, score)| vec![Value::Text(domain), Value::Number(*score)])
        .collect();
    build_workbook(&["Domain", "Domain ascore"], &rows)
}

/// A small backlinks/refdomains pair sharing `b.com` and `c.com`.
pub fn sample_pair() -> (Vec<u8>, Vec<u8>) {
    let backlinks = backlinks_workbook(&[
        ("https://www.a.com/x", "T1"),
        ("http://b.com", "T2"),
        ("c.com/path", "T3"),
    ]);
    let refdomains = refdomains_workbook(&[("b.com", 90.0), ("c.com", 40.0), ("d.com", 70.0)]);
    (backlinks, refdomains)
}

pub fn xlsx_part(filename: &str, data: Vec<u8>) -> Part {
    Part::bytes(data)
        .file_name(filename)
        .mime_type(XLSX_CONTENT_TYPE)
}

/// Multipart form with one `files` part per `(filename, bytes)` entry.
pub fn upload_form(files: Vec<(&str, Vec<u8>)>) -> MultipartForm {
    files
        .into_iter()
        .fold(MultipartForm::new(), |form, (name, data)| {
            form.add_part("files", xlsx_part(name, data))
        })
}
