use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use log::info;
use crate::config::FIELDS;
use crate::error::Result;
use crate::extractor::FlatRow;

/// Writes the header and every row to `path`, replacing any existing file.
/// Returns the number of data rows written.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[FlatRow]) -> Result<usize> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let written = write_rows(file, rows)?;
    info!("Wrote {} rows to {:?}", written, path);
    Ok(written)
}

pub fn write_rows<W: Write>(writer: W, rows: &[FlatRow]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(FIELDS)?;

    for row in rows {
        csv_writer.write_record(FIELDS.iter().map(|field| row.get(field).unwrap_or("")))?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::flatten_record;
    use crate::search_engine::Record;
    use serde_json::json;

    fn row(value: serde_json::Value) -> FlatRow {
        let rec: Record = serde_json::from_value(value).unwrap();
        flatten_record(&rec)
    }

    #[test]
    fn test_header_only_for_no_rows() {
        let mut buf = Vec::new();
        let count = write_rows(&mut buf, &[]).unwrap();
        assert_eq!(count, 0);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), FIELDS.join(","));
    }

    #[test]
    fn test_rows_keep_order_and_quote_json() {
        let rows = vec![
            row(json!({"id": "1", "languages": ["English", "Welsh"]})),
            row(json!({"id": "2", "fullname": "Ms Jane O'Neil"})),
        ];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), FIELDS.to_vec());

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[1][0], "2");
        let languages_idx = FIELDS.iter().position(|f| *f == "languages").unwrap();
        assert_eq!(&records[0][languages_idx], r#"["English","Welsh"]"#);
        assert_eq!(&records[1][1], "Ms Jane O'Neil");
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are longer than the new file\n".repeat(50)).unwrap();

        write_csv(&path, &[row(json!({"id": "only"}))]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_write_csv_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        let err = write_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, crate::error::ScrapeError::Io(_)));
    }
}
