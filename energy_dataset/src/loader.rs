//! Decoding of the dataset file into validated records.
//!
//! The dataset is a JSON array of flat objects keyed by the source column
//! names. Record order is preserved exactly as it appears in the file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::Error;
use crate::types::Record;

/// Reads and validates the dataset at `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded dataset");
    Ok(records)
}

/// Decodes and validates a dataset held in memory.
pub fn parse_records(json: &str) -> Result<Vec<Record>, Error> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    validate_all(records)
}

/// Decodes and validates a dataset from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>, Error> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    validate_all(records)
}

fn validate_all(records: Vec<Record>) -> Result<Vec<Record>, Error> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| Error::InvalidRecord { index, reason })?;
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"[
            {"Year": 2016, "Operation Name": "B"},
            {"Year": 2015, "Operation Name": "A"}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].operation_name.as_deref(), Some("B"));
        assert_eq!(records[1].operation_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_parse_empty_array() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_records(r#"{"Year": 2015}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_reports_invalid_index() {
        let json = r#"[
            {"Year": 2015, "Total GHG Emissions (KG)": 10},
            {"Year": 2015, "Total GHG Emissions (KG)": -5}
        ]"#;
        match parse_records(json) {
            Err(Error::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("negative"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_records("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
