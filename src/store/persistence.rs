//! Flat-file persistence for the record store.
//!
//! The whole sequence is written on save and read back on load; there is no
//! append mode, header, or checksum.

use crate::error::StorageError;
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Backing storage for a record sequence
pub trait RecordPersistence {
    /// Read every decodable record, in file order.
    fn read_all(&self) -> Result<Vec<Record>, StorageError>;
    /// Replace the stored contents with `records`.
    fn write_all(&self, records: &[Record]) -> Result<(), StorageError>;
}

/// Line-per-record text file
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordPersistence for FlatFileStorage {
    fn read_all(&self) -> Result<Vec<Record>, StorageError> {
        let content = match std::fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "Inventory file {} not found, nothing to load",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(decode_records(&content, &self.path))
    }

    fn write_all(&self, records: &[Record]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            record.write_to(&mut writer).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
        tracing::debug!(
            "Wrote {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Decode records until the token stream is exhausted or malformed.
///
/// A token that is not valid UTF-8 ends the stream like any other malformed
/// field.
fn decode_records(content: &[u8], path: &Path) -> Vec<Record> {
    let mut tokens = content
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map_while(|token| std::str::from_utf8(token).ok())
        .peekable();
    let mut records = Vec::new();
    while tokens.peek().is_some() {
        match Record::decode(&mut tokens) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!(
                    "Stopped reading {} at record {}: incomplete or malformed fields",
                    path.display(),
                    records.len() + 1
                );
                break;
            }
        }
    }
    records
}
