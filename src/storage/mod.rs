//! On-disk representation of the book and whole-file JSON persistence.
//!
//! The book is stored as a single UTF-8 JSON object keyed by contact name:
//!
//! ```json
//! {"John": {"phones": ["5551234567"], "birthday": "1990-05-17"}}
//! ```
//!
//! `phones` may be `null` in files written by earlier tooling; such records
//! load with an empty phone list. `birthday` is `null` when the contact has
//! no birthday on file. Key order on disk is the book's insertion order.

use crate::book::ContactBook;
use crate::error::BookResult;
use crate::models::ContactRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Base file name used when the caller does not supply one.
pub const DEFAULT_BOOK_NAME: &str = "address_book";

/// File extension appended to every book path.
const BOOK_EXTENSION: &str = "json";

/// One record as stored on disk.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    phones: Option<Vec<String>>,
    birthday: Option<String>,
}

impl PersistedRecord {
    fn from_record(record: &ContactRecord) -> Self {
        Self {
            phones: Some(
                record
                    .phones()
                    .iter()
                    .map(|phone| phone.as_str().to_string())
                    .collect(),
            ),
            birthday: record.birthday().map(|birthday| birthday.to_string()),
        }
    }

    fn into_record(self, name: &str) -> BookResult<ContactRecord> {
        let mut record = ContactRecord::new(name)?;
        if let Some(birthday) = &self.birthday {
            record.set_birthday(birthday)?;
        }
        if let Some(phones) = &self.phones {
            for phone in phones {
                record.add_phone(phone)?;
            }
        }
        Ok(record)
    }
}

/// Derive the on-disk path for a book base name: `<base>.json`.
///
/// The extension is always appended, never substituted, so a base of
/// `"backups/friends"` becomes `"backups/friends.json"`.
pub fn book_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path = base.as_ref().as_os_str().to_os_string();
    path.push(".");
    path.push(BOOK_EXTENSION);
    PathBuf::from(path)
}

/// Write `book` to `<base>.json` in one synchronous pass.
///
/// The file handle is scoped to this function and released on every exit
/// path. Returns the path written.
pub fn write_book(book: &ContactBook, base: impl AsRef<Path>) -> BookResult<PathBuf> {
    let path = book_path(base);

    let document: IndexMap<&str, PersistedRecord> = book
        .records()
        .map(|record| (record.name(), PersistedRecord::from_record(record)))
        .collect();

    let file = File::create(&path)?;
    serde_json::to_writer(BufWriter::new(file), &document)?;

    tracing::info!("Saved {} record(s) to {}", document.len(), path.display());
    Ok(path)
}

/// Read `<base>.json` and rebuild a book, revalidating every phone and
/// birthday and preserving the file's key order.
pub fn read_book(base: impl AsRef<Path>) -> BookResult<ContactBook> {
    let path = book_path(base);

    let file = File::open(&path)?;
    let document: IndexMap<String, PersistedRecord> =
        serde_json::from_reader(BufReader::new(file))?;

    let mut book = ContactBook::new();
    for (name, persisted) in document {
        book.add_record(persisted.into_record(&name)?);
    }

    tracing::info!("Loaded {} record(s) from {}", book.len(), path.display());
    Ok(book)
}
