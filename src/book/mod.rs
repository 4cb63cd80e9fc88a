//! The contact book: a name-keyed, insertion-ordered collection of records.

pub mod pages;

use crate::error::BookResult;
use crate::models::ContactRecord;
use crate::storage;
use indexmap::IndexMap;
use regex::Regex;
use std::path::{Path, PathBuf};

pub use pages::{PaginatedView, DEFAULT_PAGE_SIZE};

/// A mapping from contact name to [`ContactRecord`].
///
/// One record per unique name; adding a record under an existing name
/// silently replaces the previous one. Records keep the order in which
/// their names first entered the book, and every operation that walks the
/// book (search, pagination, persistence) follows that order.
///
/// A book is created empty with [`new`](Self::new) or hydrated from a JSON
/// file with [`load`](Self::load); it persists only on an explicit
/// [`save`](Self::save).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    records: IndexMap<String, ContactRecord>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Iterate the records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Insert `record` under its name, silently replacing any existing
    /// record with the same name (last write wins, no merge). A replaced
    /// name keeps its original position in the book's order.
    pub fn add_record(&mut self, record: ContactRecord) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Remove the record for `name`. Absence is a no-op.
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    /// Search the book with a regular expression.
    ///
    /// The pattern is trimmed of surrounding whitespace, compiled, and
    /// matched against every contact name and every phone number. Results
    /// are owner names in the book's insertion order; a name is pushed once
    /// for a name match and once more for each matching phone, so one
    /// record can contribute several entries.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Pattern` when the pattern does not compile.
    pub fn find(&self, pattern: &str) -> BookResult<Vec<String>> {
        let regex = Regex::new(pattern.trim())?;

        let mut found_names = Vec::new();
        for (name, record) in &self.records {
            if regex.is_match(name) {
                found_names.push(name.clone());
            }
            for phone in record.phones() {
                if regex.is_match(phone.as_str()) {
                    found_names.push(name.clone());
                }
            }
        }

        tracing::debug!(
            "Pattern {:?} matched {} result(s) across {} record(s)",
            pattern,
            found_names.len(),
            self.records.len()
        );
        Ok(found_names)
    }

    /// Create a [`PaginatedView`] over a snapshot of the current records,
    /// `page_size` records per page.
    ///
    /// Mutating the book afterwards does not affect an in-progress view.
    pub fn iterator(&self, page_size: usize) -> PaginatedView {
        PaginatedView::new(self.records.values().cloned().collect(), page_size)
    }

    /// Serialize the book to `<base>.json` (the extension is always
    /// appended). Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` or `BookError::Json` on failure; the file
    /// handle is released on every path.
    pub fn save(&self, base: impl AsRef<Path>) -> BookResult<PathBuf> {
        storage::write_book(self, base)
    }

    /// Hydrate a book from `<base>.json`, reconstructing records in file
    /// order and revalidating every phone and birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` for a missing/unreadable file,
    /// `BookError::Json` for a malformed document, and
    /// `BookError::Validation` for content that fails domain validation.
    pub fn load(base: impl AsRef<Path>) -> BookResult<Self> {
        storage::read_book(base)
    }
}
