//! Rolodex - a file-backed personal contact book.
//!
//! This library stores named contacts, each with an ordered list of
//! validated ten-digit phone numbers and an optional birthday. It supports
//! regex search over names and phones, paginated iteration over a stable
//! snapshot, and whole-file JSON persistence. It is single-threaded and
//! synchronous; an interactive shell is expected to live in a separate
//! crate and call into this one.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: the contact record
//! - **book**: the name-keyed book and its paginated view
//! - **storage**: on-disk JSON schema and whole-file read/write
//! - **config**: environment-driven defaults
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{ContactBook, PaginatedView, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult, RecordError, RecordResult};
pub use models::ContactRecord;
pub use storage::DEFAULT_BOOK_NAME;
