//! Shared helpers for integration tests.

#![allow(dead_code)]

use rolodex::ContactRecord;

/// Install a tracing subscriber once per test binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a record with the given phones already attached.
pub fn record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name).expect("fixture name is non-empty");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// Build a record with phones and a birthday.
pub fn record_with_birthday(name: &str, phones: &[&str], birthday: &str) -> ContactRecord {
    let mut record = record(name, phones);
    record
        .set_birthday(birthday)
        .expect("fixture birthday is valid");
    record
}
