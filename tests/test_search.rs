//! Integration tests for regex search across names and phone numbers.
//!
//! Every record's name and every phone it holds are matched independently,
//! so one record can contribute several results.

use rolodex::{BookError, ContactBook};

mod common;
use common::*;

fn sample_book() -> ContactBook {
    let mut book = ContactBook::new();
    book.add_record(record("Alice Smith", &["1112223333"]));
    book.add_record(record("Bob Jones", &["4445556666", "7778889999"]));
    book.add_record(record_with_birthday("Carol", &[], "1990-01-01"));
    book
}

#[test]
fn test_name_pattern_matches() {
    init_tracing();

    let book = sample_book();
    assert_eq!(book.find("Smith").unwrap(), ["Alice Smith"]);
    assert_eq!(book.find("^Bob").unwrap(), ["Bob Jones"]);
    assert_eq!(book.find("o").unwrap(), ["Bob Jones", "Carol"]);
}

#[test]
fn test_phone_pattern_matches_contacts_that_have_phones() {
    let book = sample_book();

    // Digit substring of Bob's first phone.
    assert_eq!(book.find("555").unwrap(), ["Bob Jones"]);

    // Anchored full-number match.
    assert_eq!(book.find("^1112223333$").unwrap(), ["Alice Smith"]);
}

#[test]
fn test_name_repeats_once_per_matching_phone() {
    let book = sample_book();

    // Both of Bob's phones contain a run of sixes or nines.
    assert_eq!(book.find("[69]{3}").unwrap(), ["Bob Jones", "Bob Jones"]);
}

#[test]
fn test_results_follow_insertion_order() {
    let mut book = ContactBook::new();
    book.add_record(record("Zoe", &["1234500000"]));
    book.add_record(record("Adam", &["1234511111"]));

    assert_eq!(book.find("12345").unwrap(), ["Zoe", "Adam"]);
}

#[test]
fn test_pattern_is_trimmed() {
    let book = sample_book();
    assert_eq!(book.find("  Carol\n").unwrap(), ["Carol"]);
}

#[test]
fn test_no_match_returns_empty() {
    let book = sample_book();
    assert!(book.find("0000000000").unwrap().is_empty());
    assert!(book.find("Nobody").unwrap().is_empty());
}

#[test]
fn test_invalid_regex_is_an_error() {
    let book = sample_book();
    assert!(matches!(
        book.find("[unclosed").unwrap_err(),
        BookError::Pattern(_)
    ));
}
