//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod field_tests;
mod fixtures;
mod header_message_tests;
mod pifo_tests;
