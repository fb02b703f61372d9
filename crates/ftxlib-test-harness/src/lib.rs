//! ftxlib-test-harness: Test utilities for ftxlib.
//!
//! This crate provides [`MockTransport`] for deterministic unit testing
//! of the CAT engine without requiring real radio hardware.

pub mod mock_serial;

pub use mock_serial::MockTransport;
