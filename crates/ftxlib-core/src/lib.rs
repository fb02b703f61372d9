//! ftxlib-core: Core traits, types, and error definitions for ftxlib.
//!
//! This crate defines the transport-agnostic abstractions the FTX-1 driver
//! is built on. Applications depend on these types without pulling in the
//! serial backend or the command catalog.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level communication channel
//! - [`Error`] / [`Result`] -- error handling
//! - [`Side`], [`OperatingMode`], [`Band`], ... -- the typed vocabulary of
//!   the CAT protocol

pub mod band;
pub mod error;
pub mod helpers;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use ftxlib_core::*`.
pub use band::{Band, ParseBandError};
pub use error::{Error, Result};
pub use helpers::{format_freq_mhz, s_units_from_raw};
pub use transport::Transport;
pub use types::*;
