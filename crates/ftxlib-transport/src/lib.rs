//! Transport implementations for ftxlib.
//!
//! This crate provides the concrete implementation of the
//! [`Transport`](ftxlib_core::Transport) trait from `ftxlib-core` for the
//! physical connection types the FTX-1 offers:
//!
//! - [`SerialTransport`]: the radio's USB virtual COM port and RS-232
//!   serial adapters on the ACC jack
//!
//! # Example
//!
//! ```no_run
//! use ftxlib_transport::SerialTransport;
//! use ftxlib_core::transport::Transport;
//! use std::time::Duration;
//!
//! # async fn example() -> ftxlib_core::Result<()> {
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", 38400).await?;
//!
//! // Query the radio's identity
//! transport.send(b"ID;").await?;
//!
//! // Receive response
//! let mut buf = [0u8; 64];
//! let n = transport.receive(&mut buf, Duration::from_secs(1)).await?;
//! # Ok(())
//! # }
//! ```

pub mod serial;

pub use serial::{DataBits, FlowControl, Parity, SerialConfig, SerialTransport, StopBits};
