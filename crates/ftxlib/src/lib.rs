//! CAT controller for the Yaesu FTX-1 transceiver.
//!
//! This crate implements the FTX-1's CAT (Computer Aided Transceiver)
//! text protocol over a serial transport. It provides:
//!
//! - **Protocol framing** ([`protocol`]) -- the `;` terminator, frame
//!   encoding, and `?` error-reply detection.
//! - **Command catalog** ([`commands`]) -- pure builders and parsers for
//!   every supported operation (frequency, mode, PTT, power, AGC, audio
//!   levels, meters, VFO/memory, split, clarifier, band, scan, CW,
//!   filters, noise reduction, identity), with argument validation before
//!   anything touches the wire.
//! - **Model definitions** ([`models`]) -- the Field head and SPA-1
//!   station configurations with their power ranges and capabilities.
//! - **Rig handle** ([`rig`]) -- [`Ftx1Rig`], the transaction engine plus
//!   one async method per operation.
//! - **Builder** ([`builder`]) -- [`Ftx1Builder`], fluent construction
//!   with configurable port, baud, timeout, and write delay.
//!
//! The typed vocabulary (sides, modes, bands, errors) lives in
//! `ftxlib-core` and is re-exported here, so applications normally depend
//! on this crate alone.
//!
//! # Example
//!
//! ```
//! use ftxlib::Side;
//! use ftxlib::commands::{cmd_read_frequency, parse_frequency_reply};
//! use ftxlib::protocol::encode_frame;
//!
//! // Build a "read MAIN VFO frequency" command.
//! let cmd = cmd_read_frequency(Side::Main);
//! assert_eq!(encode_frame(&cmd), b"FA;");
//!
//! // Parse the reply body the rig sends back.
//! let freq = parse_frequency_reply("FA014250000", Side::Main).unwrap();
//! assert_eq!(freq, 14_250_000);
//! ```
//!
//! Talking to real hardware goes through the builder:
//!
//! ```no_run
//! # async fn example() -> ftxlib::Result<()> {
//! use ftxlib::{Ftx1Builder, Side, models::ftx1_field};
//!
//! let rig = Ftx1Builder::new(ftx1_field())
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//!
//! rig.set_frequency(Side::Main, 14_250_000).await?;
//! println!("tuned to {} Hz", rig.get_frequency(Side::Main).await?);
//! # Ok(())
//! # }
//! ```

pub use ftxlib_core::*;

pub mod builder;
pub mod commands;
pub mod models;
pub mod protocol;
pub mod rig;

pub use builder::Ftx1Builder;
pub use rig::Ftx1Rig;
