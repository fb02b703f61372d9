//! Ftx1Builder -- fluent builder for constructing [`Ftx1Rig`] instances.
//!
//! Separates configuration from construction so that callers can set up
//! serial port parameters and timing before establishing the transport
//! connection.
//!
//! # Example
//!
//! ```no_run
//! use ftxlib::builder::Ftx1Builder;
//! use ftxlib::models::ftx1_field;
//! use std::time::Duration;
//!
//! # async fn example() -> ftxlib_core::Result<()> {
//! let rig = Ftx1Builder::new(ftx1_field())
//!     .serial_port("/dev/ttyUSB0")
//!     .command_timeout(Duration::from_millis(500))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use ftxlib_core::{Error, Result, Transport};

use crate::models::Ftx1Model;
use crate::rig::Ftx1Rig;

/// How long to wait for a complete reply to one command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(1);

/// Pause between writing a command and reading its reply, giving the
/// radio's CAT processor time to respond.
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_millis(50);

/// Fluent builder for [`Ftx1Rig`].
///
/// All configuration has sensible defaults derived from the
/// [`Ftx1Model`], so the simplest usage is:
///
/// ```ignore
/// let rig = Ftx1Builder::new(ftx1_field())
///     .serial_port("/dev/ttyUSB0")
///     .build()
///     .await?;
/// ```
pub struct Ftx1Builder {
    model: Ftx1Model,
    serial_port: Option<String>,
    baud_rate: Option<u32>,
    command_timeout: Duration,
    write_delay: Duration,
}

impl Ftx1Builder {
    /// Create a new builder for the given station model.
    ///
    /// Defaults:
    /// - baud_rate: from the model (38400)
    /// - command_timeout: 1 s
    /// - write_delay: 50 ms
    pub fn new(model: Ftx1Model) -> Self {
        Ftx1Builder {
            model,
            serial_port: None,
            baud_rate: None,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            write_delay: DEFAULT_WRITE_DELAY,
        }
    }

    /// Set the serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, port: &str) -> Self {
        self.serial_port = Some(port.to_string());
        self
    }

    /// Override the default baud rate for this model.
    pub fn baud_rate(mut self, rate: u32) -> Self {
        self.baud_rate = Some(rate);
        self
    }

    /// Set the timeout for waiting for a reply to a single CAT command
    /// (default: 1 s).
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set the pause between writing a command and reading its reply
    /// (default: 50 ms). `Duration::ZERO` disables it.
    pub fn write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = delay;
        self
    }

    /// Build an [`Ftx1Rig`] using a serial transport.
    ///
    /// Requires that [`serial_port()`](Self::serial_port) has been called.
    /// The baud rate defaults to the model's default if not overridden.
    pub async fn build(self) -> Result<Ftx1Rig> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("serial_port is required for build()".into()))?;
        let baud = self.baud_rate.unwrap_or(self.model.default_baud_rate);

        let transport = ftxlib_transport::SerialTransport::open(port, baud).await?;
        Ok(self.build_with_transport(Box::new(transport)))
    }

    /// Build an [`Ftx1Rig`] with a caller-provided transport.
    ///
    /// This is the primary entry point for testing (pass a
    /// `MockTransport` from `ftxlib-test-harness`) and for advanced use
    /// cases where the caller manages the transport lifecycle directly.
    pub fn build_with_transport(self, transport: Box<dyn Transport>) -> Ftx1Rig {
        Ftx1Rig::new(
            transport,
            self.model,
            self.command_timeout,
            self.write_delay,
        )
    }
}
