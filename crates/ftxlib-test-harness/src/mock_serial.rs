//! Mock transport for deterministic testing of the CAT engine.
//!
//! [`MockTransport`] implements the [`Transport`] trait with pre-loaded
//! command/reply pairs. This lets you test command framing, the
//! byte-at-a-time reply reader, and reply parsing without a radio on the
//! bench.
//!
//! # Example
//!
//! ```
//! use ftxlib_test_harness::MockTransport;
//!
//! let mut mock = MockTransport::new();
//! // Pre-load: when the engine sends this frame, serve this reply.
//! mock.expect(b"FA;", b"FA014250000;");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;

use ftxlib_core::{Error, Result, Transport};

/// A pre-loaded command/reply pair for the mock transport.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact frame bytes we expect to be sent.
    request: Vec<u8>,
    /// The bytes to serve back once the matching frame is received.
    response: Vec<u8>,
}

/// A mock [`Transport`] for testing the CAT engine without hardware.
///
/// Expectations are consumed in order. When `send()` is called, the sent
/// frame is recorded and matched against the next expectation; the
/// corresponding reply is then served by subsequent `receive()` calls,
/// honoring whatever buffer size the caller reads with (the engine reads
/// one byte at a time). A reply without a trailing `;`, or an empty
/// reply, models a radio that stops talking mid-frame or stays silent:
/// once the served bytes run out, `receive()` returns [`Error::Timeout`].
///
/// If a sent frame does not match, or the queue is exhausted, `send()`
/// fails with [`Error::Protocol`].
#[derive(Debug)]
pub struct MockTransport {
    /// Ordered queue of expected command/reply pairs.
    expectations: VecDeque<Expectation>,
    /// The reply pending for the next `receive()` calls.
    pending_response: Option<Vec<u8>>,
    /// Cursor into the pending reply (bytes served so far).
    response_cursor: usize,
    /// Whether the transport is "connected".
    connected: bool,
    /// Log of all frames sent through this transport.
    sent_log: Vec<Vec<u8>>,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            expectations: VecDeque::new(),
            pending_response: None,
            response_cursor: 0,
            connected: true,
            sent_log: Vec::new(),
        }
    }

    /// Add an expected command/reply pair.
    ///
    /// When `send()` is called with a frame matching `request`, subsequent
    /// `receive()` calls serve `response`. An empty `response` models a
    /// radio that answers with silence.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        self.expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// All frames that have been sent through this transport, one element
    /// per `send()` call.
    pub fn sent_frames(&self) -> &[Vec<u8>] {
        &self.sent_log
    }

    /// The number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.expectations.len()
    }

    /// Force the connected state.
    ///
    /// When `false`, subsequent `send()` and `receive()` calls return
    /// [`Error::NotConnected`].
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        self.sent_log.push(data.to_vec());

        match self.expectations.pop_front() {
            Some(expectation) => {
                if data != expectation.request.as_slice() {
                    return Err(Error::Protocol(format!(
                        "unexpected frame: expected {:?}, got {:?}",
                        String::from_utf8_lossy(&expectation.request),
                        String::from_utf8_lossy(data)
                    )));
                }
                self.pending_response = Some(expectation.response);
                self.response_cursor = 0;
                Ok(())
            }
            None => Err(Error::Protocol(
                "no more expectations in mock transport".into(),
            )),
        }
    }

    async fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        if let Some(ref response) = self.pending_response {
            let remaining = &response[self.response_cursor..];
            if remaining.is_empty() {
                self.pending_response = None;
                self.response_cursor = 0;
                return Err(Error::Timeout);
            }
            let n = remaining.len().min(buf.len());
            buf[..n].copy_from_slice(&remaining[..n]);
            self.response_cursor += n;
            if self.response_cursor >= response.len() {
                // All reply bytes served; clear for the next exchange.
                self.pending_response = None;
                self.response_cursor = 0;
            }
            Ok(n)
        } else {
            Err(Error::Timeout)
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.connected = false;
        self.pending_response = None;
        self.response_cursor = 0;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
