//! Error types for ftxlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer, protocol-layer, and
//! argument-validation errors are all captured here.

/// The error type for all ftxlib operations.
///
/// The variants keep the failure modes distinct so callers can tell
/// "radio unreachable" ([`Error::Transport`], [`Error::Io`]) apart from
/// "radio returned something confusing" ([`Error::Protocol`]) and from
/// "I passed a bad argument" ([`Error::InvalidParameter`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (serial port open/read/write failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error: a CAT reply that is too short, fails its
    /// mnemonic echo, or carries content that does not decode.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A timed read on the transport yielded nothing.
    ///
    /// The transaction engine converts this into the empty/partial-reply
    /// path; it typically indicates the radio is powered off or the baud
    /// rate is wrong.
    #[error("timeout waiting for response")]
    Timeout,

    /// An argument failed its range check before any bytes were sent.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No connection to the radio has been established.
    #[error("not connected")]
    NotConnected,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
