//! CAT text-protocol framing.
//!
//! The FTX-1 CAT protocol uses semicolon-terminated ASCII commands over a
//! serial link. There is no binary preamble, no addressing scheme, and no
//! BCD encoding. Commands are two-letter mnemonics followed by ASCII
//! parameters, terminated with `;`.
//!
//! # Frame format
//!
//! ```text
//! <mnemonic><params>;
//! ```
//!
//! - `mnemonic`: Two uppercase ASCII characters identifying the command
//!   (e.g. `FA`, `MD`, `TX`, `RM`).
//! - `params`: Zero or more ASCII characters (digits, sign characters,
//!   hex letters for mode codes).
//! - Terminator: `;` (0x3B).
//!
//! Replies echo the command mnemonic, followed by data, terminated with
//! `;`. The command catalog parses reply bodies by fixed character
//! offsets into the full body (mnemonic included), so this module does
//! not split mnemonic from data; it only builds outgoing frames and
//! recognizes the rig's error reply.

use bytes::{BufMut, BytesMut};

/// CAT command/response terminator byte.
pub const TERMINATOR: u8 = b';';

/// Body of the rig's error reply (`?;` on the wire, `?` once the
/// terminator is stripped). Sent for unrecognised or currently-invalid
/// commands.
pub const ERROR_REPLY: &str = "?";

/// Encode a complete command body into raw bytes ready for transmission.
///
/// Appends the terminator `;` to the body. The body must already contain
/// the mnemonic and any parameters; this function never inserts or
/// reorders characters.
///
/// # Example
///
/// ```
/// use ftxlib::protocol::encode_frame;
///
/// assert_eq!(encode_frame("FA"), b"FA;");
/// assert_eq!(encode_frame("FA014250000"), b"FA014250000;");
/// ```
pub fn encode_frame(body: &str) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(body.len() + 1);
    buf.put_slice(body.as_bytes());
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Check whether a reply body (terminator already stripped) is the rig's
/// error reply.
pub fn is_error_reply(body: &str) -> bool {
    body == ERROR_REPLY
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Frame encoding
    // ---------------------------------------------------------------

    #[test]
    fn encode_read_frequency() {
        assert_eq!(encode_frame("FA"), b"FA;");
    }

    #[test]
    fn encode_set_frequency() {
        assert_eq!(encode_frame("FA014250000"), b"FA014250000;");
    }

    #[test]
    fn encode_set_mode() {
        assert_eq!(encode_frame("MD02"), b"MD02;");
    }

    #[test]
    fn encode_ptt_on() {
        assert_eq!(encode_frame("TX1"), b"TX1;");
    }

    #[test]
    fn encode_bare_toggle() {
        assert_eq!(encode_frame("SV"), b"SV;");
    }

    #[test]
    fn encode_signed_params() {
        assert_eq!(encode_frame("CF001+0600"), b"CF001+0600;");
        assert_eq!(encode_frame("IS00-1200"), b"IS00-1200;");
    }

    #[test]
    fn every_frame_ends_with_exactly_one_terminator() {
        let bodies = [
            "FA",
            "FA014250000",
            "MD02",
            "TX1",
            "RM6",
            "KP45",
            "CF001+0600",
            "SV",
        ];
        for body in bodies {
            let frame = encode_frame(body);
            assert_eq!(*frame.last().unwrap(), TERMINATOR, "frame for {body:?}");
            let count = frame.iter().filter(|&&b| b == TERMINATOR).count();
            assert_eq!(count, 1, "frame for {body:?} has {count} terminators");
        }
    }

    // ---------------------------------------------------------------
    // Error reply recognition
    // ---------------------------------------------------------------

    #[test]
    fn error_reply_recognized() {
        assert!(is_error_reply("?"));
    }

    #[test]
    fn normal_replies_not_error() {
        assert!(!is_error_reply("FA014250000"));
        assert!(!is_error_reply(""));
        assert!(!is_error_reply("??"));
    }
}
