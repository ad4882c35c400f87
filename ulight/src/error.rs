//! The one fallible operation in the crate: decoding a UTF-8 code point.
//!
//! Everything above [`crate::utf8::decode`] is tolerant by design: a decode
//! failure never escapes [`crate::highlight`] — it is turned into a
//! single-byte `error` token by the driver.

use std::{error::Error as StdError, fmt};

/// The byte at the current scan position does not begin a valid UTF-8
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecodeError;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid UTF-8 byte sequence")
    }
}

impl StdError for DecodeError {}
