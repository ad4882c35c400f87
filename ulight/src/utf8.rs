//! The UTF-8 decoder (C2): decode one code point from the front of a byte
//! slice without committing to any particular input representation (stream,
//! buffer, mmap, ...).

use crate::error::DecodeError;

/// Decodes the single UTF-8 code point starting at `s[0]`.
///
/// On success, returns the decoded scalar value and the number of bytes it
/// occupied (1–4). Returns an error on an empty slice as well as on a
/// malformed sequence, so callers can treat "nothing left to decode" the
/// same way as any other decode failure.
pub(crate) fn decode(s: &[u8]) -> Result<(char, usize), DecodeError> {
    let Some(&first) = s.first() else {
        return Err(DecodeError);
    };

    if first < 0x80 {
        return Ok((first as char, 1));
    }

    let len = if first & 0b1110_0000 == 0b1100_0000 {
        2
    } else if first & 0b1111_0000 == 0b1110_0000 {
        3
    } else if first & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        return Err(DecodeError);
    };

    if s.len() < len {
        return Err(DecodeError);
    }

    match std::str::from_utf8(&s[..len]) {
        Ok(decoded) => {
            let ch = decoded.chars().next().ok_or(DecodeError)?;
            Ok((ch, len))
        }
        Err(_) => Err(DecodeError),
    }
}
