//! LEB128 variable-length integer primitives.
//!
//! Little-endian base-128: seven payload bits per byte, high bit as the
//! continuation flag. Values below 128 take one byte, which is the
//! typical case for term counts and identifier gaps.

use crate::error::DecodeError;

/// Longest legal encoding of a `u64`: ceil(64 / 7) bytes.
pub(crate) const MAX_VARINT_BYTES: usize = 10;

/// Append the varint encoding of `value` to `buf`.
pub(crate) fn encode(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
}

/// Decode one varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. `field` names
/// the value being decoded so the error pinpoints the failing step.
pub(crate) fn decode(bytes: &[u8], field: &'static str) -> Result<(u64, usize), DecodeError> {
    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        result |= u64::from(byte & 0x7F) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(DecodeError::VarintOverflow(field))
    } else {
        Err(DecodeError::Truncated(field))
    }
}

/// Decode one varint that must fit a `u32` identifier domain.
pub(crate) fn decode_u32(bytes: &[u8], field: &'static str) -> Result<(u32, usize), DecodeError> {
    let (value, consumed) = decode(bytes, field)?;
    let value = u32::try_from(value).map_err(|_| DecodeError::ValueOutOfRange { field, value })?;
    Ok((value, consumed))
}
