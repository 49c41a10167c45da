//! Base58 decoding and Base58Check validation for legacy addresses.

use crate::error::AddressError;
use crate::hash::double_sha256;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Size of a decoded legacy address: version, 20-byte hash, 4-byte checksum.
pub const LEGACY_PAYLOAD_LEN: usize = 25;

/// Trailing checksum bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Decode Base58 text into a right-aligned, big-endian buffer of exactly `N` bytes.
///
/// Fails on empty input, characters outside the alphabet, or a value too large
/// for `N` bytes. Shorter values are left-filled with zeros; whether that
/// matches the text's '1' prefix is left to [`check`].
pub fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], AddressError> {
    if input.is_empty() {
        return Err(AddressError::MalformedInput("empty base58 string"));
    }

    let mut out = [0u8; N];
    for &c in input.as_bytes() {
        let value = BASE58_ALPHABET
            .iter()
            .position(|&x| x == c)
            .ok_or(AddressError::MalformedInput("invalid base58 character"))? as u32;

        // Multiply by 58 and add value
        let mut carry = value;
        for byte in out.iter_mut().rev() {
            let temp = (*byte as u32) * 58 + carry;
            *byte = (temp & 0xFF) as u8;
            carry = temp >> 8;
        }
        if carry != 0 {
            return Err(AddressError::MalformedInput("base58 value too large"));
        }
    }

    Ok(out)
}

/// Validate a decoded Base58Check buffer against the text it came from.
///
/// The checksum is verified first; only then is the leading-zero count
/// compared with the count of leading '1' characters. Returns the version byte.
pub fn check(bin: &[u8], encoded: &str) -> Result<u8, AddressError> {
    if bin.len() <= CHECKSUM_LEN {
        return Err(AddressError::MalformedInput("base58check payload too short"));
    }
    let (payload, checksum) = bin.split_at(bin.len() - CHECKSUM_LEN);
    if double_sha256(payload)[..CHECKSUM_LEN] != *checksum {
        return Err(AddressError::ChecksumMismatch);
    }

    let zero_bytes = bin.iter().take_while(|&&b| b == 0).count();
    let one_chars = encoded.bytes().take_while(|&c| c == b'1').count();
    if zero_bytes != one_chars {
        return Err(AddressError::NonCanonicalEncoding);
    }

    Ok(bin[0])
}
