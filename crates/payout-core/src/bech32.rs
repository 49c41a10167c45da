//! Bech32 decoding (BIP173 checksum constant only).

use alloc::string::String;
use alloc::vec::Vec;
use crate::error::AddressError;

/// The 32-character data alphabet.
pub const BECH32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Shortest and longest accepted encoded string.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 90;

/// Number of trailing checksum symbols.
pub const CHECKSUM_LENGTH: usize = 6;

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Reverse lookup by ASCII code, -1 for characters outside the alphabet.
/// Upper and lower case letters map to the same value.
const CHARSET_REV: [i8; 128] = build_charset_rev();

const fn build_charset_rev() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < BECH32_CHARSET.len() {
        let c = BECH32_CHARSET[i];
        table[c as usize] = i as i8;
        if c.is_ascii_lowercase() {
            table[c.to_ascii_uppercase() as usize] = i as i8;
        }
        i += 1;
    }
    table
}

/// Decoded Bech32 string: lowercase human-readable part and 5-bit data symbols
/// with the checksum removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Data {
    pub hrp: String,
    pub data: Vec<u8>,
}

/// One round of the BCH checksum over GF(32).
#[inline]
pub fn polymod_step(pre: u32) -> u32 {
    let top = pre >> 25;
    let mut chk = (pre & 0x1ff_ffff) << 5;
    for (i, &g) in GENERATOR.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            chk ^= g;
        }
    }
    chk
}

/// Map a data character to its 5-bit value.
#[inline]
fn charset_value(c: u8) -> Option<u8> {
    CHARSET_REV
        .get(c as usize)
        .copied()
        .filter(|&v| v >= 0)
        .map(|v| v as u8)
}

/// Decode a Bech32 string.
///
/// The string is always consumed completely before mixed case is reported,
/// but an unmappable data character fails on the spot.
pub fn decode(input: &str) -> Result<Bech32Data, AddressError> {
    let bytes = input.as_bytes();
    let input_len = bytes.len();

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&input_len) {
        return Err(AddressError::MalformedInput("bech32 length out of range"));
    }

    let sep_pos = bytes
        .iter()
        .rposition(|&b| b == b'1')
        .ok_or(AddressError::MalformedInput("missing separator"))?;
    if sep_pos == 0 {
        return Err(AddressError::MalformedInput("empty human-readable part"));
    }
    let data_len = input_len - sep_pos - 1;
    if data_len < CHECKSUM_LENGTH {
        return Err(AddressError::MalformedInput("data part too short"));
    }

    let hrp_bytes = &bytes[..sep_pos];
    let mut have_lower = false;
    let mut have_upper = false;
    let mut hrp = String::with_capacity(sep_pos);
    let mut chk: u32 = 1;

    for &b in hrp_bytes {
        if !(33..=126).contains(&b) {
            return Err(AddressError::MalformedInput("invalid character in human-readable part"));
        }
        let mut ch = b;
        if ch.is_ascii_lowercase() {
            have_lower = true;
        } else if ch.is_ascii_uppercase() {
            have_upper = true;
            ch = ch.to_ascii_lowercase();
        }
        hrp.push(ch as char);
        chk = polymod_step(chk) ^ (ch >> 5) as u32;
    }
    chk = polymod_step(chk);
    for &b in hrp_bytes {
        chk = polymod_step(chk) ^ (b & 0x1f) as u32;
    }

    let payload_len = data_len - CHECKSUM_LENGTH;
    let mut data = Vec::with_capacity(payload_len);
    for (i, &b) in bytes[sep_pos + 1..].iter().enumerate() {
        if b.is_ascii_lowercase() {
            have_lower = true;
        } else if b.is_ascii_uppercase() {
            have_upper = true;
        }
        let value = charset_value(b).ok_or(AddressError::MalformedInput("invalid data character"))?;
        chk = polymod_step(chk) ^ value as u32;
        if i < payload_len {
            data.push(value);
        }
    }

    if have_lower && have_upper {
        return Err(AddressError::MalformedInput("mixed case"));
    }
    if chk != 1 {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(Bech32Data { hrp, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_table_round_trips() {
        for (i, &c) in BECH32_CHARSET.iter().enumerate() {
            assert_eq!(charset_value(c), Some(i as u8));
            assert_eq!(charset_value(c.to_ascii_uppercase()), Some(i as u8));
        }
        for c in [b'1', b'b', b'i', b'o', b'B', b'I', b'O', b'!', 0x7f, 0x80, 0xff] {
            assert_eq!(charset_value(c), None);
        }
    }

    #[test]
    fn test_valid_checksums() {
        // BIP173 valid checksum vectors
        for s in [
            "A12UEL5L",
            "a12uel5l",
            "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
            "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
            "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
            "?1ezyfcl",
        ] {
            assert!(decode(s).is_ok(), "{}", s);
        }
    }

    #[test]
    fn test_hrp_lowercased() {
        let decoded = decode("A12UEL5L").unwrap();
        assert_eq!(decoded.hrp, "a");
        assert!(decoded.data.is_empty());
    }

    #[test]
    fn test_data_excludes_checksum() {
        let decoded = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
        assert_eq!(decoded.hrp, "abcdef");
        let expected: Vec<u8> = (0..32).collect();
        assert_eq!(decoded.data, expected);
    }

    #[test]
    fn test_invalid_strings() {
        // HRP character out of range
        assert!(matches!(decode("\u{7f}1axkwrx"), Err(AddressError::MalformedInput(_))));
        // Overall max length exceeded
        assert!(matches!(
            decode("an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx"),
            Err(AddressError::MalformedInput(_))
        ));
        // No separator
        assert!(matches!(decode("pzry9x0s0muk"), Err(AddressError::MalformedInput(_))));
        // Empty HRP
        assert!(matches!(decode("1pzry9x0s0muk"), Err(AddressError::MalformedInput(_))));
        // Invalid data character
        assert!(matches!(decode("x1b4n0q5v"), Err(AddressError::MalformedInput(_))));
        // Too short checksum
        assert!(matches!(decode("li1dgmt3"), Err(AddressError::MalformedInput(_))));
        // Too short overall
        assert!(matches!(decode("a1qqqqq"), Err(AddressError::MalformedInput(_))));
        // Checksum calculated with uppercase form of HRP
        assert!(matches!(decode("A1G7SGD8"), Err(AddressError::ChecksumMismatch)));
    }

    #[test]
    fn test_mixed_case_rejected() {
        assert!(matches!(decode("A12uEL5L"), Err(AddressError::MalformedInput("mixed case"))));
        assert!(matches!(
            decode("BC1Qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
            Err(AddressError::MalformedInput("mixed case"))
        ));
    }

    #[test]
    fn test_single_character_flip_fails() {
        let valid = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        let separator = valid.rfind('1').unwrap();
        let bytes = valid.as_bytes();
        for pos in 0..bytes.len() {
            if pos == separator {
                continue;
            }
            for &replacement in BECH32_CHARSET.iter() {
                if replacement == bytes[pos] {
                    continue;
                }
                let mut mutated = bytes.to_vec();
                mutated[pos] = replacement;
                let mutated = core::str::from_utf8(&mutated).unwrap();
                assert!(decode(mutated).is_err(), "{}", mutated);
            }
        }
    }
}
