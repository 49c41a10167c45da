//! Bit regrouping between arbitrary group widths.

use alloc::vec::Vec;
use crate::error::AddressError;

/// Regroup `data` from `from_bits`-wide values into `to_bits`-wide values, MSB first.
///
/// With `pad`, a trailing partial group is left-justified and zero-filled.
/// Without it, leftover bits must be fewer than `from_bits` and all zero;
/// anything else means the input was not produced by the padded direction.
///
/// Both widths must be non-zero and sum to at most 32.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>, AddressError> {
    if from_bits == 0 || to_bits == 0 || from_bits + to_bits > 32 {
        return Err(AddressError::MalformedInput("invalid group width"));
    }
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);
    let max_value = (1u32 << to_bits) - 1;
    let max_acc = (1u32 << (from_bits + to_bits - 1)) - 1;

    for &value in data {
        let value = value as u32;
        if value >> from_bits != 0 {
            return Err(AddressError::MalformedInput("value wider than source group"));
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(AddressError::MalformedInput("invalid padding"));
    }

    Ok(result)
}
