//! Segregated witness address decoding.

use alloc::string::String;
use alloc::vec::Vec;
use tracing::trace;
use crate::bech32;
use crate::bits::convert_bits;
use crate::error::AddressError;

/// Highest witness version an address may carry.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Bounds on the program length for any witness version.
pub const MIN_PROGRAM_LEN: usize = 2;
pub const MAX_PROGRAM_LEN: usize = 40;

/// Upper bound on 5-bit symbols (version included) before repacking.
const MAX_DATA_SYMBOLS: usize = 65;

/// A version-tagged witness program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessProgram {
    version: u8,
    program: Vec<u8>,
}

impl WitnessProgram {
    /// Build a program, enforcing the per-version length rules.
    pub fn new(version: u8, program: Vec<u8>) -> Result<Self, AddressError> {
        if version > MAX_WITNESS_VERSION {
            return Err(AddressError::InvalidWitnessVersion(version));
        }
        let length = program.len();
        if !(MIN_PROGRAM_LEN..=MAX_PROGRAM_LEN).contains(&length) || (version == 0 && length != 20 && length != 32) {
            return Err(AddressError::InvalidWitnessProgramLength { version, length });
        }
        Ok(WitnessProgram { version, program })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Size of the scriptPubKey this program encodes to.
    pub fn script_len(&self) -> usize {
        self.program.len() + 2
    }

    /// The opcode pushing the version: OP_0, or OP_1..OP_16 (0x51..0x60).
    pub fn version_opcode(&self) -> u8 {
        if self.version == 0 {
            0x00
        } else {
            0x50 + self.version
        }
    }
}

/// Decode a Bech32 segwit address into its human-readable part and witness program.
///
/// The human-readable part is returned as-is; no network is enforced.
pub fn decode_segwit_address(address: &str) -> Result<(String, WitnessProgram), AddressError> {
    let decoded = bech32::decode(address)?;

    let (&version, symbols) = decoded
        .data
        .split_first()
        .ok_or(AddressError::MalformedInput("empty witness data"))?;
    if decoded.data.len() > MAX_DATA_SYMBOLS {
        return Err(AddressError::MalformedInput("witness data too long"));
    }
    if version > MAX_WITNESS_VERSION {
        return Err(AddressError::InvalidWitnessVersion(version));
    }

    let program = convert_bits(symbols, 5, 8, false)?;
    trace!(hrp = %decoded.hrp, version, len = program.len(), "decoded witness program");

    let witness = WitnessProgram::new(version, program)?;
    Ok((decoded.hrp, witness))
}
