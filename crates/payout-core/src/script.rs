//! Address to scriptPubKey dispatch.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Base58Check, any non script-hash version byte
//! - P2SH (Pay to Script Hash) - Base58Check, version 5 (mainnet) or 196 (testnet)
//! - Witness programs v0..v16 - Bech32, `OP_n <program>`
//!
//! Legacy decoding is always attempted first. Segwit decoding is only tried
//! when the string is not Base58 at all; a Base58 string with a bad checksum
//! fails outright.

use alloc::string::String;
use tracing::debug;
use crate::base58::{self, LEGACY_PAYLOAD_LEN};
use crate::error::AddressError;
use crate::network::Network;
use crate::segwit::{decode_segwit_address, WitnessProgram, MAX_PROGRAM_LEN};

/// Largest script this module produces: `OP_n`, push length, 40-byte program.
pub const MAX_SCRIPT_LEN: usize = MAX_PROGRAM_LEN + 2;

pub const P2PKH_SCRIPT_LEN: usize = 25;
pub const P2SH_SCRIPT_LEN: usize = 23;

const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;
const PUSH_20: u8 = 0x14;

/// Which text encoding the address used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressEncoding {
    /// Base58Check
    Legacy,
    /// Bech32
    SegWit,
}

/// Bitcoin address type, as implied by the produced script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2PKH,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    P2SH,
    /// Native SegWit v0 P2WPKH: OP_0 <20-byte-hash>
    P2WPKH,
    /// Native SegWit v0 P2WSH: OP_0 <32-byte-hash>
    P2WSH,
    /// Witness v1 with a 32-byte program: OP_1 <32-byte-x-only-pubkey>
    P2TR,
    /// Any other witness version/length combination
    WitnessUnknown,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
            AddressType::P2TR => "P2TR",
            AddressType::WitnessUnknown => "witness_unknown",
        }
    }

    fn of_witness(witness: &WitnessProgram) -> Self {
        match (witness.version(), witness.program().len()) {
            (0, 20) => AddressType::P2WPKH,
            (0, 32) => AddressType::P2WSH,
            (1, 32) => AddressType::P2TR,
            _ => AddressType::WitnessUnknown,
        }
    }
}

/// A locking script held on the stack. Built once, never modified.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LockingScript {
    bytes: [u8; MAX_SCRIPT_LEN],
    len: u8,
    address_type: AddressType,
}

impl LockingScript {
    fn p2pkh(hash: &[u8; 20]) -> Self {
        let mut bytes = [0u8; MAX_SCRIPT_LEN];
        bytes[0] = OP_DUP;
        bytes[1] = OP_HASH160;
        bytes[2] = PUSH_20;
        bytes[3..23].copy_from_slice(hash);
        bytes[23] = OP_EQUALVERIFY;
        bytes[24] = OP_CHECKSIG;
        LockingScript { bytes, len: P2PKH_SCRIPT_LEN as u8, address_type: AddressType::P2PKH }
    }

    fn p2sh(hash: &[u8; 20]) -> Self {
        let mut bytes = [0u8; MAX_SCRIPT_LEN];
        bytes[0] = OP_HASH160;
        bytes[1] = PUSH_20;
        bytes[2..22].copy_from_slice(hash);
        bytes[22] = OP_EQUAL;
        LockingScript { bytes, len: P2SH_SCRIPT_LEN as u8, address_type: AddressType::P2SH }
    }

    fn witness(witness: &WitnessProgram) -> Self {
        let program = witness.program();
        let mut bytes = [0u8; MAX_SCRIPT_LEN];
        bytes[0] = witness.version_opcode();
        bytes[1] = program.len() as u8;
        bytes[2..2 + program.len()].copy_from_slice(program);
        LockingScript {
            bytes,
            len: witness.script_len() as u8,
            address_type: AddressType::of_witness(witness),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Lowercase hex of the script bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Copy into `out`, or report the needed size without touching it.
    pub fn write_to(&self, out: &mut [u8]) -> Result<usize, AddressError> {
        let len = self.len();
        if out.len() < len {
            return Err(AddressError::BufferTooSmall { required: len });
        }
        out[..len].copy_from_slice(self.as_bytes());
        Ok(len)
    }
}

impl AsRef<[u8]> for LockingScript {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for LockingScript {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LockingScript")
            .field("address_type", &self.address_type)
            .field("bytes", &self.to_hex())
            .finish()
    }
}

/// A decoded address with its scriptPubKey.
#[derive(Debug, Clone)]
pub struct DecodedAddress {
    /// Base58Check or Bech32.
    pub encoding: AddressEncoding,
    /// The type of address.
    pub address_type: AddressType,
    /// The network the prefix belongs to, if it is a known one.
    pub network: Option<Network>,
    /// The scriptPubKey for this address (used in transaction outputs).
    pub script: LockingScript,
}

/// Decode an address, legacy first, then segwit.
pub fn decode_address(address: &str) -> Result<DecodedAddress, AddressError> {
    let result = match base58::decode_fixed::<LEGACY_PAYLOAD_LEN>(address) {
        Ok(bin) => decode_legacy(&bin, address),
        Err(_) => decode_segwit(address),
    };
    if let Err(err) = &result {
        debug!(address, %err, "address decode failed");
    }
    result
}

/// Build the script for a Base58Check payload that has already been decoded.
fn decode_legacy(bin: &[u8; LEGACY_PAYLOAD_LEN], address: &str) -> Result<DecodedAddress, AddressError> {
    let version = base58::check(bin, address)?;

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&bin[1..21]);

    let script = if Network::is_script_hash_version(version) {
        LockingScript::p2sh(&hash)
    } else {
        LockingScript::p2pkh(&hash)
    };

    Ok(DecodedAddress {
        encoding: AddressEncoding::Legacy,
        address_type: script.address_type(),
        network: Network::from_legacy_version(version),
        script,
    })
}

fn decode_segwit(address: &str) -> Result<DecodedAddress, AddressError> {
    let (hrp, witness) = decode_segwit_address(address)?;
    let script = LockingScript::witness(&witness);

    Ok(DecodedAddress {
        encoding: AddressEncoding::SegWit,
        address_type: script.address_type(),
        network: Network::from_hrp(&hrp),
        script,
    })
}

/// Decode an address and return its locking script.
pub fn address_to_script(address: &str) -> Result<LockingScript, AddressError> {
    decode_address(address).map(|decoded| decoded.script)
}

/// Write the locking script for `address` into `out`.
///
/// Two-pass contract: when `out` is too small the call returns
/// [`AddressError::BufferTooSmall`] carrying the required size and leaves
/// `out` untouched, so a caller may probe with an empty slice, allocate, and
/// call again. On success returns the number of bytes written.
pub fn write_script(out: &mut [u8], address: &str) -> Result<usize, AddressError> {
    address_to_script(address)?.write_to(out)
}

/// Size of the locking script for `address`.
pub fn script_len(address: &str) -> Result<usize, AddressError> {
    match write_script(&mut [], address) {
        Ok(len) => Ok(len),
        Err(err) => err.required_len().ok_or(err),
    }
}
