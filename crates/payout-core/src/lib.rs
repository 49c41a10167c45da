//! Payout address decoding for mining job templates.
//!
//! This crate provides pure Rust implementations of:
//! - Base58Check decoding and validation (P2PKH, P2SH)
//! - Bech32 decoding and witness program extraction (v0..v16)
//! - scriptPubKey construction from an address string
//! - Serialized output records (amount, script length, script) as hex

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod base58;
pub mod bech32;
pub mod bits;
pub mod error;
pub mod hash;
pub mod network;
pub mod output;
pub mod script;
pub mod segwit;

pub use error::AddressError;
pub use hash::double_sha256;
pub use network::Network;
pub use output::{pack_output, OutputRecord, MAX_OUTPUT_RECORD_LEN};
pub use script::{
    address_to_script, decode_address, script_len, write_script, AddressEncoding, AddressType, DecodedAddress,
    LockingScript, MAX_SCRIPT_LEN,
};
pub use segwit::{decode_segwit_address, WitnessProgram};
