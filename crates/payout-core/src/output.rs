//! Serialized transaction outputs for generation (coinbase) transaction templates.
//!
//! Layout: 8-byte little-endian amount, 1-byte script length, script bytes.

use alloc::string::String;
use alloc::vec::Vec;
use crate::error::AddressError;
use crate::script::{address_to_script, LockingScript, MAX_SCRIPT_LEN};

/// Amount plus length prefix.
pub const OUTPUT_HEADER_LEN: usize = 9;

/// Largest record: header plus the largest witness script.
pub const MAX_OUTPUT_RECORD_LEN: usize = OUTPUT_HEADER_LEN + MAX_SCRIPT_LEN;

/// A single transaction output paying `amount` to `script`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRecord {
    amount: i64,
    script: LockingScript,
}

impl OutputRecord {
    pub fn new(amount: i64, script: LockingScript) -> Self {
        OutputRecord { amount, script }
    }

    /// Decode `address` and pay `amount` to it.
    pub fn for_address(amount: i64, address: &str) -> Result<Self, AddressError> {
        Ok(OutputRecord::new(amount, address_to_script(address)?))
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn script(&self) -> &LockingScript {
        &self.script
    }

    /// Serialized size in bytes.
    pub fn serialized_len(&self) -> usize {
        OUTPUT_HEADER_LEN + self.script.len()
    }

    /// Serialize into `out`; reports the required size without writing if it does not fit.
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, AddressError> {
        let len = self.serialized_len();
        if out.len() < len {
            return Err(AddressError::BufferTooSmall { required: len });
        }
        Ok(self.encode(out))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; MAX_OUTPUT_RECORD_LEN];
        let len = self.encode(&mut buf);
        buf[..len].to_vec()
    }

    /// Lowercase hex of the serialized record.
    pub fn to_hex(&self) -> String {
        let mut buf = [0u8; MAX_OUTPUT_RECORD_LEN];
        let len = self.encode(&mut buf);
        hex::encode(&buf[..len])
    }

    /// Append the hex form to `output`.
    pub fn append_hex(&self, output: &mut String) {
        output.push_str(&self.to_hex());
    }

    /// `buf` must hold at least `serialized_len()` bytes.
    fn encode(&self, buf: &mut [u8]) -> usize {
        let len = self.serialized_len();
        buf[..8].copy_from_slice(&self.amount.to_le_bytes());
        buf[8] = self.script.len() as u8;
        buf[OUTPUT_HEADER_LEN..len].copy_from_slice(self.script.as_bytes());
        len
    }
}

/// Decode `address` and append the hex-encoded output record paying `amount` to it.
///
/// Appends `2 * (9 + script_len)` characters on success and nothing on failure.
pub fn pack_output(output: &mut String, amount: i64, address: &str) -> Result<(), AddressError> {
    let record = OutputRecord::for_address(amount, address)?;
    record.append_hex(output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_p2wpkh() {
        let mut output = String::from("01000000");
        pack_output(&mut output, 312_500_000, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4").unwrap();

        // 312_500_000 = 0x12A05F20
        assert_eq!(
            output,
            "01000000205fa01200000000160014751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_pack_p2pkh_length() {
        let mut output = String::new();
        pack_output(&mut output, 5_000_000_000, "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").unwrap();

        assert_eq!(output.len(), 2 * (9 + 25));
        // 5_000_000_000 = 0x012A05F200, amount high word is non-zero
        assert!(output.starts_with("00f2052a0100000019"));
        assert!(output.ends_with("88ac"));
    }

    #[test]
    fn test_pack_failure_appends_nothing() {
        let mut output = String::from("prefix");
        let err = pack_output(&mut output, 1, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5").unwrap_err();
        assert_eq!(err, AddressError::ChecksumMismatch);
        assert_eq!(output, "prefix");
    }

    #[test]
    fn test_negative_amount_is_twos_complement() {
        let record = OutputRecord::for_address(-1, "3P14159f73E4gFr7JterCCQh9QjiTjiZrG").unwrap();
        let bytes = record.to_bytes();
        assert_eq!(&bytes[..8], &[0xff; 8]);
        assert_eq!(bytes[8], 23);
    }

    #[test]
    fn test_serialize_into() {
        let record = OutputRecord::for_address(0, "bc1pw508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7k7grplx")
            .unwrap();
        assert_eq!(record.serialized_len(), MAX_OUTPUT_RECORD_LEN);

        let mut small = [0u8; 50];
        assert_eq!(
            record.serialize_into(&mut small),
            Err(AddressError::BufferTooSmall { required: 51 })
        );
        assert!(small.iter().all(|&b| b == 0));

        let mut buf = [0u8; 64];
        assert_eq!(record.serialize_into(&mut buf), Ok(51));
        assert_eq!(&buf[..51], record.to_bytes().as_slice());
        assert_eq!(record.to_hex(), hex::encode(&buf[..51]));
    }
}
