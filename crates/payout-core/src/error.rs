//! Error type shared by every decode and build step.

/// Why an address could not be turned into a locking script.
///
/// Every failure is returned as a value; callers decide whether a bad payout
/// address aborts job construction or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Length out of bounds, illegal character, missing separator, bad padding.
    #[error("malformed address: {0}")]
    MalformedInput(&'static str),

    /// Bech32 polymod residue was not 1, or the Base58Check digest did not match.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Leading zero bytes and leading '1' characters disagree.
    #[error("non-canonical base58 encoding")]
    NonCanonicalEncoding,

    /// Witness version above 16.
    #[error("invalid witness version: {0}")]
    InvalidWitnessVersion(u8),

    /// Witness program length outside what the version allows.
    #[error("invalid witness program length {length} for version {version}")]
    InvalidWitnessProgramLength { version: u8, length: usize },

    /// Destination buffer cannot hold the result; nothing was written.
    #[error("buffer too small: {required} bytes required")]
    BufferTooSmall { required: usize },
}

impl AddressError {
    /// The size a retry needs, if this error is a sizing report.
    pub fn required_len(&self) -> Option<usize> {
        match self {
            AddressError::BufferTooSmall { required } => Some(*required),
            _ => None,
        }
    }
}
