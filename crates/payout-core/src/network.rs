//! Bitcoin network definitions and address prefixes.
//!
//! Networks only label a decoded address. Script building accepts any
//! version byte or human-readable part.

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Bitcoin mainnet
    Mainnet,
    /// Bitcoin testnet (testnet3, testnet4 and signet share prefixes)
    Testnet,
    /// Local regression test network
    Regtest,
}

impl Network {
    /// Every known network, in lookup order.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Get the Bech32 human-readable part for this network.
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
            Network::Regtest => "bcrt",
        }
    }

    /// Get the version byte for P2PKH addresses.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6f,
        }
    }

    /// Get the version byte for P2SH addresses.
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xc4,
        }
    }

    /// Whether `version` marks a script-hash address on any network.
    pub fn is_script_hash_version(version: u8) -> bool {
        Network::ALL.iter().any(|n| n.p2sh_version() == version)
    }

    /// Network owning a legacy version byte. Regtest reports as testnet.
    pub fn from_legacy_version(version: u8) -> Option<Self> {
        Network::ALL
            .iter()
            .copied()
            .find(|n| n.p2pkh_version() == version || n.p2sh_version() == version)
    }

    /// Network owning a lowercase Bech32 human-readable part.
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        Network::ALL.iter().copied().find(|n| n.bech32_hrp() == hrp)
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
