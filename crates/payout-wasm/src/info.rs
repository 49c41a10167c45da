//! Serializable views of decoded addresses.

use payout_core::DecodedAddress;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Decoded address information for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    /// The address as supplied.
    pub address: String,
    /// "legacy" or "segwit".
    pub encoding: String,
    /// Address type name (P2PKH, P2SH, P2WPKH, ...).
    pub address_type: String,
    /// Network name, if the prefix belongs to a known network.
    pub network: Option<String>,
    /// scriptPubKey as hex.
    pub script_hex: String,
    /// scriptPubKey length in bytes.
    pub script_len: usize,
}

impl AddressInfo {
    /// Build the display view of a decoded address.
    pub fn new(address: &str, decoded: &DecodedAddress) -> Self {
        let encoding = match decoded.encoding {
            payout_core::AddressEncoding::Legacy => "legacy",
            payout_core::AddressEncoding::SegWit => "segwit",
        };
        AddressInfo {
            address: address.to_string(),
            encoding: encoding.to_string(),
            address_type: decoded.address_type.name().to_string(),
            network: decoded.network.map(|n| n.name().to_string()),
            script_hex: hex::encode(decoded.script.as_bytes()),
            script_len: decoded.script.len(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payout_core::decode_address;

    #[test]
    fn test_info_p2wpkh() {
        let address = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        let info = AddressInfo::new(address, &decode_address(address).unwrap());

        assert_eq!(info.encoding, "segwit");
        assert_eq!(info.address_type, "P2WPKH");
        assert_eq!(info.network.as_deref(), Some("mainnet"));
        assert_eq!(info.script_hex, "0014751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(info.script_len, 22);
    }

    #[test]
    fn test_info_json_round_trip() {
        let address = "3P14159f73E4gFr7JterCCQh9QjiTjiZrG";
        let info = AddressInfo::new(address, &decode_address(address).unwrap());

        let json = info.to_json().unwrap();
        assert!(json.contains("\"address_type\":\"P2SH\""));
        assert!(json.contains("\"encoding\":\"legacy\""));
        let parsed: AddressInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_info_unknown_network() {
        let address = "tc1qw508d6qejxtdg4y5r3zarvary0c5xw7kg3g4ty";
        let info = AddressInfo::new(address, &decode_address(address).unwrap());
        assert_eq!(info.network, None);
    }
}
