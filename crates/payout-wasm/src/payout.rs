//! Address and output packing entry points for JavaScript.

use wasm_bindgen::prelude::*;
use payout_core::AddressError;
use crate::info::AddressInfo;

fn to_js_error(address: &str, err: AddressError) -> JsValue {
    let message = format!("Invalid address {}: {}", address, err);
    console_log(&message);
    JsValue::from_str(&message)
}

/// Get the scriptPubKey of `address` as hex.
#[wasm_bindgen(js_name = addressToScript)]
pub fn address_to_script(address: &str) -> Result<String, JsValue> {
    payout_core::address_to_script(address.trim())
        .map(|script| script.to_hex())
        .map_err(|e| to_js_error(address, e))
}

/// Get the scriptPubKey length of `address` in bytes.
#[wasm_bindgen(js_name = scriptLength)]
pub fn script_length(address: &str) -> Result<usize, JsValue> {
    payout_core::script_len(address.trim()).map_err(|e| to_js_error(address, e))
}

/// Append the output record paying `amount` satoshis to `address` onto `prefix`.
///
/// # Arguments
/// * `prefix` - Hex already assembled for the generation transaction
/// * `amount` - Output value in satoshis
/// * `address` - Payout address (Base58Check or Bech32)
#[wasm_bindgen(js_name = packOutput)]
pub fn pack_output(prefix: &str, amount: i64, address: &str) -> Result<String, JsValue> {
    let mut output = String::with_capacity(prefix.len() + 2 * payout_core::MAX_OUTPUT_RECORD_LEN);
    output.push_str(prefix);
    payout_core::pack_output(&mut output, amount, address.trim()).map_err(|e| to_js_error(address, e))?;
    Ok(output)
}

/// Decode `address` into a plain JS object.
#[wasm_bindgen(js_name = describeAddress)]
pub fn describe_address(address: &str) -> Result<JsValue, JsValue> {
    describe(address)?.to_js()
}

/// Decode `address` into a JSON string.
#[wasm_bindgen(js_name = describeAddressJson)]
pub fn describe_address_json(address: &str) -> Result<String, JsValue> {
    describe(address)?
        .to_json()
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn describe(address: &str) -> Result<AddressInfo, JsValue> {
    let trimmed = address.trim();
    let decoded = payout_core::decode_address(trimmed).map_err(|e| to_js_error(address, e))?;
    Ok(AddressInfo::new(trimmed, &decoded))
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
