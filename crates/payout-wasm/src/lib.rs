//! WebAssembly bindings for payout address decoding.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Turning a payout address into its scriptPubKey
//! - Packing the generation transaction output for a job template
//! - Describing an address for display

use wasm_bindgen::prelude::*;

pub mod info;
pub mod payout;

// Re-export main types for JS access
pub use info::AddressInfo;
pub use payout::{address_to_script, describe_address, describe_address_json, pack_output, script_length};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
