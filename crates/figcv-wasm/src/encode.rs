//! Image encoding WASM bindings.
//!
//! - [`imencode`] - re-encode JPEG bytes with the default options
//!   (quality 80, baseline, standard Huffman tables, no restart markers)
//! - [`imwrite`] - write JPEG bytes to a file path
//!
//! # Example
//!
//! ```typescript
//! import { imencode } from '@figcv/wasm';
//!
//! const normalized = imencode(new Uint8Array(await file.arrayBuffer()));
//! ```

use wasm_bindgen::prelude::*;

use crate::ops;

/// Decode and re-encode a JPEG with the default options.
///
/// # Errors
///
/// Throws if `image` cannot be decoded.
#[wasm_bindgen]
pub fn imencode(image: &[u8]) -> Result<Vec<u8>, JsValue> {
    Ok(ops::imencode_bytes(image)?)
}

/// Decode `image` and write it as JPEG to `path`.
///
/// Browsers have no file system, so this throws there; it is meant for
/// WASI and Node-style hosts.
#[wasm_bindgen]
pub fn imwrite(path: &str, image: &[u8]) -> Result<(), JsValue> {
    Ok(ops::imwrite_bytes(path, image)?)
}
