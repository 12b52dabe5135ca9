use h5bridge::BridgeError;
use js_sys::wasm_bindgen::JsValue;
use serde::{Serialize, de::DeserializeOwned};

/// Error type for serialization/deserialization operations
#[derive(Debug)]
pub enum Error {
    SerdeWasmBindgen(serde_wasm_bindgen::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SerdeWasmBindgen(e) => write!(f, "Serde WASM Bindgen Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Error::SerdeWasmBindgen(e)
    }
}

impl From<Error> for BridgeError {
    fn from(e: Error) -> Self {
        BridgeError::new(e.to_string())
    }
}

/// Serialize a Rust data structure into a JsValue
pub fn to_value<T: Serialize>(value: &T) -> Result<JsValue, Error> {
    // Plain objects instead of Maps, numbers instead of BigInts: the native side reads them as JSON
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(Error::from)
}

/// Deserialize a JsValue into a Rust data structure
pub fn from_value<T: DeserializeOwned>(value: JsValue) -> Result<T, Error> {
    serde_wasm_bindgen::from_value(value).map_err(Error::from)
}
