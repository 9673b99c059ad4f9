// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(format!("{:?}", value))
    }
}
