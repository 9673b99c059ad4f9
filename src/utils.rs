// src/utils.rs
use gloo::utils::{document, document_element, window};

/// URL of the page the resizer was loaded into.
pub fn current_url() -> String {
    window().location().href().unwrap_or_default()
}

/// Height of the viewport in CSS pixels.
/// Tries `window.innerHeight`, then the root element, then `<body>`.
pub fn viewport_height() -> f64 {
    let inner = window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64());
    let root = Some(f64::from(document_element().client_height()));
    let body = document()
        .body()
        .map(|body| f64::from(body.client_height()));

    first_positive(&[inner, root, body])
}

fn first_positive(candidates: &[Option<f64>]) -> f64 {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|height| *height > 0.0)
        .unwrap_or(0.0)
}
