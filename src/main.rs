// src/main.rs
mod config;
mod dom;
mod error;
mod geometry;
mod gesture;
mod page;
mod registry;
mod style;
#[cfg(test)]
mod test_support;
mod tree;
mod utils;

use config::Config;

fn main() {
    let (config, config_error) = match Config::embedded() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        log::warn!("Bundled config rejected, using defaults: {}", e);
    }

    let url = utils::current_url();
    if config.is_excluded(&url) {
        log::info!("Drag to resize disabled on {}", url);
        return;
    }

    match dom::install(&config) {
        Ok(()) => log::debug!("Drag to resize installed"),
        Err(e) => log::error!("Failed to install drag to resize: {}", e),
    }
}
