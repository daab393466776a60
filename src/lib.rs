pub mod config;
pub mod content;
pub mod donation;
pub mod drag;
pub mod lightbox;
pub mod logging;
pub mod progress;
pub mod reveal;
pub mod route;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
