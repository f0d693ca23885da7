//! Browser host for Tally widgets.
//!
//! This module bridges the widget system and the page DOM.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod dom;

// Cross-platform modules
pub mod config;

pub use config::{parse_config, ConfigError};
#[cfg(target_arch = "wasm32")]
pub use dom::{mount_counter, DomMount};
