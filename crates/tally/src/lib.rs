//! Tally: a counter widget that mounts into any host.
//!
//! Native code mounts into the headless [`Document`]; WASM builds mount into
//! the page's DOM.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { mount_counter } from './tally.js';
//!
//! await init();
//! mount_counter({ start: 5 }, document.getElementById('app'));
//! ```

pub use tally_core::*;
pub use tally_widgets as widgets;
pub use tally_widgets::{Counter, CounterConfig};
pub use tally_yaml as yaml;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{mount_counter, DomMount};

pub use browser::{parse_config, ConfigError};
