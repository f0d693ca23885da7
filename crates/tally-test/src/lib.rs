//! Testing harness for Tally widgets.
//!
//! Mounts widgets into a headless [`tally_core::Document`], simulates clicks
//! through CSS-like selectors and asserts on what the page shows.
//!
//! ```
//! use tally_test::Harness;
//! use tally_widgets::CounterConfig;
//!
//! let mut harness = Harness::new();
//! harness.mount_counter("main", &CounterConfig::new().with_start(5));
//! harness.click_n("#main button", 2);
//! harness.assert_text("#main span", "7");
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
