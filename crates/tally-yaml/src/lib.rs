//! YAML page manifests for Tally.
//!
//! A page names the widgets to mount, in order, each with its own property
//! mapping. Properties stay as raw YAML here; the widget registry decides
//! what they mean.

mod error;
mod page;

pub use error::ParseError;
pub use page::{Page, WidgetSpec};

/// Re-exported so widget crates can decode properties without pinning the
/// YAML crate themselves.
pub use serde_yaml_ng::Value;
