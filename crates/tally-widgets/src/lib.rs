//! Widget implementations for Tally.

pub mod counter;
mod error;
pub mod registry;
pub mod view;

pub use counter::{Counter, CounterConfig, CounterMessage, CounterState, BUTTON_LABEL};
pub use error::WidgetError;
pub use registry::{AnyWidget, WidgetKind};
pub use view::{MountedWidget, PageView, CONTAINER_STYLE};
