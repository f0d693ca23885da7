//! Input events routed from a host to its widgets.

use serde::{Deserialize, Serialize};

/// Host event, addressed to the node it was fired on.
///
/// `N` is the host's node handle ([`crate::NodeId`] for the headless
/// document, a DOM element in the browser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Event<N> {
    /// Primary-button click on `target`.
    Click {
        /// Node the click landed on
        target: N,
    },
}

impl<N> Event<N> {
    /// Create a click event.
    pub const fn click(target: N) -> Self {
        Self::Click { target }
    }

    /// Node the event is addressed to.
    pub const fn target(&self) -> &N {
        match self {
            Self::Click { target } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeId;

    #[test]
    fn test_event_click() {
        let e = Event::click(NodeId(3));
        if let Event::Click { target } = e {
            assert_eq!(target, NodeId(3));
        } else {
            panic!("Expected Click event");
        }
    }

    #[test]
    fn test_event_target() {
        let e = Event::click(NodeId(9));
        assert_eq!(*e.target(), NodeId(9));
    }

    #[test]
    fn test_event_serde() {
        let e = Event::click(NodeId(4));
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"Click":{"target":4}}"#);
    }
}
