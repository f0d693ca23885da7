//! Error types for host operations.

use crate::document::NodeId;
use thiserror::Error;

/// Errors a host reports while building or updating a widget's elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// The node handle does not belong to this host.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The append would make a node its own ancestor, or move the root.
    #[error("cannot append {child} into {parent}")]
    Hierarchy {
        /// Node receiving the child.
        parent: NodeId,
        /// Node being appended.
        child: NodeId,
    },

    /// Failure reported by a platform host (for example a DOM exception).
    #[error("host error: {0}")]
    Host(String),
}
