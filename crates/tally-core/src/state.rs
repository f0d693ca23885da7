//! State management for Tally widgets.
//!
//! Widgets follow the Elm Architecture: `State + Message → (State, Command)`.
//! The state decides what changed; the widget turns the returned command into
//! host calls.
//!
//! # Examples
//!
//! ```
//! use tally_core::{Command, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Toggle {
//!     on: bool,
//! }
//!
//! enum ToggleMessage {
//!     Flip,
//! }
//!
//! impl State for Toggle {
//!     type Message = ToggleMessage;
//!
//!     fn update(&mut self, msg: Self::Message) -> Command {
//!         match msg {
//!             ToggleMessage::Flip => self.on = !self.on,
//!         }
//!         Command::Render
//!     }
//! }
//!
//! let mut state = Toggle::default();
//! assert!(state.update(ToggleMessage::Flip).is_render());
//! assert!(state.on);
//! ```

use serde::{Deserialize, Serialize};

/// Widget state trait.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> {
    /// Message type for state updates
    type Message;

    /// Update state in response to a message.
    ///
    /// Returns the follow-up the owning widget must perform.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Follow-up requested by a state update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Nothing visible changed
    #[default]
    None,
    /// Redraw the widget's elements from the new state
    Render,
}

impl Command {
    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if the widget must re-render.
    #[must_use]
    pub const fn is_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Label {
        text: String,
    }

    enum LabelMessage {
        Set(String),
        Keep,
    }

    impl State for Label {
        type Message = LabelMessage;

        fn update(&mut self, msg: Self::Message) -> Command {
            match msg {
                LabelMessage::Set(text) if text != self.text => {
                    self.text = text;
                    Command::Render
                }
                LabelMessage::Set(_) | LabelMessage::Keep => Command::None,
            }
        }
    }

    #[test]
    fn test_command_default_is_none() {
        assert!(Command::default().is_none());
        assert!(!Command::default().is_render());
    }

    #[test]
    fn test_update_returns_render_on_change() {
        let mut label = Label::default();
        assert!(label.update(LabelMessage::Set("a".into())).is_render());
        assert_eq!(label.text, "a");
    }

    #[test]
    fn test_update_returns_none_without_change() {
        let mut label = Label {
            text: "a".to_string(),
        };
        assert!(label.update(LabelMessage::Set("a".into())).is_none());
        assert!(label.update(LabelMessage::Keep).is_none());
    }
}
