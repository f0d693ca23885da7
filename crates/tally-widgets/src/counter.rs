//! Counter widget: a "Click me" button followed by a number.
//!
//! Each click on the button adds one to the number and redraws it before the
//! handler returns, so the display never lags the state.
//!
//! # Examples
//!
//! ```
//! use tally_core::Document;
//! use tally_widgets::{Counter, CounterConfig};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let mut counter = Counter::mount(&CounterConfig::new().with_start(5), &mut doc, &root).unwrap();
//!
//! counter.click(&mut doc).unwrap();
//! assert_eq!(doc.text(*counter.display()).unwrap(), "6");
//! ```

use serde::{Deserialize, Serialize};
use tally_core::{Command, Event, Mount, MountError, State, Tag};
use tracing::debug;

/// Label of the counter's button.
pub const BUTTON_LABEL: &str = "Click me";

/// Counter configuration. Absent fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial value (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Step size (default 1). Accepted and kept, but clicks always add 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
}

impl CounterConfig {
    /// Default start value.
    pub const DEFAULT_START: i64 = 0;
    /// Default step value.
    pub const DEFAULT_STEP: i64 = 1;

    /// Configuration with every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            step: None,
        }
    }

    /// Set the start value.
    #[must_use]
    pub const fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the step value.
    #[must_use]
    pub const fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Effective start value.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start.unwrap_or(Self::DEFAULT_START)
    }

    /// Effective step value.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step.unwrap_or(Self::DEFAULT_STEP)
    }
}

/// In-memory counter value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current value
    pub value: i64,
}

/// Messages for the counter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMessage {
    /// The button was clicked
    Clicked,
}

impl CounterState {
    /// State holding `value`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }
}

impl State for CounterState {
    type Message = CounterMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            // Fixed increment; the configured step is not applied.
            CounterMessage::Clicked if self.value == i64::MAX => Command::None,
            CounterMessage::Clicked => {
                self.value += 1;
                Command::Render
            }
        }
    }
}

/// A mounted counter. Owns its state and the handles of its two elements.
#[derive(Debug, Clone)]
pub struct Counter<N> {
    config: CounterConfig,
    state: CounterState,
    button: N,
    display: N,
}

impl<N: Clone + PartialEq> Counter<N> {
    /// Build the button and display inside `target` and show the start value.
    pub fn mount<M>(config: &CounterConfig, host: &mut M, target: &N) -> Result<Self, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        let button = host.create_element(Tag::Button)?;
        host.set_text(&button, BUTTON_LABEL)?;
        host.append_child(target, &button)?;

        let display = host.create_element(Tag::Span)?;
        host.append_child(target, &display)?;

        let counter = Self {
            config: *config,
            state: CounterState::new(config.start()),
            button,
            display,
        };
        counter.render(host)?;
        debug!(
            start = config.start(),
            step = config.step(),
            "counter mounted"
        );
        Ok(counter)
    }

    /// Apply one click and redraw. Returns the new value.
    pub fn click<M>(&mut self, host: &mut M) -> Result<i64, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        if self.state.update(CounterMessage::Clicked).is_render() {
            self.render(host)?;
        }
        debug!(value = self.state.value, "counter clicked");
        Ok(self.state.value)
    }

    /// Route a host event. Returns `true` if the event was a click on this
    /// counter's button.
    pub fn handle<M>(&mut self, host: &mut M, event: &Event<N>) -> Result<bool, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        match event {
            Event::Click { target } if *target == self.button => {
                self.click(host)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render<M>(&self, host: &mut M) -> Result<(), MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        host.set_text(&self.display, &self.state.value.to_string())
    }

    /// Current value.
    pub const fn value(&self) -> i64 {
        self.state.value
    }

    /// Current state.
    pub const fn state(&self) -> &CounterState {
        &self.state
    }

    /// Configured start value.
    pub fn start(&self) -> i64 {
        self.config.start()
    }

    /// Configured step value.
    pub fn step(&self) -> i64 {
        self.config.step()
    }

    /// The clickable control.
    pub const fn button(&self) -> &N {
        &self.button
    }

    /// The text display.
    pub const fn display(&self) -> &N {
        &self.display
    }
}
