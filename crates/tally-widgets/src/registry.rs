//! Widget registry: build widgets from a type name and a property value.

use crate::counter::{Counter, CounterConfig};
use crate::error::WidgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tally_core::{Event, Mount, MountError};
use tally_yaml::Value;

/// Registered widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// [`Counter`]
    Counter,
}

impl WidgetKind {
    /// Every registered kind.
    pub const ALL: [Self; 1] = [Self::Counter];

    /// Name used in manifests.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Counter => "counter",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| WidgetError::UnknownKind(s.to_string()))
    }
}

/// A mounted widget of any registered kind.
#[derive(Debug, Clone)]
pub enum AnyWidget<N> {
    /// Counter widget
    Counter(Counter<N>),
}

impl<N: Clone + PartialEq> AnyWidget<N> {
    /// Decode `props` for `kind` and mount the widget into `target`.
    ///
    /// A null property value means "all defaults".
    pub fn mount<M>(
        kind: WidgetKind,
        props: &Value,
        host: &mut M,
        target: &N,
    ) -> Result<Self, WidgetError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        match kind {
            WidgetKind::Counter => {
                let config: CounterConfig = decode_props(kind, props)?;
                Ok(Self::Counter(Counter::mount(&config, host, target)?))
            }
        }
    }

    /// Kind of the wrapped widget.
    pub const fn kind(&self) -> WidgetKind {
        match self {
            Self::Counter(_) => WidgetKind::Counter,
        }
    }

    /// Route a host event to the wrapped widget.
    pub fn handle<M>(&mut self, host: &mut M, event: &Event<N>) -> Result<bool, MountError>
    where
        M: Mount<Node = N> + ?Sized,
    {
        match self {
            Self::Counter(counter) => counter.handle(host, event),
        }
    }

    /// The wrapped counter, if this is one.
    pub const fn as_counter(&self) -> Option<&Counter<N>> {
        match self {
            Self::Counter(counter) => Some(counter),
        }
    }

    /// Mutable access to the wrapped counter, if this is one.
    pub fn as_counter_mut(&mut self) -> Option<&mut Counter<N>> {
        match self {
            Self::Counter(counter) => Some(counter),
        }
    }
}

fn decode_props<T>(kind: WidgetKind, props: &Value) -> Result<T, WidgetError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if props.is_null() {
        return Ok(T::default());
    }
    serde_yaml_ng::from_value(props.clone()).map_err(|e| WidgetError::InvalidProps {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}
