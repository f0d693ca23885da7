//! Core types and traits for the Tally widget kit.
//!
//! This crate provides the pieces every widget and host shares:
//! - The host capability: [`Mount`] and the element [`Tag`]s widgets create
//! - A headless host: [`Document`], an arena DOM addressed by [`NodeId`]
//! - Events routed from the host to widgets: [`Event`]
//! - Elm-style state updates: [`State`] and [`Command`]

mod document;
mod error;
mod event;
mod mount;
mod state;

pub use document::{escape_html, Document, NodeId};
pub use error::MountError;
pub use event::Event;
pub use mount::{Mount, Tag};
pub use state::{Command, State};
