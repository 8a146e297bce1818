//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, default_key_action, update};

use crate::config::ThemeMode;
use crate::document::Node;
use crate::input::{Binding, PrimaryModifier};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    document: Vec<Node>,
    primary: Option<PrimaryModifier>,
    bindings: Vec<Binding>,
    theme: ThemeMode,
}

impl App {
    /// Create a new application editing `document`.
    pub fn new(document: Vec<Node>) -> Self {
        Self {
            document,
            primary: None,
            bindings: Vec::new(),
            theme: ThemeMode::Dark,
        }
    }

    /// Set what `mod` resolves to.
    ///
    /// `None` picks [`PrimaryModifier::for_terminal`] once the terminal's
    /// keyboard support is known.
    pub const fn with_primary_modifier(mut self, primary: Option<PrimaryModifier>) -> Self {
        self.primary = primary;
        self
    }

    /// Extra hotkeys checked before the defaults.
    pub fn with_bindings(mut self, bindings: Vec<Binding>) -> Self {
        self.bindings = bindings;
        self
    }

    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }
}
