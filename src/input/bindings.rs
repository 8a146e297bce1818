use std::fmt;
use std::str::FromStr;

use crossterm::event::KeyEvent;

use crate::document::{Mark, MarkParseError};
use crate::editor::{EditorHandle, toggle_mark};

use super::chord::{Chord, ChordParseError, PrimaryModifier};

/// Formatting hotkeys, in the order they are checked.
pub const DEFAULT_BINDINGS: [(Chord, Mark); 4] = [
    (Chord::primary('b'), Mark::Bold),
    (Chord::primary('i'), Mark::Italic),
    (Chord::primary('c'), Mark::Code),
    (Chord::primary('u'), Mark::Underline),
];

/// A user binding written as `CHORD=MARK`, e.g. `mod+k=code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub chord: Chord,
    pub mark: Mark,
}

/// Error returned when a `CHORD=MARK` binding cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingParseError {
    #[error("binding `{0}` must look like CHORD=MARK")]
    MissingSeparator(String),
    #[error(transparent)]
    Chord(#[from] ChordParseError),
    #[error(transparent)]
    Mark(#[from] MarkParseError),
}

impl FromStr for Binding {
    type Err = BindingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last `=` so `mod+==code` binds the `=` key.
        let (chord, mark) = s
            .rsplit_once('=')
            .ok_or_else(|| BindingParseError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            chord: chord.parse()?,
            mark: mark.trim().parse()?,
        })
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.chord, self.mark)
    }
}

/// Keyboard dispatcher for formatting commands.
///
/// Holds no document state; the editor handle is borrowed per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    primary: PrimaryModifier,
    bindings: Vec<(Chord, Mark)>,
}

impl KeyBindings {
    /// The default formatting bindings.
    pub fn new(primary: PrimaryModifier) -> Self {
        Self::with_bindings(primary, DEFAULT_BINDINGS.to_vec())
    }

    /// Custom bindings, checked in the given order.
    pub const fn with_bindings(primary: PrimaryModifier, bindings: Vec<(Chord, Mark)>) -> Self {
        Self { primary, bindings }
    }

    /// The default bindings with `overrides` checked ahead of them.
    pub fn with_overrides(primary: PrimaryModifier, overrides: &[Binding]) -> Self {
        let bindings = overrides
            .iter()
            .map(|binding| (binding.chord, binding.mark))
            .chain(DEFAULT_BINDINGS)
            .collect();
        Self::with_bindings(primary, bindings)
    }

    pub const fn primary(&self) -> PrimaryModifier {
        self.primary
    }

    pub fn bindings(&self) -> &[(Chord, Mark)] {
        &self.bindings
    }

    /// The mark bound to `event`, if any. First match wins.
    pub fn command_for(&self, event: &KeyEvent) -> Option<Mark> {
        self.bindings
            .iter()
            .find(|(chord, _)| chord.matches(event, self.primary))
            .map(|(_, mark)| *mark)
    }

    /// Handle a key press against `editor`.
    ///
    /// Issues at most one mark toggle. Returns `false` when no binding
    /// matched, leaving the event to the host's default handling.
    pub fn on_key_down<E: EditorHandle + ?Sized>(&self, editor: &mut E, event: &KeyEvent) -> bool {
        let Some(mark) = self.command_for(event) else {
            return false;
        };
        tracing::debug!(%mark, code = ?event.code, modifiers = ?event.modifiers, "hotkey");
        toggle_mark(editor, mark);
        true
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(PrimaryModifier::default())
    }
}
