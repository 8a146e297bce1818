//! Keyboard input: chords and the formatting key bindings.
//!
//! - [`Chord`]: a parsed `mod+<key>` style hotkey
//! - [`KeyBindings`]: maps a key event to a mark toggle, first match wins

mod bindings;
mod chord;

pub use bindings::{Binding, BindingParseError, DEFAULT_BINDINGS, KeyBindings};
pub use chord::{Chord, ChordParseError, PrimaryModifier};
