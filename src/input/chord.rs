use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Modifier that `mod` resolves to.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryModifier {
    #[value(name = "ctrl")]
    Control,
    #[value(name = "super")]
    Super,
}

impl PrimaryModifier {
    /// Command key on macOS, Control everywhere else.
    pub const fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Super
        } else {
            Self::Control
        }
    }

    /// Default for a terminal with or without keyboard enhancement.
    ///
    /// Super is only reported under the kitty keyboard protocol, so a
    /// terminal without it falls back to Control.
    pub const fn for_terminal(enhanced: bool) -> Self {
        if enhanced {
            Self::platform_default()
        } else {
            Self::Control
        }
    }

    pub const fn key_modifiers(self) -> KeyModifiers {
        match self {
            Self::Control => KeyModifiers::CONTROL,
            Self::Super => KeyModifiers::SUPER,
        }
    }

    /// Short label for status and help text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Control => "Ctrl",
            Self::Super => "Super",
        }
    }

    /// Value accepted by `--modifier`.
    pub const fn flag_value(self) -> &'static str {
        match self {
            Self::Control => "ctrl",
            Self::Super => "super",
        }
    }
}

impl Default for PrimaryModifier {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Modifiers that take part in chord comparison.
const CHORD_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT)
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::META)
    .union(KeyModifiers::HYPER);

/// A modifier + key combination such as `mod+b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    /// Whether the chord includes the primary modifier (`mod`)
    primary: bool,
    /// Explicit modifiers besides `mod`
    modifiers: KeyModifiers,
    /// Lowercase key character
    key: char,
}

impl Chord {
    /// `mod+<key>`.
    pub const fn primary(key: char) -> Self {
        Self {
            primary: true,
            modifiers: KeyModifiers::NONE,
            key: key.to_ascii_lowercase(),
        }
    }

    pub const fn key(&self) -> char {
        self.key
    }

    /// Full modifier set once `mod` is resolved.
    pub const fn resolved_modifiers(&self, primary: PrimaryModifier) -> KeyModifiers {
        if self.primary {
            self.modifiers.union(primary.key_modifiers())
        } else {
            self.modifiers
        }
    }

    /// Exact match against a key event.
    ///
    /// The key compares case-insensitively and the event's modifier set
    /// must equal the chord's, so `ctrl+shift+b` does not match `mod+b`.
    /// Release events never match.
    pub fn matches(&self, event: &KeyEvent, primary: PrimaryModifier) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }
        let KeyCode::Char(c) = event.code else {
            return false;
        };
        if !c.to_lowercase().eq(self.key.to_lowercase()) {
            return false;
        }
        event.modifiers.intersection(CHORD_MODIFIERS) == self.resolved_modifiers(primary)
    }

    /// Human-readable label, e.g. `Ctrl+B`.
    pub fn label(&self, primary: PrimaryModifier) -> String {
        let mut parts: Vec<String> = Vec::new();
        let modifiers = self.resolved_modifiers(primary);
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl"),
            (KeyModifiers::SUPER, "Super"),
            (KeyModifiers::META, "Meta"),
            (KeyModifiers::HYPER, "Hyper"),
            (KeyModifiers::ALT, "Alt"),
            (KeyModifiers::SHIFT, "Shift"),
        ] {
            if modifiers.contains(flag) {
                parts.push(name.to_string());
            }
        }
        parts.push(self.key.to_uppercase().collect());
        parts.join("+")
    }
}

/// Error returned when a hotkey string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("empty hotkey")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("hotkey `{0}` has no key")]
    MissingKey(String),
    #[error("key `{0}` must be a single character")]
    InvalidKey(String),
}

impl FromStr for Chord {
    type Err = ChordParseError;

    /// Parse `is-hotkey` style strings: `mod+b`, `ctrl+shift+x`, `alt+u`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ChordParseError::Empty);
        }
        let mut parts: Vec<&str> = trimmed.split('+').map(str::trim).collect();
        let key_part = parts.pop().unwrap_or_default();
        if key_part.is_empty() {
            return Err(ChordParseError::MissingKey(trimmed.to_string()));
        }

        let mut primary = false;
        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "mod" => primary = true,
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "super" | "cmd" | "command" | "meta" => modifiers |= KeyModifiers::SUPER,
                _ => return Err(ChordParseError::UnknownModifier(part.to_string())),
            }
        }

        let mut chars = key_part.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return Err(ChordParseError::InvalidKey(key_part.to_string()));
        };

        Ok(Self {
            primary,
            modifiers,
            key: key.to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primary {
            f.write_str("mod+")?;
        }
        for (flag, name) in [
            (KeyModifiers::CONTROL, "ctrl"),
            (KeyModifiers::ALT, "alt"),
            (KeyModifiers::SHIFT, "shift"),
            (KeyModifiers::SUPER, "super"),
        ] {
            if self.modifiers.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
