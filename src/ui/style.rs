//! Theming and color definitions.
//!
//! This module defines the visual styling for rendered blocks and mark
//! wrappers. Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::document::HeadingLevel;
use crate::render::Tag;

/// Theme configuration for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Heading level 1 style
    pub h1: Style,
    /// Heading level 2 style
    pub h2: Style,
    /// Heading level 3 style
    pub h3: Style,
    /// Heading level 4 style
    pub h4: Style,
    /// Paragraph style
    pub paragraph: Style,
    /// Default container style for unknown block types
    pub fallback: Style,
    /// Bold wrapper
    pub strong: Style,
    /// Italic wrapper
    pub emphasis: Style,
    /// Inline code wrapper
    pub inline_code: Style,
    /// Underline wrapper
    pub underline: Style,
    /// Selected leaves
    pub selection: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            paragraph: Style::default(),
            fallback: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            inline_code: Style::default().fg(Color::Red),
            underline: Style::default().add_modifier(Modifier::UNDERLINED),
            selection: Style::default().add_modifier(Modifier::REVERSED),
            status_bg: Color::Indexed(236), // Dark gray that works on both
            status_fg: Color::Indexed(252), // Light gray
        }
    }
}

impl Theme {
    /// Create a theme optimized for dark terminals.
    pub fn dark() -> Self {
        Self::default()
    }

    /// Create a theme optimized for light terminals.
    pub fn light() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Indexed(31)) // Darker cyan
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Indexed(28)) // Darker green
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Indexed(136)) // Darker yellow/olive
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Indexed(25)) // Darker blue
                .add_modifier(Modifier::BOLD),
            paragraph: Style::default(),
            fallback: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            inline_code: Style::default().fg(Color::Indexed(124)), // Darker red
            underline: Style::default().add_modifier(Modifier::UNDERLINED),
            selection: Style::default().add_modifier(Modifier::REVERSED),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Style contributed by a visual tag, patched over the enclosing style.
    pub const fn style_for_tag(&self, tag: Tag) -> Style {
        match tag {
            Tag::Heading(HeadingLevel::H1) => self.h1,
            Tag::Heading(HeadingLevel::H2) => self.h2,
            Tag::Heading(HeadingLevel::H3) => self.h3,
            Tag::Heading(HeadingLevel::H4) => self.h4,
            Tag::Paragraph => self.paragraph,
            Tag::Div => self.fallback,
            Tag::Strong => self.strong,
            Tag::Em => self.emphasis,
            Tag::Code => self.inline_code,
            Tag::Underline => self.underline,
            Tag::Span => Style::new(),
        }
    }
}
