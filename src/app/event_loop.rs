use std::io::{self, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use ratatui::{DefaultTerminal, Frame};

use crate::app::{App, Model, update};
use crate::editor::MemoryEditor;
use crate::input::{KeyBindings, PrimaryModifier};
use crate::render::EditorConfig;

/// Ask the terminal to report modifiers unambiguously.
///
/// Without disambiguation Ctrl+I arrives as Tab and Super is never seen.
pub(super) fn push_keyboard_enhancement<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
}

/// Undo [`push_keyboard_enhancement`]. Returns whether the terminal accepted it.
pub(super) fn pop_keyboard_enhancement<W: Write>(out: &mut W) -> bool {
    match execute!(out, PopKeyboardEnhancementFlags) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "failed to pop keyboard enhancement flags");
            false
        }
    }
}

/// Run `restore` before handing back a failed setup step.
pub(super) fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - marksmith requires an interactive terminal")?;

        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            restore_on_error(push_keyboard_enhancement(&mut stdout()), ratatui::restore)
                .context("Failed to enable keyboard enhancement")?;
        }
        let primary = self
            .primary
            .unwrap_or_else(|| PrimaryModifier::for_terminal(enhanced));
        tracing::info!(?primary, enhanced, bindings = self.bindings.len(), "starting editor");

        let editor = MemoryEditor::new(std::mem::take(&mut self.document));
        let config = EditorConfig::new(primary)
            .with_bindings(KeyBindings::with_overrides(primary, &self.bindings));
        let mut model = Model::new(editor, config).with_theme(self.theme);

        let result = Self::event_loop(&mut terminal, &mut model);

        if enhanced {
            pop_keyboard_enhancement(&mut stdout());
        }
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;
        loop {
            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if event::poll(Duration::from_millis(250))? {
                // Coalesce key repeat bursts into a single render.
                loop {
                    if let Some(msg) = Self::handle_event(event::read()?) {
                        tracing::trace!(?msg, "message");
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                    if model.should_quit || !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
