use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Model;

/// All possible events and actions in the application.
///
/// These represent user input and the host's default key actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Raw key press, offered to the formatting hotkeys first
    KeyDown(KeyEvent),

    // Selection
    /// Move the caret one leaf left
    MoveLeft,
    /// Move the caret one leaf right
    MoveRight,
    /// Extend the selection one leaf left
    ExtendLeft,
    /// Extend the selection one leaf right
    ExtendRight,
    /// Caret in the first leaf
    GoToStart,
    /// Caret in the last leaf
    GoToEnd,
    /// Select every leaf
    SelectAll,
    /// Drop the selection
    ClearSelection,

    /// Toggle help overlay
    ToggleHelp,
    /// Repaint without changing state, e.g. after a resize
    Redraw,
    /// Quit the application
    Quit,
}

/// Host default handling for keys the hotkeys did not claim.
pub fn default_key_action(key: &KeyEvent) -> Option<Message> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Left if shift => Some(Message::ExtendLeft),
        KeyCode::Right if shift => Some(Message::ExtendRight),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Home => Some(Message::GoToStart),
        KeyCode::End => Some(Message::GoToEnd),
        KeyCode::Esc => Some(Message::ClearSelection),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('q') if key.modifiers.is_empty() => Some(Message::Quit),
        KeyCode::Char('a') if key.modifiers.is_empty() => Some(Message::SelectAll),
        _ => None,
    }
}

/// Apply a message to the model.
///
/// Key presses go to the formatting hotkeys first; only unclaimed keys
/// reach [`default_key_action`].
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::KeyDown(key) => {
            if model.help_visible {
                model.help_visible = false;
                return model;
            }
            if model.config.on_key_down(&mut model.editor, &key) {
                return model;
            }
            match default_key_action(&key) {
                Some(next) => update(model, next),
                None => model,
            }
        }
        Message::MoveLeft => {
            model.editor.move_left();
            model
        }
        Message::MoveRight => {
            model.editor.move_right();
            model
        }
        Message::ExtendLeft => {
            model.editor.extend_left();
            model
        }
        Message::ExtendRight => {
            model.editor.extend_right();
            model
        }
        Message::GoToStart => {
            model.editor.select_caret(0);
            model
        }
        Message::GoToEnd => {
            model.editor.select_caret(usize::MAX);
            model
        }
        Message::SelectAll => {
            model.editor.select_range(0, usize::MAX);
            model
        }
        Message::ClearSelection => {
            model.editor.deselect();
            model
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
            model
        }
        Message::Redraw => model,
        Message::Quit => {
            tracing::info!("quit requested");
            model.should_quit = true;
            model
        }
    }
}
