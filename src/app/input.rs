use crossterm::event::{Event, KeyEventKind};

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_event(event: Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Message::KeyDown(key)),
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "resize");
                Some(Message::Redraw)
            }
            _ => None,
        }
    }
}
