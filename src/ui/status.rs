use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::editor::Selection;

/// Text of the status bar, before padding.
pub fn status_text(model: &Model) -> (String, String) {
    let selection = match model.editor.selection() {
        Some(Selection::Caret(idx)) => format!("caret {}/{}", idx + 1, model.editor.leaf_count()),
        Some(selection @ Selection::Range { .. }) => {
            let leaves = selection.leaves();
            format!("leaves {}-{}", leaves.start() + 1, leaves.end() + 1)
        }
        None => "no selection".to_string(),
    };

    let marks: Vec<&str> = model
        .editor
        .active_marks()
        .iter()
        .map(|mark| mark.name())
        .collect();
    let marks = if marks.is_empty() {
        "-".to_string()
    } else {
        marks.join(" ")
    };
    let pending = if model.editor.pending_marks().is_some() {
        " (next insert)"
    } else {
        ""
    };

    let left = format!(" {selection}  marks: {marks}{pending}");
    let right = format!("{}+B/I/C/U format  ?:help ", model.config.bindings().primary().label());
    (left, right)
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let (left, right) = status_text(model);
    let width = area.width as usize;
    let used = left.width() + right.width();
    let status = if used < width {
        format!("{left}{}{right}", " ".repeat(width - used))
    } else {
        left
    };

    let status_bar = Paragraph::new(status).style(
        Style::default()
            .bg(model.theme.status_bg)
            .fg(model.theme.status_fg),
    );

    frame.render_widget(status_bar, area);
}
