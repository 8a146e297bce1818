use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));
    let primary = model.config.bindings().primary();

    let mut lines: Vec<Line> = Vec::new();

    // Formatting
    lines.push(Line::styled("Formatting", section_style));
    for (chord, mark) in model.config.bindings().bindings() {
        lines.push(Line::raw(format!("  {:<20}Toggle {mark}", chord.label(primary))));
    }
    lines.push(Line::raw(""));

    // Selection
    lines.push(Line::styled("Selection", section_style));
    lines.push(Line::raw("  Left/Right          Move caret"));
    lines.push(Line::raw("  Shift+Left/Right    Extend selection"));
    lines.push(Line::raw("  Home/End            First / last leaf"));
    lines.push(Line::raw("  a                   Select all"));
    lines.push(Line::raw("  Esc                 Clear selection"));
    lines.push(Line::raw(""));

    // Other
    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  q / Ctrl-q          Quit"));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes", dim_style));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
