use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::app::Model;
use crate::render::{Attributes, Tag, View};

use super::style::Theme;
use super::{DOCUMENT_LEFT_PADDING, overlays, status};

/// Marker drawn before blocks rendered by the default container.
const FALLBACK_PREFIX: &str = "\u{2502} ";

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let [doc_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let views = model.rendered_blocks();
    let document = Paragraph::new(document_lines(&model.theme, &views))
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::new(DOCUMENT_LEFT_PADDING, 1, 1, 0)));
    frame.render_widget(document, doc_area);

    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

/// Project rendered blocks to terminal lines, one blank line between blocks.
pub fn document_lines(theme: &Theme, views: &[View]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(views.len() * 2);
    for (idx, view) in views.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(block_line(theme, view));
    }
    lines
}

/// Flatten one top-level block view into a styled line.
pub fn block_line(theme: &Theme, view: &View) -> Line<'static> {
    let mut spans = Vec::new();
    if view.tag() == Some(Tag::Div) {
        spans.push(Span::styled(FALLBACK_PREFIX, theme.fallback));
    }
    collect_spans(theme, view, Style::default(), &mut spans);
    Line::from(spans)
}

fn collect_spans(theme: &Theme, view: &View, style: Style, out: &mut Vec<Span<'static>>) {
    match view {
        View::Text(text) => {
            if !text.is_empty() {
                out.push(Span::styled(text.clone(), style));
            }
        }
        View::Element {
            tag,
            attributes,
            children,
        } => {
            let mut style = style.patch(theme.style_for_tag(*tag));
            if attributes.contains(Attributes::DATA_SELECTED) {
                style = style.patch(theme.selection);
            }
            for child in children {
                collect_spans(theme, child, style, out);
            }
        }
    }
}
