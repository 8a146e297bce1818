use super::*;
use crate::app::Model;
use crate::document::{HeadingLevel, Leaf, Mark, Node};
use crate::editor::MemoryEditor;
use crate::input::PrimaryModifier;
use crate::render::{Attributes, EditorConfig, Tag, View};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;

use super::style::Theme;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 20);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    let editor = MemoryEditor::new(vec![
        Node::heading(HeadingLevel::H1).text("Title"),
        Node::paragraph()
            .text("plain ")
            .child(Leaf::new("loud").with(Mark::Bold)),
        Node::new("blockquote").text("quoted"),
    ]);
    Model::new(editor, EditorConfig::new(PrimaryModifier::Control))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn find_cell(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
    let buffer = terminal.backend().buffer();
    for y in 0..buffer.area.height {
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect();
        if let Some(col) = row.find(needle) {
            return Some((u16::try_from(col).unwrap(), y));
        }
    }
    None
}

#[test]
fn test_render_draws_every_block() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Title"));
    assert!(text.contains("plain loud"));
    assert!(text.contains("\u{2502} quoted"), "fallback block gets a marker");
}

#[test]
fn test_bold_leaf_is_drawn_bold() {
    let model = create_test_model();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let (x, y) = find_cell(&terminal, "loud").unwrap();
    let buffer = terminal.backend().buffer();
    assert!(buffer[(x, y)].modifier.contains(Modifier::BOLD));
    let (px, py) = find_cell(&terminal, "plain").unwrap();
    assert!(!buffer[(px, py)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_selected_leaf_is_reversed() {
    let mut model = create_test_model();
    model.editor.select_range(2, 2);
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let (x, y) = find_cell(&terminal, "loud").unwrap();
    let buffer = terminal.backend().buffer();
    assert!(buffer[(x, y)].modifier.contains(Modifier::REVERSED));
    let (px, py) = find_cell(&terminal, "plain").unwrap();
    assert!(!buffer[(px, py)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_status_bar_shows_selection_and_marks() {
    let mut model = create_test_model();
    model.editor.select_caret(2);
    let (left, right) = status_text(&model);
    assert!(left.contains("caret 3/4"), "{left}");
    assert!(left.contains("marks: bold"), "{left}");
    assert!(right.starts_with("Ctrl+B/I/C/U"), "{right}");
}

#[test]
fn test_status_bar_flags_pending_marks() {
    let mut model = create_test_model();
    model.editor.select_caret(1);
    crate::editor::toggle_mark(&mut model.editor, Mark::Italic);
    let (left, _) = status_text(&model);
    assert!(left.contains("marks: italic (next insert)"), "{left}");
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut model = create_test_model();
    model.help_visible = true;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Ctrl+B"));
    assert!(text.contains("Toggle underline"));
}

#[test]
fn test_nested_wrappers_accumulate_styles() {
    let theme = Theme::default();
    let leaf = View::text("x")
        .wrap(Tag::Strong)
        .wrap(Tag::Em)
        .wrap(Tag::Span);
    let block = View::element(Tag::Paragraph, Attributes::new(), vec![leaf]);
    let line = block_line(&theme, &block);
    assert_eq!(line.spans.len(), 1);
    let modifiers = line.spans[0].style.add_modifier;
    assert!(modifiers.contains(Modifier::BOLD | Modifier::ITALIC));
}

#[test]
fn test_document_lines_separate_blocks() {
    let theme = Theme::default();
    let views = vec![
        View::element(Tag::Paragraph, Attributes::new(), vec![View::text("a")]),
        View::element(Tag::Paragraph, Attributes::new(), vec![View::text("b")]),
    ];
    let lines = document_lines(&theme, &views);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].spans.is_empty());
}
