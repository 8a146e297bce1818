use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use marksmith::app::{Message, Model, update};
use marksmith::document::{Mark, sample};
use marksmith::editor::{EditorHandle, MemoryEditor};
use marksmith::input::PrimaryModifier;
use marksmith::render::{EditorConfig, Tag, View};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Message {
    Message::KeyDown(KeyEvent::new(code, modifiers))
}

fn first_leaf(view: &View) -> &View {
    let mut current = view;
    while current.tag() != Some(Tag::Span) {
        current = &current.children()[0];
    }
    current
}

#[test]
fn test_select_all_then_bold_renders_strong_everywhere() {
    let editor = MemoryEditor::new(sample());
    let leaves = editor.leaf_count();
    let mut model = Model::new(editor, EditorConfig::new(PrimaryModifier::Control));

    model = update(model, key(KeyCode::Char('a'), KeyModifiers::NONE));
    let first_bold = model.editor.leaf(0).is_some_and(|leaf| leaf.marks.bold);
    model = update(model, key(KeyCode::Char('b'), KeyModifiers::CONTROL));

    for idx in 0..leaves {
        assert_eq!(
            model.editor.leaf(idx).map(|leaf| leaf.marks.bold),
            Some(!first_bold),
            "leaf {idx}"
        );
    }
    let blocks = model.rendered_blocks();
    assert_eq!(blocks.len(), model.editor.children().len());
    let chain = first_leaf(&blocks[0]).tag_chain();
    assert_eq!(chain.contains(&Tag::Strong), !first_bold);
}

#[test]
fn test_super_primary_ignores_control_chords() {
    let editor = MemoryEditor::new(sample());
    let mut model = Model::new(editor, EditorConfig::new(PrimaryModifier::Super));
    model.editor.select_range(0, 0);
    let before = model.editor.leaf(0).map(|leaf| leaf.marks);

    model = update(model, key(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(model.editor.leaf(0).map(|leaf| leaf.marks), before);

    model = update(model, key(KeyCode::Char('u'), KeyModifiers::SUPER));
    assert_ne!(model.editor.leaf(0).map(|leaf| leaf.marks), before);
    assert_eq!(
        model.editor.is_mark_active(Mark::Underline),
        before.is_some_and(|marks| !marks.underline)
    );
}
