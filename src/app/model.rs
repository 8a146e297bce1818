use crate::config::ThemeMode;
use crate::editor::{EditorHandle, MemoryEditor};
use crate::render::{Attributes, EditorConfig, View, render_tree};
use crate::ui::style::Theme;

/// The complete application state.
///
/// All state lives here - no global or scattered state. The document,
/// selection and marks live in the editor handle; the config holds only
/// entry points.
#[derive(Debug, Clone)]
pub struct Model {
    /// Editor handle owning the document and selection
    pub editor: MemoryEditor,
    /// Key handler and render selectors
    pub config: EditorConfig,
    /// Active theme
    pub theme: Theme,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl Model {
    pub fn new(editor: MemoryEditor, config: EditorConfig) -> Self {
        Self {
            editor,
            config,
            theme: Theme::default(),
            help_visible: false,
            should_quit: false,
        }
    }

    /// Use the theme for `mode`.
    #[must_use]
    pub fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme = Theme::for_mode(mode);
        self
    }

    /// Render the editor's blocks through the config.
    ///
    /// Leaves inside the selection carry `data-selected`.
    pub fn rendered_blocks(&self) -> Vec<View> {
        render_tree(&self.config, self.editor.children(), |path| {
            let attributes = Attributes::leaf(path);
            let selected = self
                .editor
                .leaf_index(path)
                .is_some_and(|idx| self.editor.is_selected(idx));
            if selected {
                attributes.with(Attributes::DATA_SELECTED, "true")
            } else {
                attributes
            }
        })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(MemoryEditor::new(Vec::new()), EditorConfig::default())
    }
}
