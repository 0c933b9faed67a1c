use cell_analyzer_common::{DisplayState, TableModel};

#[derive(Debug, Clone)]
pub struct AppState {
    pub table: TableModel,
    pub display: DisplayState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: TableModel::skeleton(),
            display: DisplayState::default(),
        }
    }
}

/// ギャラリーのサムネイルがクリックされた
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryClick {
    pub row_index: usize,
    pub image_path: String,
}
