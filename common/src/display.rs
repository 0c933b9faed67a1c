//! ファイル名ラベルの表示状態

use std::path::Path;

use crate::layout::LEFT_FILE_LABEL;

/// 上部2つのファイル名ラベル
///
/// 左は固定文言のまま、右は最後に選択されたファイル名を表示する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    left_label: String,
    right_label: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            left_label: LEFT_FILE_LABEL.to_string(),
            right_label: String::new(),
        }
    }
}

impl DisplayState {
    /// ファイル選択時に呼ぶ。読み込みの成否に関係なく右ラベルを更新する
    pub fn select_file(&mut self, path: &Path) {
        self.right_label = file_name_of(path);
    }

    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    pub fn right_label(&self) -> &str {
        &self.right_label
    }
}

/// パスの最後の要素（ファイル名）
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
