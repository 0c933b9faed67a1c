use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use cell_analyzer_common::layout::{DIALOG_FILTERS, DIALOG_TITLE};
use cell_analyzer_common::{load_into, TableModel};

/// ファイル選択ダイアログ。キャンセル時は `None`
pub fn pick_document_path() -> Option<PathBuf> {
    let dialog = DIALOG_FILTERS
        .iter()
        .fold(rfd::FileDialog::new().set_title(DIALOG_TITLE), |dialog, (name, extensions)| {
            dialog.add_filter(*name, *extensions)
        });
    dialog.pick_file()
}

pub fn load_table(table: &mut TableModel, path: &Path) -> Result<usize> {
    load_into(table, path).with_context(|| format!("load {}", path.display()))
}
