//! テーブルモデル
//!
//! 画面のテーブル（カテゴリ / 件数 / 割合 / ギャラリー）の行データを保持する。
//! 読み込みのたびに全行を置き換え、前回の行とはマージしない。

use crate::dataset::PREDEFINED_CATEGORIES;
use crate::layout::PERCENTAGE_UNAVAILABLE;
use crate::types::Entry;

/// テーブルの1行
///
/// 件数と割合はセル上で編集できるため文字列で保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub count_text: String,
    pub percentage_text: String,
    pub image_paths: Vec<String>,
}

impl TableRow {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            count_text: entry.count.to_string(),
            percentage_text: String::new(),
            image_paths: entry.image_paths.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    rows: Vec<TableRow>,
}

impl TableModel {
    /// 定義済み8カテゴリの空テーブル
    pub fn skeleton() -> Self {
        let mut table = Self::default();
        table.initialize_skeleton();
        table
    }

    pub fn initialize_skeleton(&mut self) {
        self.rows = PREDEFINED_CATEGORIES
            .iter()
            .map(|name| TableRow {
                name: name.to_string(),
                ..TableRow::default()
            })
            .collect();
    }

    /// ファイルから読み込んだエントリで全行を置き換える（割合は表示しない）
    pub fn load_entries(&mut self, entries: &[Entry]) {
        self.rows = entries.iter().map(TableRow::from_entry).collect();
    }

    /// `load_entries` と同じだが、合計に対する割合も埋める
    pub fn load_default_entries(&mut self, entries: &[Entry]) {
        let total: i64 = entries.iter().map(|e| e.count).sum();
        self.rows = entries
            .iter()
            .map(|entry| TableRow {
                percentage_text: format_percentage(percentage(entry.count, total)),
                ..TableRow::from_entry(entry)
            })
            .collect();
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [TableRow] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `count` が `total` に占める割合 (%)。合計が0以下なら `None`
pub fn percentage(count: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        return None;
    }
    Some(count as f64 * 100.0 / total as f64)
}

/// 小数2桁 + `%`。値がなければ `N/A`
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => PERCENTAGE_UNAVAILABLE.to_string(),
    }
}
