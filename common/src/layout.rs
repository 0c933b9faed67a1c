//! 画面レイアウト定数
//!
//! ウィンドウサイズ、テーブル列、サムネイル/プレビューの表示枠、
//! ファイルダイアログのフィルタをまとめて定義する。

pub const WINDOW_TITLE: &str = "Analyseur de Cellules";
pub const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

pub const FILE_BUTTON_LABEL: &str = "File";
/// 左側のファイル名ラベル（固定表示）
pub const LEFT_FILE_LABEL: &str = "Nom de fichier";

pub const DIALOG_TITLE: &str = "Ouvrir un fichier";
/// ファイルダイアログのフィルタ（先頭がデフォルト）
pub const DIALOG_FILTERS: &[(&str, &[&str])] = &[
    ("Fichiers JSON", &["json"]),
    ("Tous les fichiers", &["*"]),
];

pub const PREVIEW_TITLE: &str = "Image en gros plan";
pub const PREVIEW_MISSING_TEXT: &str = "Image introuvable";

/// サムネイルの最大サイズ (幅, 高さ)
pub const THUMBNAIL_BOUNDS: (u32, u32) = (50, 50);
/// プレビューの最大サイズ (幅, 高さ)
pub const PREVIEW_BOUNDS: (u32, u32) = (800, 600);

/// 0件合計時の割合表示
pub const PERCENTAGE_UNAVAILABLE: &str = "N/A";

/// テーブルの列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Category,
    Count,
    Percentage,
    Gallery,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Category,
        Column::Count,
        Column::Percentage,
        Column::Gallery,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Category => "Catégorie de cellules",
            Column::Count => "Nombres",
            Column::Percentage => "% de cellule",
            Column::Gallery => "Gallerie Image",
        }
    }

    /// 固定幅 (px)。`None` は残り幅いっぱいに広げる列
    pub fn width(self) -> Option<f32> {
        match self {
            Column::Category => Some(200.0),
            Column::Count | Column::Percentage => Some(100.0),
            Column::Gallery => None,
        }
    }

    /// 伸縮列に割り当てる幅。固定列と列間の余白を除いた残り（最低でもサムネイル幅）
    pub fn stretch_width(available: f32, spacing: f32) -> f32 {
        let fixed: f32 = Column::ALL.iter().filter_map(|c| c.width()).sum();
        let gaps = spacing * (Column::ALL.len() - 1) as f32;
        (available - fixed - gaps).max(THUMBNAIL_BOUNDS.0 as f32)
    }

    /// カテゴリ名は読み取り専用
    pub fn is_editable(self) -> bool {
        matches!(self, Column::Count | Column::Percentage)
    }
}
