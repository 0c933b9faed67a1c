//! 入力JSONの型定義
//!
//! ```json
//! { "Categorie": [ { "Nom": "Bénin", "Nombre": 13, "Images": ["a.png"] } ] }
//! ```

use serde::{Deserialize, Serialize};

/// 入力ドキュメントでエントリ配列を保持するキー
pub const CATEGORIES_KEY: &str = "Categorie";

/// 1カテゴリ分のエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Nom")]
    pub name: String,

    #[serde(rename = "Nombre")]
    pub count: i64,

    /// サムネイル画像のパス（絶対パス or `~/` 始まり）
    #[serde(rename = "Images")]
    pub image_paths: Vec<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, count: i64, image_paths: &[&str]) -> Self {
        Self {
            name: name.into(),
            count,
            image_paths: image_paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// 入力ドキュメント全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Categorie")]
    pub entries: Vec<Entry>,
}
