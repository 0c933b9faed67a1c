//! 分類結果JSONの読み込み

use std::path::Path;

use crate::error::{Error, Result};
use crate::table::TableModel;
use crate::types::{Document, CATEGORIES_KEY};

/// JSON文字列をドキュメントとして解釈する
pub fn parse_document(text: &str) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.get(CATEGORIES_KEY).is_none() {
        return Err(Error::MissingKey(CATEGORIES_KEY.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// ファイルを UTF-8 として読み込み、ドキュメントとして解釈する
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// ファイルを読み込んでテーブルを置き換える。戻り値は読み込んだ行数
///
/// 失敗した場合テーブルは変更しない。
pub fn load_into(table: &mut TableModel, path: &Path) -> Result<usize> {
    let document = load_document(path)?;
    table.load_entries(&document.entries);
    Ok(table.row_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "Categorie": [
                {"Nom": "Bénin", "Nombre": 13, "Images": ["~/a.png", "~/b.png"]},
                {"Nom": "AUS", "Nombre": 7, "Images": []}
            ]
        }"#;
        let doc = parse_document(json).unwrap();
        assert_eq!(
            doc.entries,
            vec![
                Entry::new("Bénin", 13, &["~/a.png", "~/b.png"]),
                Entry::new("AUS", 7, &[]),
            ]
        );
    }

    #[test]
    fn test_parse_document_negative_count() {
        let doc = parse_document(r#"{"Categorie":[{"Nom":"AUS","Nombre":-3,"Images":[]}]}"#).unwrap();
        assert_eq!(doc.entries, vec![Entry::new("AUS", -3, &[])]);
    }

    #[test]
    fn test_parse_document_missing_key() {
        let err = parse_document(r#"{"Categories": []}"#).unwrap_err();
        assert!(matches!(err, Error::MissingKey(ref key) if key == "Categorie"));
    }

    #[test]
    fn test_parse_document_top_level_array() {
        let err = parse_document(r#"[{"Nom": "AUS", "Nombre": 7, "Images": []}]"#).unwrap_err();
        assert!(matches!(err, Error::MissingKey(_)));
    }

    #[test]
    fn test_parse_document_malformed() {
        let err = parse_document(r#"{"Categorie": [ "#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_document_entry_missing_images() {
        let err = parse_document(r#"{"Categorie": [{"Nom": "AUS", "Nombre": 7}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document(Path::new("/nonexistent/cells/12345.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
