//! Cell Analyzer Common Library
//!
//! GUIに依存しない部分（入力JSON、テーブルモデル、画像パス解決）

pub mod dataset;
pub mod display;
pub mod error;
pub mod imaging;
pub mod layout;
pub mod loader;
pub mod table;
pub mod types;

pub use dataset::{default_entries, PREDEFINED_CATEGORIES};
pub use display::DisplayState;
pub use error::{Error, Result};
pub use imaging::resolve_image_path;
pub use layout::Column;
pub use loader::{load_document, load_into, parse_document};
pub use table::{TableModel, TableRow};
pub use types::{Document, Entry};
