use std::collections::HashMap;

use eframe::egui;
use image::imageops::FilterType;
use image::ImageReader;

use cell_analyzer_common::layout::THUMBNAIL_BOUNDS;
use cell_analyzer_common::resolve_image_path;

/// 画像を読み込み、縦横比を保って `bounds` に収めたテクスチャを作る
///
/// 枠より小さい画像は拡大する。
pub fn load_scaled_texture(
    ctx: &egui::Context,
    raw_path: &str,
    bounds: (u32, u32),
) -> Result<egui::TextureHandle, image::ImageError> {
    let path = resolve_image_path(raw_path);
    let image = ImageReader::open(&path)?.decode()?;
    let scaled = image.resize(bounds.0, bounds.1, FilterType::Triangle).to_rgba8();
    let size = [scaled.width() as usize, scaled.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, scaled.as_raw());
    Ok(ctx.load_texture(raw_path, color_image, egui::TextureOptions::default()))
}

/// サムネイルのテクスチャキャッシュ（パスごと）
///
/// 読み込みに失敗したパスも `None` として覚えておき、毎フレーム再試行しない。
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn get_or_load(&mut self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(path) {
            return cached.clone();
        }
        let loaded = match load_scaled_texture(ctx, path, THUMBNAIL_BOUNDS) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("thumbnail {path}: {err}");
                None
            }
        };
        self.textures.insert(path.to_string(), loaded.clone());
        loaded
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}
