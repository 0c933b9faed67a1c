use eframe::egui;

use cell_analyzer_common::layout::{PREVIEW_BOUNDS, PREVIEW_MISSING_TEXT, PREVIEW_TITLE};

use crate::textures::load_scaled_texture;

/// 拡大表示ダイアログ。閉じたら破棄する
pub struct PreviewDialog {
    image_path: String,
    texture: Option<egui::TextureHandle>,
}

impl PreviewDialog {
    pub fn open(ctx: &egui::Context, image_path: &str) -> Self {
        let texture = match load_scaled_texture(ctx, image_path, PREVIEW_BOUNDS) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("preview {image_path}: {err}");
                None
            }
        };
        log::debug!("preview opened: {image_path}");
        Self {
            image_path: image_path.to_string(),
            texture,
        }
    }

    /// 描画する。閉じられたら `false`
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut open = true;
        egui::Window::new(PREVIEW_TITLE)
            .id(egui::Id::new("image_preview"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| match &self.texture {
                Some(texture) => {
                    ui.add(egui::Image::new(texture).fit_to_exact_size(texture.size_vec2()));
                }
                None => {
                    ui.label(PREVIEW_MISSING_TEXT);
                }
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            open = false;
        }
        if !open {
            log::debug!("preview closed: {}", self.image_path);
        }
        open
    }
}
