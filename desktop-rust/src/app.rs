use eframe::egui::{self, RichText};

use cell_analyzer_common::layout::{Column, FILE_BUTTON_LABEL, THUMBNAIL_BOUNDS};
use cell_analyzer_common::{default_entries, TableModel};

use crate::io::{load_table, pick_document_path};
use crate::model::{AppState, GalleryClick};
use crate::preview::PreviewDialog;
use crate::textures::ThumbnailCache;

const CELL_HEIGHT: f32 = 20.0;

#[derive(Default)]
pub struct CellAnalyzerApp {
    state: AppState,
    thumbs: ThumbnailCache,
    preview: Option<PreviewDialog>,
}

impl CellAnalyzerApp {
    /// 起動直後の状態（スケルトンをデモデータで置き換えたもの）
    pub fn with_default_data() -> Self {
        let mut app = Self::default();
        app.load_default_data();
        app
    }

    fn load_default_data(&mut self) {
        self.state.table.load_default_entries(&default_entries());
        self.thumbs.clear();
    }

    fn open_file(&mut self) {
        let Some(path) = pick_document_path() else {
            return;
        };
        self.state.display.select_file(&path);

        match load_table(&mut self.state.table, &path) {
            Ok(rows) => {
                log::info!("loaded {} ({rows} rows)", path.display());
                self.thumbs.clear();
            }
            Err(err) => log::error!("Erreur : {err:#}"),
        }
    }

    fn handle_gallery_click(&mut self, ctx: &egui::Context, click: GalleryClick) {
        log::debug!("thumbnail clicked: row {} {}", click.row_index, click.image_path);
        self.preview = Some(PreviewDialog::open(ctx, &click.image_path));
    }

    /// プレビュー表示中はメイン画面を操作不可にする
    fn is_interactive(&self) -> bool {
        self.preview.is_none()
    }

    fn show_preview(&mut self, ctx: &egui::Context) {
        let still_open = self.preview.as_ref().is_some_and(|preview| preview.show(ctx));
        if !still_open {
            self.preview = None;
        }
    }

    fn ui(&mut self, ctx: &egui::Context) {
        let interactive = self.is_interactive();
        let mut open_requested = false;
        let mut clicked = None;

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                if ui.button(FILE_BUTTON_LABEL).clicked() {
                    open_requested = true;
                }
                ui.columns(2, |columns| {
                    columns[0].vertical_centered(|ui| {
                        ui.label(self.state.display.left_label());
                    });
                    columns[1].vertical_centered(|ui| {
                        ui.label(self.state.display.right_label());
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                clicked = render_table(ui, ctx, &mut self.state.table, &mut self.thumbs);
            });
        });

        if open_requested {
            self.open_file();
        }
        if let Some(click) = clicked {
            self.handle_gallery_click(ctx, click);
        }
        self.show_preview(ctx);
    }
}

impl eframe::App for CellAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn render_table(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    table: &mut TableModel,
    thumbs: &mut ThumbnailCache,
) -> Option<GalleryClick> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let gallery_width = Column::stretch_width(ui.available_width(), ui.spacing().item_spacing.x);
            let column_width = |column: Column| column.width().unwrap_or(gallery_width);
            egui::Grid::new("cell_table")
                .striped(true)
                .num_columns(Column::ALL.len())
                .show(ui, |ui| {
                    for column in Column::ALL {
                        let header = egui::Label::new(RichText::new(column.header()).strong());
                        ui.add_sized([column_width(column), CELL_HEIGHT], header);
                    }
                    ui.end_row();

                    for (row_index, row) in table.rows_mut().iter_mut().enumerate() {
                        ui.add_sized(
                            [column_width(Column::Category), CELL_HEIGHT],
                            egui::Label::new(row.name.as_str()),
                        );
                        ui.add_sized(
                            [column_width(Column::Count), CELL_HEIGHT],
                            egui::TextEdit::singleline(&mut row.count_text),
                        );
                        ui.add_sized(
                            [column_width(Column::Percentage), CELL_HEIGHT],
                            egui::TextEdit::singleline(&mut row.percentage_text),
                        );
                        ui.vertical(|ui| {
                            ui.set_min_width(gallery_width);
                            for path in &row.image_paths {
                                if let Some(click) = render_thumbnail(ui, ctx, thumbs, row_index, path) {
                                    clicked = Some(click);
                                }
                            }
                        });
                        ui.end_row();
                    }
                });
        });

    clicked
}

fn render_thumbnail(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    thumbs: &mut ThumbnailCache,
    row_index: usize,
    path: &str,
) -> Option<GalleryClick> {
    let response = match thumbs.get_or_load(ctx, path) {
        Some(texture) => ui.add(
            egui::Image::new(&texture)
                .fit_to_exact_size(texture.size_vec2())
                .sense(egui::Sense::click()),
        ),
        None => {
            let size = egui::vec2(THUMBNAIL_BOUNDS.0 as f32, THUMBNAIL_BOUNDS.1 as f32);
            ui.allocate_exact_size(size, egui::Sense::click()).1
        }
    };

    response.on_hover_text(path).clicked().then(|| GalleryClick {
        row_index,
        image_path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_input() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    fn click(row_index: usize, image_path: &str) -> GalleryClick {
        GalleryClick {
            row_index,
            image_path: image_path.to_string(),
        }
    }

    #[test]
    fn test_startup_shows_default_data() {
        let app = CellAnalyzerApp::with_default_data();
        let rows = app.state.table.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, "Bénin");
        assert_eq!(rows[0].percentage_text, "37.14%");
        assert_eq!(app.state.display.right_label(), "");
        assert!(app.preview.is_none());
    }

    #[test]
    fn test_gallery_click_opens_single_preview() {
        let ctx = egui::Context::default();
        let mut app = CellAnalyzerApp::with_default_data();
        let before = app.state.table.clone();

        app.handle_gallery_click(&ctx, click(1, "/nonexistent/cells/a.png"));
        app.handle_gallery_click(&ctx, click(2, "/nonexistent/cells/b.png"));

        assert!(app.preview.is_some());
        assert!(!app.is_interactive());
        assert_eq!(app.state.table, before);
    }

    #[test]
    fn test_preview_stays_open_without_input() {
        let ctx = egui::Context::default();
        let mut app = CellAnalyzerApp::with_default_data();
        app.handle_gallery_click(&ctx, click(0, "/nonexistent/cells/a.png"));

        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));

        assert!(app.preview.is_some());
        assert!(!app.is_interactive());
    }

    #[test]
    fn test_preview_show_returns_false_on_escape() {
        let ctx = egui::Context::default();
        let preview = PreviewDialog::open(&ctx, "/nonexistent/cells/a.png");

        let mut still_open = true;
        let _ = ctx.run(escape_input(), |ctx| still_open = preview.show(ctx));

        assert!(!still_open);
    }

    #[test]
    fn test_escape_closes_preview_and_keeps_table() {
        let ctx = egui::Context::default();
        let mut app = CellAnalyzerApp::with_default_data();
        let before = app.state.table.clone();
        app.handle_gallery_click(&ctx, click(3, "/nonexistent/cells/d.png"));

        let _ = ctx.run(escape_input(), |ctx| app.ui(ctx));

        assert!(app.preview.is_none());
        assert!(app.is_interactive());
        assert_eq!(app.state.table, before);
    }
}
