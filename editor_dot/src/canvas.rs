use std::path::PathBuf;

use eframe::egui::{self, Color32, ColorImage, Pos2, Rect, Stroke, TextureHandle, Vec2};
use lib_dot::{CellRedraw, FileFilter, Host, Mapper, PixelGrid, Rgba};
use log::{debug, warn};

use crate::filemanager;

const GRID_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::WHITE,
};

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3])
}

fn to_color_image(grid: &PixelGrid) -> ColorImage {
    let (width, height) = grid.dimensions();
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], &grid.to_rgba_bytes())
}

/// The egui side of the editor: keeps one texture in sync with the image
/// buffer and forwards dialogs, titles and errors to the platform.
pub struct Canvas {
    ctx: egui::Context,
    texture: Option<TextureHandle>,
}

impl Canvas {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, texture: None }
    }

    /// Paints the grid texture and the cell outlines. `origin` is the screen
    /// position the mapper's (0, 0) corresponds to.
    pub fn draw(&self, painter: &egui::Painter, origin: Pos2, mapper: &Mapper, grid: &PixelGrid) {
        let Some(texture) = &self.texture else {
            return;
        };

        let (extent_w, extent_h) = mapper.grid_extent();
        let top_left = origin + Vec2::new(0.0, mapper.header_height());
        let grid_rect = Rect::from_min_size(top_left, Vec2::new(extent_w, extent_h));

        painter.image(
            texture.id(),
            grid_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        let cell = mapper.cell_size();
        for col in 0..=grid.width() {
            let x = top_left.x + col as f32 * cell;
            painter.line_segment(
                [Pos2::new(x, grid_rect.min.y), Pos2::new(x, grid_rect.max.y)],
                GRID_STROKE,
            );
        }
        for row in 0..=grid.height() {
            let y = top_left.y + row as f32 * cell;
            painter.line_segment(
                [Pos2::new(grid_rect.min.x, y), Pos2::new(grid_rect.max.x, y)],
                GRID_STROKE,
            );
        }
    }
}

impl Host for Canvas {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        filemanager::pick_open_path(filters)
            .inspect_err(|e| debug!("{}", e))
            .ok()
    }

    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        filemanager::pick_save_path(filters)
            .inspect_err(|e| debug!("{}", e))
            .ok()
    }

    fn redraw_cells(&mut self, cells: &[CellRedraw]) {
        let Some(texture) = &mut self.texture else {
            return;
        };

        for cell in cells {
            texture.set_partial(
                [cell.col, cell.row],
                ColorImage::new([1, 1], to_color32(cell.color)),
                egui::TextureOptions::NEAREST,
            );
        }
        self.ctx.request_repaint();
    }

    fn redraw_all(&mut self, grid: &PixelGrid) {
        let image = to_color_image(grid);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "pixel_grid",
                    image,
                    egui::TextureOptions::NEAREST,
                ))
            }
        }
        self.ctx.request_repaint();
    }

    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
    }

    fn notify_error(&mut self, message: &str) {
        if let Err(e) = filemanager::show_error(message) {
            warn!("{}", e);
        }
    }
}
