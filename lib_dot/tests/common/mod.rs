#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use lib_dot::{CellRedraw, DotError, FileFilter, Host, PixelGrid, Rgb, Rgba};

pub const WHITE: Rgba = [255, 255, 255, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Builds a grid from rows of colors, without the 16..=64 size gate.
pub fn grid_from_rows(rows: &[&[Rgba]]) -> PixelGrid {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut grid = PixelGrid::filled(width, height, WHITE);
    for (r, row) in rows.iter().enumerate() {
        for (c, color) in row.iter().enumerate() {
            grid.set(r, c, *color);
        }
    }
    grid
}

/// Alternating black/white cells starting with white at (0, 0).
pub fn checkerboard(width: u32, height: u32) -> PixelGrid {
    let mut grid = PixelGrid::filled(width, height, WHITE);
    for r in 0..height as usize {
        for c in 0..width as usize {
            if (r + c) % 2 == 1 {
                grid.set(r, c, BLACK);
            }
        }
    }
    grid
}

pub fn solid_image(width: u32, height: u32, color: Rgba) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(color))
}

/// Unique path under the system temp dir; the file is not created.
pub fn write_failure(path: &str) -> DotError {
    DotError::Write {
        path: PathBuf::from(path),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
    }
}

pub fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lib_dot_tests_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

/// Host that answers dialogs from queues and records every call instead of
/// touching the filesystem.
#[derive(Default)]
pub struct RecordingHost {
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    pub images: Vec<(PathBuf, RgbaImage)>,
    pub written: Vec<(PathBuf, PixelGrid)>,
    /// Returned by the next `write_image` call instead of recording a write.
    pub write_error: Option<DotError>,
    pub redrawn_cells: Vec<CellRedraw>,
    pub full_redraws: usize,
    pub titles: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingHost {
    pub fn with_image(mut self, path: &str, image: RgbaImage) -> Self {
        self.images.push((PathBuf::from(path), image));
        self
    }
}

impl Host for RecordingHost {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.open_answers.pop_front().flatten()
    }

    fn pick_save_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.save_answers.pop_front().flatten()
    }

    fn read_image(&mut self, path: &Path) -> Result<RgbaImage, DotError> {
        self.images
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, image)| image.clone())
            .ok_or_else(|| DotError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such fixture"),
            })
    }

    fn write_image(&mut self, path: &Path, grid: &PixelGrid) -> Result<(), DotError> {
        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        self.written.push((path.to_path_buf(), grid.clone()));
        Ok(())
    }

    fn redraw_cells(&mut self, cells: &[CellRedraw]) {
        self.redrawn_cells.extend_from_slice(cells);
    }

    fn redraw_all(&mut self, _grid: &PixelGrid) {
        self.full_redraws += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
