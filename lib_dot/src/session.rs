//! The editor's event handling, independent of any GUI toolkit.
//!
//! A [`Session`] consumes input events and talks back to the toolkit through
//! the [`Host`] trait: file dialogs, image files, redraws, window title and
//! error messages.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, error, info, warn};

use crate::color::{Rgb, Rgba};
use crate::constants::{
    FILE_TYPES, HEADER_HEIGHT, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, TITLE, VERSION,
};
use crate::engine::{PaintEngine, Tool};
use crate::error::DotError;
use crate::grid::{CellChange, PixelGrid};
use crate::io;
use crate::mapping::{CellRect, Mapper};

/// Dialog filters as (name, extensions without the dot).
pub type FileFilter = (&'static str, &'static [&'static str]);

/// One cell to repaint, with where it sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRedraw {
    pub row: usize,
    pub col: usize,
    pub color: Rgba,
    pub rect: CellRect,
}

/// What the session needs from the windowing toolkit.
pub trait Host {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    fn read_image(&mut self, path: &Path) -> Result<RgbaImage, DotError> {
        io::read_image(path)
    }

    fn write_image(&mut self, path: &Path, grid: &PixelGrid) -> Result<(), DotError> {
        io::write_image(path, grid)
    }

    fn redraw_cells(&mut self, cells: &[CellRedraw]);

    fn redraw_all(&mut self, grid: &PixelGrid);

    fn set_title(&mut self, title: &str);

    /// Blocking, user-facing error message.
    fn notify_error(&mut self, message: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub header_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            window_width: INITIAL_WINDOW_WIDTH,
            window_height: INITIAL_WINDOW_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub window_width: f32,
    pub window_height: f32,
    pub header_height: f32,
    pub dragging: bool,
}

pub struct Session {
    engine: PaintEngine,
    view: ViewState,
    path: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_engine(config, PaintEngine::new())
    }

    pub fn with_engine(config: EditorConfig, engine: PaintEngine) -> Self {
        Self {
            engine,
            view: ViewState {
                window_width: config.window_width,
                window_height: config.window_height,
                header_height: config.header_height,
                dragging: false,
            },
            path: None,
        }
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn grid(&self) -> &PixelGrid {
        self.engine.grid()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Built from the current window and grid size on every call.
    pub fn mapper(&self) -> Mapper {
        let (width, height) = self.engine.grid().dimensions();
        Mapper::new(
            self.view.window_width,
            self.view.window_height,
            self.view.header_height,
            height,
            width,
        )
    }

    pub fn title(&self) -> String {
        let app_name = format!("{} ver.{}", TITLE, VERSION);
        match self.path.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {}", name.to_string_lossy(), app_name),
            None => app_name,
        }
    }

    /// Pushes the initial title and a full redraw to a freshly created host.
    pub fn attach(&self, host: &mut impl Host) {
        host.set_title(&self.title());
        host.redraw_all(self.engine.grid());
    }

    pub fn resize(&mut self, width: f32, height: f32, host: &mut impl Host) {
        if (width, height) == (self.view.window_width, self.view.window_height) {
            return;
        }

        debug!("Window resized to {}x{}", width, height);
        self.view.window_width = width;
        self.view.window_height = height;
        host.redraw_all(self.engine.grid());
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, host: &mut impl Host) {
        self.view.dragging = true;
        let (row, col) = self.mapper().point_to_indices(x, y);
        let changes = self.engine.apply_at(row, col);
        self.redraw(&changes, host);
    }

    /// Only the pen paints while dragging; a fill happens once per press.
    pub fn pointer_move(&mut self, x: f32, y: f32, host: &mut impl Host) {
        if !self.view.dragging || self.engine.tool() != Tool::Pen {
            return;
        }

        let (row, col) = self.mapper().point_to_indices(x, y);
        let changes = self.engine.apply_at(row, col);
        self.redraw(&changes, host);
    }

    pub fn pointer_up(&mut self, _x: f32, _y: f32) {
        self.view.dragging = false;
    }

    pub fn tool_selected(&mut self, name: &str) {
        match name.parse::<Tool>() {
            Ok(tool) => self.engine.set_mode(tool),
            Err(e) => warn!("Ignoring unknown tool '{}'", e.0),
        }
    }

    pub fn color_selected(&mut self, color: Rgb) {
        self.engine.set_color(color);
    }

    pub fn menu_open(&mut self, host: &mut impl Host) {
        let result = self.open_file(host);
        Self::report(result, host);
    }

    pub fn menu_save(&mut self, host: &mut impl Host) {
        let result = self.save_file(host);
        Self::report(result, host);
    }

    pub fn menu_save_as(&mut self, host: &mut impl Host) {
        let result = self.save_file_as(host);
        Self::report(result, host);
    }

    pub fn open_file(&mut self, host: &mut impl Host) -> Result<(), DotError> {
        let path = host
            .pick_open_path(&FILE_TYPES)
            .ok_or(DotError::DialogCancelled)?;
        self.open_image(&path, host)
    }

    pub fn open_image(&mut self, path: &Path, host: &mut impl Host) -> Result<(), DotError> {
        let image = host.read_image(path)?;
        let (width, height) = image.dimensions();

        self.engine
            .load_image(image.as_raw(), height, width)
            .map_err(|source| DotError::Rejected {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
        self.path = Some(path.to_path_buf());
        info!("Opened {}", path.display());

        host.redraw_all(self.engine.grid());
        host.set_title(&self.title());
        Ok(())
    }

    /// Writes to the current path, or asks for one when untitled.
    pub fn save_file(&mut self, host: &mut impl Host) -> Result<(), DotError> {
        match &self.path {
            Some(path) => host.write_image(path, self.engine.grid()),
            None => self.save_file_as(host),
        }
    }

    pub fn save_file_as(&mut self, host: &mut impl Host) -> Result<(), DotError> {
        let chosen = host
            .pick_save_path(&FILE_TYPES)
            .ok_or(DotError::DialogCancelled)?;
        let path = io::resolve_save_path(&chosen)?;

        self.path = Some(path);
        host.set_title(&self.title());
        self.save_file(host)
    }

    fn redraw(&self, changes: &[CellChange], host: &mut impl Host) {
        if changes.is_empty() {
            return;
        }

        let mapper = self.mapper();
        let cells: Vec<CellRedraw> = changes
            .iter()
            .map(|change| CellRedraw {
                row: change.row,
                col: change.col,
                color: change.color,
                rect: mapper.cell_rect(change.row, change.col),
            })
            .collect();
        host.redraw_cells(&cells);
    }

    fn report(result: Result<(), DotError>, host: &mut impl Host) {
        match result {
            Ok(()) => {}
            Err(e) if e.is_silent() => debug!("{}", e),
            Err(e) => {
                error!("{}", e);
                host.notify_error(&e.to_string());
            }
        }
    }
}
