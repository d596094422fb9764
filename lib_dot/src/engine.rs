use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::color::{Rgb, WHITE};
use crate::constants::DEFAULT_IMAGE_SIZE;
use crate::error::DotError;
use crate::grid::{CellChange, PixelGrid};
use crate::mapping::is_inside;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Pen,
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Pen, Tool::Fill];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Fill => "fill",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pen" => Ok(Tool::Pen),
            "fill" => Ok(Tool::Fill),
            other => Err(UnknownTool(other.to_string())),
        }
    }
}

/// Owns the image buffer and the active tool and color, and performs every
/// mutation of the buffer.
#[derive(Debug)]
pub struct PaintEngine {
    grid: PixelGrid,
    tool: Tool,
    color: Rgb,
}

impl Default for PaintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintEngine {
    /// 32x32 opaque white, pen, black.
    pub fn new() -> Self {
        Self::with_grid(PixelGrid::filled(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            WHITE,
        ))
    }

    pub fn with_grid(grid: PixelGrid) -> Self {
        Self {
            grid,
            tool: Tool::default(),
            color: Rgb::default(),
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_mode(&mut self, tool: Tool) {
        debug!("Tool set to {}", tool);
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Rgb) {
        debug!("Color set to {}", color.to_hex());
        self.color = color;
    }

    /// Replaces the whole buffer. On error the current buffer is untouched.
    pub fn load_image(&mut self, rgba: &[u8], height: u32, width: u32) -> Result<(), DotError> {
        let grid = PixelGrid::from_rgba(width, height, rgba).inspect_err(|e| {
            warn!("Rejected image {}x{}: {}", width, height, e);
        })?;

        info!("Loaded {}x{} image", width, height);
        self.grid = grid;
        Ok(())
    }

    /// Runs the current tool at a cell.
    pub fn apply_at(&mut self, row: i64, col: i64) -> Vec<CellChange> {
        match self.tool {
            Tool::Pen => self.paint_at(row, col, self.color),
            Tool::Fill => self.flood_fill_at(row, col, self.color),
        }
    }

    /// Sets one cell. Points outside the grid are ignored.
    pub fn paint_at(&mut self, row: i64, col: i64, color: Rgb) -> Vec<CellChange> {
        let (width, height) = self.grid.dimensions();
        if !is_inside(row, col, height, width) {
            return Vec::new();
        }

        let (row, col) = (row as usize, col as usize);
        let color = color.to_rgba();
        self.grid.set(row, col, color);

        vec![CellChange { row, col, color }]
    }

    /// Fills the 4-connected region that shares the seed cell's exact RGBA.
    ///
    /// The region is traversed even when it already has the fill color, so
    /// every cell of it is reported as changed.
    pub fn flood_fill_at(&mut self, row: i64, col: i64, color: Rgb) -> Vec<CellChange> {
        let (width, height) = self.grid.dimensions();
        if !is_inside(row, col, height, width) {
            return Vec::new();
        }

        let (w, h) = (width as usize, height as usize);
        let seed = (row as usize, col as usize);
        let Some(base) = self.grid.get(seed.0, seed.1) else {
            return Vec::new();
        };
        let fill = color.to_rgba();

        let mut visited = vec![false; w * h];
        let mut stack = vec![seed];
        let mut changes = Vec::new();

        while let Some((r, c)) = stack.pop() {
            let idx = r * w + c;
            if visited[idx] || self.grid.get(r, c) != Some(base) {
                continue;
            }

            visited[idx] = true;
            self.grid.set(r, c, fill);
            changes.push(CellChange {
                row: r,
                col: c,
                color: fill,
            });

            // Up, down, left, right. Bounds are checked here so the stack only
            // ever holds valid indices.
            if r > 0 {
                stack.push((r - 1, c));
            }
            if r + 1 < h {
                stack.push((r + 1, c));
            }
            if c > 0 {
                stack.push((r, c - 1));
            }
            if c + 1 < w {
                stack.push((r, c + 1));
            }
        }

        debug!(
            "Flood fill at ({}, {}) with {} changed {} cells",
            seed.0,
            seed.1,
            color.to_hex(),
            changes.len()
        );
        changes
    }
}
