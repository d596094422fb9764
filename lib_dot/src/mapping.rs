//! Conversion between window coordinates and grid indices.
//!
//! Nothing here is cached: a [`Mapper`] is rebuilt from the current window and
//! grid size for every event, so a resize is picked up immediately.

/// Side length of one square cell on screen.
///
/// The window width and the usable height below the header are clamped to at
/// least 1, so the result is always positive.
pub fn cell_size(
    window_width: f32,
    window_height: f32,
    header_height: f32,
    grid_height: u32,
    grid_width: u32,
) -> f32 {
    let usable_width = window_width.max(1.0);
    let usable_height = (window_height - header_height).max(1.0);
    let grid_width = grid_width.max(1) as f32;
    let grid_height = grid_height.max(1) as f32;

    (usable_width / grid_width).min(usable_height / grid_height)
}

pub fn is_inside(row: i64, col: i64, grid_height: u32, grid_width: u32) -> bool {
    (0..grid_height as i64).contains(&row) && (0..grid_width as i64).contains(&col)
}

/// Screen square covered by one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CellRect {
    pub fn max(&self) -> (f32, f32) {
        (self.x + self.size, self.y + self.size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    header_height: f32,
    grid_height: u32,
    grid_width: u32,
    cell: f32,
}

impl Mapper {
    pub fn new(
        window_width: f32,
        window_height: f32,
        header_height: f32,
        grid_height: u32,
        grid_width: u32,
    ) -> Self {
        Self {
            header_height,
            grid_height,
            grid_width,
            cell: cell_size(
                window_width,
                window_height,
                header_height,
                grid_height,
                grid_width,
            ),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn indices_to_origin(&self, row: i64, col: i64) -> (f32, f32) {
        (
            col as f32 * self.cell,
            row as f32 * self.cell + self.header_height,
        )
    }

    /// Indices may be negative or past the grid; check with [`Mapper::contains`].
    pub fn point_to_indices(&self, x: f32, y: f32) -> (i64, i64) {
        let row = ((y - self.header_height) / self.cell).floor() as i64;
        let col = (x / self.cell).floor() as i64;
        (row, col)
    }

    pub fn contains(&self, row: i64, col: i64) -> bool {
        is_inside(row, col, self.grid_height, self.grid_width)
    }

    /// Grid cell under a screen point, if there is one.
    pub fn hit(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (row, col) = self.point_to_indices(x, y);
        self.contains(row, col)
            .then_some((row as usize, col as usize))
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let (x, y) = self.indices_to_origin(row as i64, col as i64);
        CellRect {
            x,
            y,
            size: self.cell,
        }
    }

    /// Width and height of the whole drawn grid.
    pub fn grid_extent(&self) -> (f32, f32) {
        (
            self.grid_width as f32 * self.cell,
            self.grid_height as f32 * self.cell,
        )
    }
}
