mod common;

use common::{checkerboard, grid_from_rows, BLACK, BLUE, RED, WHITE};
use lib_dot::{CellChange, DotError, PaintEngine, PixelGrid, Rgb, Tool};

#[test]
fn test_default_engine() {
    let engine = PaintEngine::new();
    let grid = engine.grid();

    assert_eq!(grid.dimensions(), (32, 32));
    assert!(grid.pixels().iter().all(|&p| p == WHITE));
    assert_eq!(engine.tool(), Tool::Pen);
    assert_eq!(engine.color(), Rgb::BLACK);
}

#[test]
fn test_paint_inside_sets_one_opaque_cell() {
    let mut engine = PaintEngine::new();

    let changes = engine.paint_at(3, 5, RED);

    assert_eq!(
        changes,
        vec![CellChange {
            row: 3,
            col: 5,
            color: [255, 0, 0, 255]
        }]
    );
    assert_eq!(engine.grid().get(3, 5), Some([255, 0, 0, 255]));
    assert_eq!(engine.grid().get(3, 4), Some(WHITE));
}

#[test]
fn test_paint_outside_is_a_no_op() {
    let mut engine = PaintEngine::new();
    let before = engine.grid().clone();

    for (row, col) in [(-1, 0), (0, -1), (32, 0), (0, 32), (-7, 99)] {
        assert!(engine.paint_at(row, col, RED).is_empty());
    }

    assert_eq!(engine.grid(), &before);
}

#[test]
fn test_paint_restores_alpha_on_transparent_cell() {
    let mut grid = PixelGrid::filled(16, 16, [10, 20, 30, 0]);
    grid.set(0, 0, [10, 20, 30, 128]);
    let mut engine = PaintEngine::with_grid(grid);

    engine.paint_at(0, 0, BLUE);

    assert_eq!(engine.grid().get(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(engine.grid().get(0, 1), Some([10, 20, 30, 0]));
}

#[test]
fn test_fill_two_by_two_scenario() {
    let grid = grid_from_rows(&[&[WHITE, WHITE], &[WHITE, BLACK]]);
    let mut engine = PaintEngine::with_grid(grid);

    let changes = engine.flood_fill_at(0, 0, RED);

    let mut changed: Vec<(usize, usize)> = changes.iter().map(|c| (c.row, c.col)).collect();
    changed.sort();
    assert_eq!(changed, vec![(0, 0), (0, 1), (1, 0)]);

    let red = RED.to_rgba();
    assert_eq!(engine.grid().get(0, 0), Some(red));
    assert_eq!(engine.grid().get(0, 1), Some(red));
    assert_eq!(engine.grid().get(1, 0), Some(red));
    assert_eq!(engine.grid().get(1, 1), Some(BLACK));
}

#[test]
fn test_fill_uniform_grid_changes_every_cell() {
    for (width, height) in [(16, 16), (64, 64), (20, 48)] {
        let (h, w) = (height as i64, width as i64);
        for (row, col) in [(0, 0), (h / 2, w / 3), (h - 1, w - 1)] {
            let mut engine = PaintEngine::with_grid(PixelGrid::filled(width, height, WHITE));

            let changes = engine.flood_fill_at(row, col, BLUE);

            assert_eq!(changes.len(), (width * height) as usize);
            assert!(engine.grid().pixels().iter().all(|&p| p == BLUE.to_rgba()));
        }
    }
}

#[test]
fn test_fill_does_not_cross_diagonals() {
    let mut engine = PaintEngine::with_grid(checkerboard(16, 16));

    let changes = engine.flood_fill_at(0, 0, RED);

    assert_eq!(changes.len(), 1);
    assert_eq!(engine.grid().get(0, 0), Some(RED.to_rgba()));
    assert_eq!(engine.grid().get(1, 1), Some(WHITE));
    assert_eq!(engine.grid().get(0, 1), Some(BLACK));
}

#[test]
fn test_fill_l_shape_stops_at_diagonal_touch() {
    // An L of black cells, plus one black cell touching its corner diagonally.
    let grid = grid_from_rows(&[
        &[BLACK, WHITE, WHITE, WHITE],
        &[BLACK, WHITE, WHITE, WHITE],
        &[BLACK, BLACK, BLACK, WHITE],
        &[WHITE, WHITE, WHITE, BLACK],
    ]);
    let mut engine = PaintEngine::with_grid(grid);

    let changes = engine.flood_fill_at(0, 0, RED);

    assert_eq!(changes.len(), 5);
    assert_eq!(engine.grid().get(2, 2), Some(RED.to_rgba()));
    assert_eq!(engine.grid().get(3, 3), Some(BLACK));
    assert_eq!(engine.grid().get(1, 1), Some(WHITE));
}

#[test]
fn test_fill_matches_exact_rgba() {
    // Same RGB, different alpha: not part of the region.
    let mut grid = PixelGrid::filled(16, 16, WHITE);
    grid.set(0, 1, [255, 255, 255, 254]);
    for r in 0..16 {
        grid.set(r, 2, BLACK);
    }
    let mut engine = PaintEngine::with_grid(grid);

    let changes = engine.flood_fill_at(0, 0, RED);

    assert_eq!(changes.len(), 31);
    assert_eq!(engine.grid().get(0, 1), Some([255, 255, 255, 254]));
    assert_eq!(engine.grid().get(0, 3), Some(WHITE));
}

#[test]
fn test_fill_with_same_color_still_restamps_region() {
    let mut engine = PaintEngine::with_grid(PixelGrid::filled(16, 16, WHITE));
    let before = engine.grid().clone();

    let changes = engine.flood_fill_at(4, 4, Rgb::WHITE);

    assert_eq!(changes.len(), 256);
    assert_eq!(engine.grid(), &before);
}

#[test]
fn test_fill_outside_is_a_no_op() {
    let mut engine = PaintEngine::new();
    let before = engine.grid().clone();

    assert!(engine.flood_fill_at(-1, 0, RED).is_empty());
    assert!(engine.flood_fill_at(0, 32, RED).is_empty());
    assert_eq!(engine.grid(), &before);
}

#[test]
fn test_fill_large_region_spiral() {
    // A one-cell-wide corridor snaking through a 64x64 grid.
    let mut grid = PixelGrid::filled(64, 64, WHITE);
    for r in (1..64).step_by(2) {
        for c in 0..64 {
            grid.set(r, c, BLACK);
        }
        let gap = if (r / 2) % 2 == 0 { 63 } else { 0 };
        grid.set(r, gap, WHITE);
    }
    let mut engine = PaintEngine::with_grid(grid);

    let changes = engine.flood_fill_at(0, 0, BLUE);

    let whites = 32 * 64 + 32;
    assert_eq!(changes.len(), whites);
    assert!(!engine.grid().pixels().contains(&WHITE));
}

#[test]
fn test_apply_uses_current_tool_and_color() {
    let mut engine = PaintEngine::new();

    engine.set_color(RED);
    let changes = engine.apply_at(1, 1);
    assert_eq!(changes.len(), 1);

    engine.set_mode(Tool::Fill);
    engine.set_color(BLUE);
    let changes = engine.apply_at(10, 10);
    assert_eq!(changes.len(), 32 * 32 - 1);
    assert_eq!(engine.grid().get(1, 1), Some(RED.to_rgba()));
}

#[test]
fn test_set_color_and_mode_leave_buffer_alone() {
    let mut engine = PaintEngine::new();
    let before = engine.grid().clone();

    engine.set_color(RED);
    engine.set_mode(Tool::Fill);

    assert_eq!(engine.grid(), &before);
    assert_eq!("fill".parse::<Tool>(), Ok(Tool::Fill));
    assert_eq!("pen".parse::<Tool>(), Ok(Tool::Pen));
    assert!("brush".parse::<Tool>().is_err());
}

#[test]
fn test_load_image_replaces_buffer() {
    let mut engine = PaintEngine::new();
    let data = [9u8, 8, 7, 6].repeat(20 * 40);

    engine.load_image(&data, 20, 40).unwrap();

    assert_eq!(engine.grid().dimensions(), (40, 20));
    assert_eq!(engine.grid().get(19, 39), Some([9, 8, 7, 6]));
}

#[test]
fn test_load_image_accepts_bounds() {
    let mut engine = PaintEngine::new();

    for (h, w) in [(16, 16), (64, 64), (16, 64), (64, 16)] {
        let data = vec![0u8; (h * w * 4) as usize];
        assert!(engine.load_image(&data, h, w).is_ok(), "{}x{}", h, w);
    }
}

#[test]
fn test_load_image_rejects_out_of_range_sizes() {
    let mut engine = PaintEngine::new();
    engine.paint_at(0, 0, RED);
    let before = engine.grid().clone();

    for (h, w) in [(15, 32), (32, 65), (15, 65), (0, 0), (65, 16)] {
        let data = vec![0u8; (h * w * 4) as usize];
        let err = engine.load_image(&data, h, w).unwrap_err();

        match err {
            DotError::UnsupportedImageSize { height, width } => {
                assert_eq!((height, width), (h, w));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(engine.grid(), &before);
    }
}

#[test]
fn test_load_image_rejects_short_buffer() {
    let mut engine = PaintEngine::new();
    let before = engine.grid().clone();

    let err = engine.load_image(&[0u8; 10], 16, 16).unwrap_err();

    assert!(matches!(
        err,
        DotError::BufferSize {
            expected: 1024,
            actual: 10
        }
    ));
    assert_eq!(engine.grid(), &before);
}
