//! Brick grid layout
//!
//! Fixed rows x cols pattern, centred horizontally. Later stages roll random
//! durability per brick from the session RNG.

use rand::Rng;

use super::geometry::Rect;
use super::state::Brick;
use crate::tuning::Tuning;

/// Row colours (0xRRGGBB), cycled by row index
pub const BRICK_PALETTE: [u32; 8] = [
    0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0xFFA07A, 0x98D8C8, 0xF7DC6F, 0xBB8FCE, 0x85C1E2,
];

/// Build the full brick grid for a stage
pub fn create_bricks<R: Rng + ?Sized>(stage: u32, tuning: &Tuning, rng: &mut R) -> Vec<Brick> {
    let rows = tuning.brick_rows;
    let cols = tuning.brick_cols;
    let cell_w = tuning.brick_width + tuning.brick_padding;
    let cell_h = tuning.brick_height + tuning.brick_padding;

    let grid_width = cols as f32 * cell_w - tuning.brick_padding;
    let offset_left = (tuning.canvas_width - grid_width) / 2.0;

    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let color = BRICK_PALETTE[row as usize % BRICK_PALETTE.len()];
        for col in 0..cols {
            let x = offset_left + col as f32 * cell_w;
            let y = tuning.brick_offset_top + row as f32 * cell_h;

            let durability = if stage > 1 {
                rng.random_range(1..=stage)
            } else {
                1
            };
            let points = durability * tuning.points_per_durability;

            bricks.push(Brick::new(
                Rect::new(x, y, tuning.brick_width, tuning.brick_height),
                color,
                durability,
                points,
            ));
        }
    }

    log::debug!(
        "Stage {} grid: {}x{} bricks, left offset {}",
        stage,
        rows,
        cols,
        offset_left
    );
    bricks
}
