//! Recolors the 4-connected region around a seed pixel.
//!
//! The traversal keeps pending coordinates on an explicit heap allocated
//! stack, so the region size is not limited by the call stack. A pixel is
//! recolored before it is pushed, and only pixels still showing the seed's
//! original color are pushed, which makes each pixel enter the stack at
//! most once.
use crate::color::RGBColor;
use crate::error::Error;
use crate::image::PixelGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillRequest {
    pub seed_row: i64,
    pub seed_col: i64,
    pub target_color: RGBColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillReport {
    pub original_color: RGBColor,
    pub target_color: RGBColor,
    /// number of pixels that changed color
    pub filled_pixels: usize,
}

struct FloodFill<'a> {
    grid: &'a mut PixelGrid,
    original_color: RGBColor,
    target_color: RGBColor,
    stack: Vec<(usize, usize)>,
    filled_pixels: usize,
}

impl<'a> FloodFill<'a> {
    fn new(grid: &'a mut PixelGrid, original_color: RGBColor, target_color: RGBColor) -> Self {
        Self {
            grid,
            original_color,
            target_color,
            stack: Vec::new(),
            filled_pixels: 0,
        }
    }

    fn try_fill(&mut self, row: usize, col: usize) -> crate::Result<()> {
        if !self.grid.contains(row, col) {
            return Ok(());
        }
        if self.grid.get(row, col)? != self.original_color {
            return Ok(());
        }
        self.grid.set(row, col, self.target_color)?;
        self.filled_pixels += 1;
        self.stack.push((row, col));
        Ok(())
    }

    fn run(mut self, seed_row: usize, seed_col: usize) -> crate::Result<usize> {
        self.try_fill(seed_row, seed_col)?;
        while let Some((row, col)) = self.stack.pop() {
            for (neighbor_row, neighbor_col) in neighbors(row, col).into_iter().flatten() {
                self.try_fill(neighbor_row, neighbor_col)?;
            }
        }
        Ok(self.filled_pixels)
    }
}

/// up, down, left, right; `None` where the coordinate would drop below zero
fn neighbors(row: usize, col: usize) -> [Option<(usize, usize)>; 4] {
    [
        row.checked_sub(1).map(|up| (up, col)),
        row.checked_add(1).map(|down| (down, col)),
        col.checked_sub(1).map(|left| (row, left)),
        col.checked_add(1).map(|right| (row, right)),
    ]
}

fn validate_seed(grid: &PixelGrid, request: &FillRequest) -> crate::Result<(usize, usize)> {
    let (rows, cols) = grid.dimensions();
    let invalid_seed = || Error::InvalidSeed {
        row: request.seed_row,
        col: request.seed_col,
        rows,
        cols,
    };
    let row = usize::try_from(request.seed_row).map_err(|_| invalid_seed())?;
    let col = usize::try_from(request.seed_col).map_err(|_| invalid_seed())?;
    if !grid.contains(row, col) {
        return Err(invalid_seed());
    }
    Ok((row, col))
}

/// Replaces the region connected to the seed that shares the seed's color.
///
/// Fails with [`Error::InvalidSeed`] without touching the grid when the seed
/// lies outside of it. Filling with the color the seed already has is a
/// no-op.
pub fn fill(grid: &mut PixelGrid, request: &FillRequest) -> crate::Result<FillReport> {
    let (seed_row, seed_col) = validate_seed(grid, request)?;
    let original_color = grid.get(seed_row, seed_col)?;
    let target_color = request.target_color;
    let filled_pixels = if original_color == target_color {
        0
    } else {
        FloodFill::new(grid, original_color, target_color).run(seed_row, seed_col)?
    };
    log::debug!(
        "Filled {} pixels of color {} with {} starting at ({}, {})",
        filled_pixels,
        original_color,
        target_color,
        seed_row,
        seed_col
    );
    Ok(FillReport {
        original_color,
        target_color,
        filled_pixels,
    })
}
