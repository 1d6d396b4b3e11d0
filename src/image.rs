use crate::color::RGBColor;
use crate::error::Error;

pub mod ppm;
pub mod reader;
pub mod writer;

pub use ppm::{PPMEncoding, PPMHeader, PPMImage};

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<PPMImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// One plane of 8-bit samples, stored row-major.
pub struct ColorChannel<T> {
    dots: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> ColorChannel<T>
where
    T: Clone + Copy + Default,
{
    fn allocate(rows: usize, cols: usize) -> crate::Result<Self> {
        let length = rows
            .checked_mul(cols)
            .ok_or(Error::AllocationFailed(rows, cols))?;
        let mut dots = Vec::new();
        dots.try_reserve_exact(length)
            .map_err(|_| Error::AllocationFailed(rows, cols))?;
        dots.resize(length, T::default());
        Ok(Self { dots, rows, cols })
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(col + row * self.cols)
        } else {
            None
        }
    }

    fn dot(&self, index: usize) -> T {
        self.dots[index]
    }

    fn set_dot(&mut self, index: usize, value: T) {
        self.dots[index] = value;
    }
}

/// Three equally sized color planes forming an RGB raster.
///
/// Every coordinate inside `[0, rows) x [0, cols)` is valid for all three
/// planes at once; the planes are only ever allocated together.
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    red: ColorChannel<u8>,
    green: ColorChannel<u8>,
    blue: ColorChannel<u8>,
}

impl PixelGrid {
    /// Allocates a zero-initialized (black) grid.
    pub fn allocate(rows: usize, cols: usize) -> crate::Result<Self> {
        Ok(Self {
            rows,
            cols,
            red: ColorChannel::allocate(rows, cols)?,
            green: ColorChannel::allocate(rows, cols)?,
            blue: ColorChannel::allocate(rows, cols)?,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> crate::Result<RGBColor> {
        let index = self.checked_index(row, col)?;
        Ok(self.color_at(index))
    }

    pub fn set(&mut self, row: usize, col: usize, color: RGBColor) -> crate::Result<()> {
        let index = self.checked_index(row, col)?;
        self.red.set_dot(index, color.red);
        self.green.set_dot(index, color.green);
        self.blue.set_dot(index, color.blue);
        Ok(())
    }

    /// Iterates the colors of one row from left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = RGBColor> + '_ {
        let indices = if row < self.rows {
            row * self.cols..(row + 1) * self.cols
        } else {
            0..0
        };
        indices.map(move |index| self.color_at(index))
    }

    /// Iterates all colors in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = RGBColor> + '_ {
        (0..self.rows * self.cols).map(move |index| self.color_at(index))
    }

    fn color_at(&self, index: usize) -> RGBColor {
        RGBColor::new(
            self.red.dot(index),
            self.green.dot(index),
            self.blue.dot(index),
        )
    }

    fn checked_index(&self, row: usize, col: usize) -> crate::Result<usize> {
        self.red.index(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

#[cfg(test)]
mod test {
    use super::PixelGrid;
    use crate::color::RGBColor;
    use crate::error::Error;

    #[test]
    fn allocated_grid_is_black() {
        let grid = PixelGrid::allocate(2, 3).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.pixels().count(), 6);
        assert!(grid.pixels().all(|color| color == RGBColor::BLACK));
    }

    #[test]
    fn set_writes_all_three_planes() {
        let mut grid = PixelGrid::allocate(2, 3).unwrap();
        let color = RGBColor::new(10, 20, 30);
        grid.set(1, 2, color).unwrap();
        assert_eq!(grid.get(1, 2).unwrap(), color);
        assert_eq!(grid.get(0, 2).unwrap(), RGBColor::BLACK);
        assert_eq!(grid.pixels().nth(5), Some(color));
    }

    #[test]
    fn rows_are_laid_out_row_major() {
        let mut grid = PixelGrid::allocate(2, 2).unwrap();
        grid.set(1, 0, RGBColor::WHITE).unwrap();
        let second_row: Vec<RGBColor> = grid.row(1).collect();
        assert_eq!(second_row, vec![RGBColor::WHITE, RGBColor::BLACK]);
        assert_eq!(grid.row(2).count(), 0);
    }

    #[test]
    fn get_out_of_bounds() {
        let grid = PixelGrid::allocate(2, 3).unwrap();
        match grid.get(2, 0) {
            Err(Error::OutOfBounds { row: 2, col: 0, .. }) => {}
            _ => panic!("Read past the last row was not detected"),
        }
        assert!(grid.get(0, 3).is_err(), "Read past the last column");
    }

    #[test]
    fn set_out_of_bounds_leaves_grid_unchanged() {
        let mut grid = PixelGrid::allocate(1, 1).unwrap();
        assert!(grid.set(0, 1, RGBColor::WHITE).is_err());
        assert_eq!(grid.get(0, 0).unwrap(), RGBColor::BLACK);
    }

    #[test]
    fn empty_grid() {
        let grid = PixelGrid::allocate(0, 5).unwrap();
        assert_eq!(grid.pixels().count(), 0);
        assert!(!grid.contains(0, 0));
    }

    #[test]
    fn overflowing_dimensions_fail_to_allocate() {
        match PixelGrid::allocate(usize::MAX, 2) {
            Err(Error::AllocationFailed(_, 2)) => {}
            _ => panic!("Overflowing grid size was not detected"),
        }
    }
}
