//! Grid geometry and slot index mapping
//!
//! Cells are numbered 0..grid_size² in row-major order
//! (index = row·grid_size + col). The middle index is reserved for the
//! center image; non-center images are packed around it in input order.

use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, MAX_CANVAS_DIMENSION};
use crate::io::error::{Result, invalid_parameter};

/// Validated grid geometry: an odd number of square cells per side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    grid_size: u32,
    cell_size: u32,
}

impl GridSpec {
    /// Create a grid specification after validating its parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `grid_size` is zero or even (the grid needs a single middle cell)
    /// - `cell_size` is zero
    /// - the resulting canvas side would exceed [`MAX_CANVAS_DIMENSION`]
    pub fn new(grid_size: u32, cell_size: u32) -> Result<Self> {
        if grid_size == 0 || grid_size.is_multiple_of(2) {
            return Err(invalid_parameter(
                "grid_size",
                &grid_size,
                &"must be an odd integer of at least 1",
            ));
        }
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be a positive number of pixels",
            ));
        }
        if u64::from(grid_size) * u64::from(cell_size) > u64::from(MAX_CANVAS_DIMENSION) {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("canvas side would exceed {MAX_CANVAS_DIMENSION} pixels"),
            ));
        }

        Ok(Self {
            grid_size,
            cell_size,
        })
    }

    /// Number of cells along each axis
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Side length of each square cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// Index of the middle cell reserved for the center image
    pub const fn center_index(&self) -> usize {
        self.cell_count() / 2
    }

    /// Maximum number of non-center images the grid can hold
    pub const fn capacity(&self) -> usize {
        self.cell_count() - 1
    }

    /// Side length of the composed canvas in pixels
    pub const fn canvas_size(&self) -> u32 {
        self.grid_size * self.cell_size
    }

    /// Pixel origin (x, y) of the cell at a row-major index
    pub const fn cell_origin(&self, index: usize) -> (u32, u32) {
        let col = (index as u32) % self.grid_size;
        let row = (index as u32) / self.grid_size;
        (col * self.cell_size, row * self.cell_size)
    }

    /// Cell index assigned to the k-th non-center image
    ///
    /// Indices ascend in input order and skip over the reserved middle cell.
    pub const fn slot_for(&self, k: usize) -> usize {
        if k < self.center_index() { k } else { k + 1 }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        // The compiled-in defaults always satisfy the constructor's checks
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}
