use crate::axis::Axis;
use crate::error::CoreError;
use crate::grid::FrameGrid;

/// 2-D frame cut out of a [`FrameGrid`].
///
/// `width` is the extent of the first free axis, `height` the extent of the
/// second; the free axes keep their natural order (no transpose).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSlice {
    /// Extent of the first free axis.
    pub width: usize,
    /// Extent of the second free axis.
    pub height: usize,
    /// Row-major by `i`: cell `(i, j)` lives at `i * height + j`.
    pub cells: Vec<u8>,
}

impl FrameSlice {
    /// Cell `(i, j)`, or `None` outside the frame.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        if i < self.width && j < self.height {
            Some(self.cells[i * self.height + j])
        } else {
            None
        }
    }

    /// Nested form indexed `[i][j]`.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.height)
            .map(<[u8]>::to_vec)
            .collect()
    }
}

/// A slice together with what the status bar shows about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameView {
    /// Axis held fixed.
    pub axis: Axis,
    /// Effective index along `axis`.
    pub index: usize,
    /// Extent of `axis`.
    pub extent: usize,
    /// The frame itself.
    pub slice: FrameSlice,
}

impl FrameView {
    /// Slice `grid` at `(axis, index)`.
    ///
    /// # Errors
    /// Propagates `CoreError::IndexOutOfRange` from [`FrameGrid::slice`].
    pub fn new(grid: &FrameGrid, axis: Axis, index: usize) -> Result<Self, CoreError> {
        Ok(Self {
            axis,
            index,
            extent: grid.extent(axis),
            slice: grid.slice(axis, index)?,
        })
    }
}

impl FrameGrid {
    /// Extract the 2-D frame obtained by fixing `axis` at `index`.
    ///
    /// Slicing along X yields `dimY × dimZ`, along Y `dimX × dimZ`, along Z
    /// `dimX × dimY`. The source grid is never modified.
    ///
    /// # Errors
    /// Returns `CoreError::IndexOutOfRange` if `index >= extent(axis)`.
    ///
    /// # Example
    /// ```
    /// use vr_core::{Axis, FrameGrid};
    /// let grid = FrameGrid::from_cells([2, 2, 2], vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    /// let frame = grid.slice(Axis::Z, 0).unwrap();
    /// assert_eq!(frame.to_rows(), vec![vec![1, 3], vec![5, 7]]);
    /// ```
    pub fn slice(&self, axis: Axis, index: usize) -> Result<FrameSlice, CoreError> {
        let extent = self.extent(axis);
        if index >= extent {
            return Err(CoreError::IndexOutOfRange {
                axis,
                index,
                extent,
            });
        }

        let [first, second] = axis.free_axes();
        let width = self.extent(first);
        let height = self.extent(second);
        let mut cells = Vec::with_capacity(width * height);

        for i in 0..width {
            for j in 0..height {
                let (x, y, z) = match axis {
                    Axis::X => (index, i, j),
                    Axis::Y => (i, index, j),
                    Axis::Z => (i, j, index),
                };
                let offset = self.offset(x, y, z).ok_or(CoreError::IndexOutOfRange {
                    axis,
                    index,
                    extent,
                })?;
                cells.push(self.cells()[offset]);
            }
        }

        Ok(FrameSlice {
            width,
            height,
            cells,
        })
    }
}
