use crate::axis::Axis;
use crate::error::CoreError;

/// Dense 3-D grid of color codes.
///
/// Stored x-major, then y, then z innermost, so the flat layout matches the
/// nesting of the wire format. Extents are always ≥ 1 and the grid is never
/// jagged.
///
/// # Example
/// ```
/// use vr_core::{Axis, FrameGrid};
/// let grid = FrameGrid::new(2, 3, 4).unwrap();
/// assert_eq!(grid.extent(Axis::Y), 3);
/// assert_eq!(grid.get(1, 2, 3), Some(0));
/// assert_eq!(grid.get(2, 0, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGrid {
    dims: [usize; 3],
    cells: Vec<u8>,
}

impl FrameGrid {
    /// Zero-filled grid.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if any extent is zero.
    pub fn new(dim_x: usize, dim_y: usize, dim_z: usize) -> Result<Self, CoreError> {
        let len = checked_volume([dim_x, dim_y, dim_z])?;
        Ok(Self {
            dims: [dim_x, dim_y, dim_z],
            cells: vec![0; len],
        })
    }

    /// Wrap an existing x-major buffer.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if any extent is zero, or
    /// `CoreError::Decode` if `cells` does not hold exactly one value per cell.
    ///
    /// # Example
    /// ```
    /// use vr_core::FrameGrid;
    /// let grid = FrameGrid::from_cells([1, 2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(grid.get(0, 1, 0), Some(3));
    /// assert!(FrameGrid::from_cells([1, 2, 2], vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_cells(dims: [usize; 3], cells: Vec<u8>) -> Result<Self, CoreError> {
        let len = checked_volume(dims)?;
        if cells.len() != len {
            return Err(CoreError::Decode(format!(
                "{} cellules pour une grille {}×{}×{} ({len} attendues)",
                cells.len(),
                dims[0],
                dims[1],
                dims[2]
            )));
        }
        Ok(Self { dims, cells })
    }

    /// Extents `[x, y, z]`.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Extent along one axis.
    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> usize {
        self.dims[axis.ordinal()]
    }

    /// Cell value, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        self.offset(x, y, z).map(|i| self.cells[i])
    }

    /// Flat x-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Writes are reserved to the codec and blank-movie construction.
    pub(crate) fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        if let Some(i) = self.offset(x, y, z) {
            self.cells[i] = value;
        }
    }

    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let [dx, dy, dz] = self.dims;
        if x < dx && y < dy && z < dz {
            Some((x * dy + y) * dz + z)
        } else {
            None
        }
    }
}

fn checked_volume(dims: [usize; 3]) -> Result<usize, CoreError> {
    let [x, y, z] = dims;
    let invalid = || CoreError::InvalidDimensions { x, y, z };
    if x == 0 || y == 0 || z == 0 {
        return Err(invalid());
    }
    x.checked_mul(y)
        .and_then(|xy| xy.checked_mul(z))
        .ok_or_else(invalid)
}
