use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the three grid dimensions.
///
/// The discriminant is the storage order: x is the outermost dimension,
/// z the innermost.
///
/// # Example
/// ```
/// use vr_core::Axis;
/// assert_eq!(Axis::from_counter(4), Axis::Y);
/// assert_eq!(Axis::Z.name(), "z");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Reduce an unbounded counter to an axis (counter mod 3).
    #[must_use]
    pub fn from_counter(counter: u64) -> Self {
        Self::ALL[(counter % 3) as usize]
    }

    /// Position of this axis in `[x, y, z]`.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// The two axes left free when slicing along `self`, in natural order.
    ///
    /// # Example
    /// ```
    /// use vr_core::Axis;
    /// assert_eq!(Axis::Y.free_axes(), [Axis::X, Axis::Z]);
    /// ```
    #[must_use]
    pub fn free_axes(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(CoreError::Config(format!(
                "axe inconnu '{other}' (attendu : x, y ou z)"
            ))),
        }
    }
}
