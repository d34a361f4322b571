use anyhow::Result;

use crate::navigator::NavCommand;
use crate::slice::FrameView;

/// How a frame is painted: block size per grid cell and debug coloring.
///
/// # Example
/// ```
/// use vr_core::PaintStyle;
/// let style = PaintStyle::default();
/// assert_eq!((style.cell_width, style.cell_height), (4, 3));
/// assert!(!style.debug);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintStyle {
    /// Terminal columns per grid cell.
    pub cell_width: u16,
    /// Terminal rows per grid cell.
    pub cell_height: u16,
    /// Paint code 0 with `empty_color` so vacant cells stand out.
    pub debug: bool,
    /// Color code used for code 0 in debug mode.
    pub empty_color: u8,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            cell_width: 4,
            cell_height: 3,
            debug: false,
            empty_color: 9,
        }
    }
}

/// Paints frames somewhere visible.
///
/// Implémenté par : `TerminalRenderer` (vr-render).
///
/// # Example
/// ```
/// use vr_core::{FrameView, PaintStyle, Renderer};
///
/// struct CountingRenderer(usize);
/// impl Renderer for CountingRenderer {
///     fn paint(&mut self, _view: &FrameView, _style: &PaintStyle) -> anyhow::Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Renderer {
    /// Paint one frame with its axis and index.
    ///
    /// # Errors
    /// Implementations report output failures (closed terminal, I/O).
    fn paint(&mut self, view: &FrameView, style: &PaintStyle) -> Result<()>;
}

/// Blocking source of navigation inputs.
///
/// Implémenté par : `CrosstermInput` (vr-app).
pub trait InputSource {
    /// Wait for the next event.
    ///
    /// Returns `None` for events that do not change state (unmapped keys,
    /// resizes); the session repaints anyway.
    ///
    /// # Errors
    /// Implementations report input failures.
    fn next_command(&mut self) -> Result<Option<NavCommand>>;
}
