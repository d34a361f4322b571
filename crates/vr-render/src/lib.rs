/// TUI rendering module for voxreel.
///
/// Provides the palette, the block canvas, the status bar layout, and the
/// terminal-backed [`vr_core::Renderer`].
pub mod canvas;
pub mod palette;
pub mod terminal;
pub mod ui;

pub use terminal::TerminalRenderer;
