use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use vr_core::{FrameView, PaintStyle, Renderer};

use crate::ui::{self, ViewMode};

/// [`Renderer`] drawing through a ratatui terminal.
///
/// In the binary the backend is crossterm on the alternate screen; restoring
/// it is the caller's job (`ratatui::restore()`).
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    mode: ViewMode,
    title: String,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap an initialized terminal.
    #[must_use]
    pub fn new(terminal: Terminal<B>, mode: ViewMode, title: impl Into<String>) -> Self {
        Self {
            terminal,
            mode,
            title: title.into(),
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn paint(&mut self, view: &FrameView, style: &PaintStyle) -> Result<()> {
        let mode = self.mode;
        let title = self.title.as_str();
        self.terminal
            .draw(|frame| ui::draw(frame, view, style, mode, title))
            .map_err(|e| anyhow::anyhow!("Rendu terminal impossible : {e}"))?;
        log::trace!(
            "Frame {}/{} peinte (axe {})",
            view.index,
            view.extent,
            view.axis
        );
        Ok(())
    }
}
