use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use vr_core::{FrameView, PaintStyle};

use crate::canvas;

/// Height of the status bar under the canvas.
pub const STATUS_HEIGHT: u16 = 2;

/// What the session is doing, for the status bar.
///
/// # Example
/// ```
/// use vr_render::ui::ViewMode;
/// let mode = ViewMode::Navigate;
/// assert!(matches!(mode, ViewMode::Navigate));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Interactive scrubbing.
    Navigate,
    /// Sequential playback.
    Playback,
}

/// Draw the full UI: canvas + status bar.
pub fn draw(frame: &mut Frame, view: &FrameView, style: &PaintStyle, mode: ViewMode, title: &str) {
    let area = frame.area();
    let [canvas_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)]).areas(area);

    canvas::paint_frame(frame.buffer_mut(), canvas_area, &view.slice, style);
    draw_status(frame, status_area, view, mode, title);
}

/// Deux lignes : axe courant, puis frame effective + rappel des touches.
fn draw_status(frame: &mut Frame, area: Rect, view: &FrameView, mode: ViewMode, title: &str) {
    let mode_span = match mode {
        ViewMode::Navigate => Span::styled(" NAV ", Style::default().fg(Color::Black).bg(Color::Green)),
        ViewMode::Playback => Span::styled(
            format!(" PLAY {}/{} ", view.index + 1, view.extent),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    };

    let hint = match mode {
        ViewMode::Navigate => "↑/↓ axe  ←/→ frame  Entrée quitter",
        ViewMode::Playback => "lecture en cours",
    };

    let lines = vec![
        Line::from(vec![
            mode_span,
            Span::raw(format!(" timeline axis: {}", view.axis.name())),
            Span::styled(format!("  {title}"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::raw(format!("frame: {}", view.index)),
            Span::styled(format!("   {hint}"), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let status = Paragraph::new(lines).style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(status, area);
}
