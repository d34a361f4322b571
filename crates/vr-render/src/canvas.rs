use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use vr_core::{FrameSlice, PaintStyle};

use crate::palette;

/// Peint une frame dans un `ratatui::Buffer`, un bloc par cellule.
///
/// Cell `(i, j)` covers columns `i·cell_width ..` and rows `j·cell_height ..`
/// relative to `area`. Blocks past the area edge are clipped. A zero block
/// size is painted as 1.
///
/// # Example
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use ratatui::style::Color;
/// use vr_core::{FrameSlice, PaintStyle};
/// use vr_render::canvas::paint_frame;
///
/// let frame = FrameSlice { width: 2, height: 1, cells: vec![0, 12] };
/// let area = Rect::new(0, 0, 8, 3);
/// let mut buf = Buffer::empty(area);
/// paint_frame(&mut buf, area, &frame, &PaintStyle::default());
/// assert_eq!(buf[(0, 0)].bg, Color::Black);
/// assert_eq!(buf[(4, 2)].bg, Color::Indexed(9));
/// ```
pub fn paint_frame(buf: &mut Buffer, area: Rect, frame: &FrameSlice, style: &PaintStyle) {
    let cell_w = usize::from(style.cell_width.max(1));
    let cell_h = usize::from(style.cell_height.max(1));
    let max_i = (usize::from(area.width) / cell_w + 1).min(frame.width);
    let max_j = (usize::from(area.height) / cell_h + 1).min(frame.height);

    for i in 0..max_i {
        for j in 0..max_j {
            let Some(code) = frame.get(i, j) else {
                continue;
            };
            let color = palette::cell_color(code, style.debug, style.empty_color);

            for px in 0..cell_w {
                let col = i * cell_w + px;
                if col >= usize::from(area.width) {
                    break;
                }
                for py in 0..cell_h {
                    let row = j * cell_h + py;
                    if row >= usize::from(area.height) {
                        break;
                    }
                    let pos = (area.x + col as u16, area.y + row as u16);
                    if let Some(cell) = buf.cell_mut(pos) {
                        cell.set_char(' ').set_bg(color);
                    }
                }
            }
        }
    }
}
