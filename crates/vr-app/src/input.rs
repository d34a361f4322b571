use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use vr_core::{InputSource, NavCommand};

/// Map a key to a navigation command.
///
/// # Example
/// ```
/// use crossterm::event::KeyCode;
/// use vr_app::input::map_key;
/// use vr_core::NavCommand;
/// assert_eq!(map_key(KeyCode::Up), Some(NavCommand::AxisNext));
/// assert_eq!(map_key(KeyCode::Char('a')), None);
/// ```
#[must_use]
pub fn map_key(code: KeyCode) -> Option<NavCommand> {
    match code {
        KeyCode::Up => Some(NavCommand::AxisNext),
        KeyCode::Down => Some(NavCommand::AxisPrev),
        KeyCode::Left => Some(NavCommand::FramePrev),
        KeyCode::Right => Some(NavCommand::FrameNext),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(NavCommand::Exit),
        _ => None,
    }
}

/// Translate a terminal event. Only key presses count; releases and
/// repeats reported by some terminals are ignored.
#[must_use]
pub fn map_event(event: &Event) -> Option<NavCommand> {
    match *event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => map_key(code),
        _ => None,
    }
}

/// Bloque sur le prochain événement crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_command(&mut self) -> Result<Option<NavCommand>> {
        Ok(map_event(&event::read()?))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn arrows_map_to_axis_and_frame() {
        assert_eq!(map_key(KeyCode::Down), Some(NavCommand::AxisPrev));
        assert_eq!(map_key(KeyCode::Left), Some(NavCommand::FramePrev));
        assert_eq!(map_key(KeyCode::Right), Some(NavCommand::FrameNext));
    }

    #[test]
    fn enter_and_escape_exit() {
        assert_eq!(map_key(KeyCode::Enter), Some(NavCommand::Exit));
        assert_eq!(map_key(KeyCode::Esc), Some(NavCommand::Exit));
        assert_eq!(map_key(KeyCode::Char('q')), Some(NavCommand::Exit));
    }

    #[test]
    fn releases_and_resizes_are_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(map_event(&release), None);
        assert_eq!(map_event(&Event::Resize(80, 24)), None);

        let press = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(map_event(&press), Some(NavCommand::FrameNext));
    }
}
