use crate::axis::Axis;
use crate::error::CoreError;
use crate::grid::FrameGrid;
use crate::slice::FrameView;

/// One discrete navigation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// Cycle x → y → z → x.
    AxisNext,
    /// Step back one axis, never below the first.
    AxisPrev,
    /// Advance the frame counter.
    FrameNext,
    /// Rewind the frame counter, never below zero.
    FramePrev,
    /// End the session.
    Exit,
}

/// Outcome of [`Navigator::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit,
}

/// Axis/frame cursor for an interactive session.
///
/// Both counters are raw and unbounded; they are reduced at read time
/// (axis mod 3, frame mod the extent of the current axis). The frame counter
/// is shared across axes, so switching axis can move the effective frame.
///
/// # Example
/// ```
/// use vr_core::{Axis, NavCommand, Navigator};
/// let mut nav = Navigator::new();
/// nav.apply(NavCommand::AxisNext);
/// nav.apply(NavCommand::FrameNext);
/// assert_eq!(nav.axis(), Axis::Y);
/// assert_eq!(nav.frame_counter(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    axis_counter: u64,
    frame_counter: u64,
}

impl Navigator {
    /// Initial state: axis x, frame 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        Axis::from_counter(self.axis_counter)
    }

    /// Raw axis counter.
    #[must_use]
    pub fn axis_counter(&self) -> u64 {
        self.axis_counter
    }

    /// Raw frame counter.
    #[must_use]
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Apply one input. Decrements clamp at zero instead of wrapping.
    pub fn apply(&mut self, command: NavCommand) -> Transition {
        match command {
            NavCommand::AxisNext => self.axis_counter = self.axis_counter.saturating_add(1),
            NavCommand::AxisPrev => self.axis_counter = self.axis_counter.saturating_sub(1),
            NavCommand::FrameNext => self.frame_counter = self.frame_counter.saturating_add(1),
            NavCommand::FramePrev => self.frame_counter = self.frame_counter.saturating_sub(1),
            NavCommand::Exit => return Transition::Exit,
        }
        log::debug!(
            "{command:?} → axe {}, compteur {}",
            self.axis(),
            self.frame_counter
        );
        Transition::Continue
    }

    /// Frame counter reduced against the current axis extent.
    #[must_use]
    pub fn effective_index(&self, grid: &FrameGrid) -> usize {
        let extent = grid.extent(self.axis()).max(1) as u64;
        (self.frame_counter % extent) as usize
    }

    /// Frame to display for the current state.
    ///
    /// # Errors
    /// Only fails if the slicer does, which the modulo reduction rules out.
    pub fn view(&self, grid: &FrameGrid) -> Result<FrameView, CoreError> {
        FrameView::new(grid, self.axis(), self.effective_index(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(dx: usize, dy: usize, dz: usize) -> FrameGrid {
        FrameGrid::new(dx, dy, dz).unwrap()
    }

    #[test]
    fn starts_on_x_frame_zero() {
        let nav = Navigator::new();
        assert_eq!(nav.axis(), Axis::X);
        assert_eq!(nav.frame_counter(), 0);
    }

    #[test]
    fn three_axis_steps_return_to_x() {
        let mut nav = Navigator::new();
        for _ in 0..3 {
            assert_eq!(nav.apply(NavCommand::AxisNext), Transition::Continue);
        }
        assert_eq!(nav.axis(), Axis::X);
    }

    #[test]
    fn decrements_clamp_at_zero() {
        let mut nav = Navigator::new();
        for _ in 0..10 {
            nav.apply(NavCommand::FramePrev);
            nav.apply(NavCommand::AxisPrev);
        }
        assert_eq!(nav.frame_counter(), 0);
        assert_eq!(nav.axis_counter(), 0);
        assert_eq!(nav.axis(), Axis::X);
    }

    #[test]
    fn axis_prev_does_not_wrap_to_z() {
        let mut nav = Navigator::new();
        nav.apply(NavCommand::AxisNext);
        nav.apply(NavCommand::AxisPrev);
        nav.apply(NavCommand::AxisPrev);
        assert_eq!(nav.axis(), Axis::X);
    }

    #[test]
    fn effective_index_wraps_per_axis() {
        let g = grid(2, 3, 5);
        let mut nav = Navigator::new();
        for _ in 0..4 {
            nav.apply(NavCommand::FrameNext);
        }
        assert_eq!(nav.effective_index(&g), 0); // 4 mod 2
        nav.apply(NavCommand::AxisNext);
        assert_eq!(nav.effective_index(&g), 1); // 4 mod 3
        nav.apply(NavCommand::AxisNext);
        assert_eq!(nav.effective_index(&g), 4); // 4 mod 5
    }

    #[test]
    fn every_reachable_state_slices() {
        let g = grid(2, 3, 4);
        let mut nav = Navigator::new();
        let script = [
            NavCommand::FramePrev,
            NavCommand::FrameNext,
            NavCommand::AxisNext,
            NavCommand::FrameNext,
            NavCommand::FrameNext,
            NavCommand::AxisNext,
            NavCommand::FrameNext,
            NavCommand::AxisPrev,
            NavCommand::AxisPrev,
            NavCommand::AxisPrev,
        ];
        for command in script {
            nav.apply(command);
            let view = nav.view(&g).unwrap();
            assert!(view.index < view.extent);
        }
    }

    #[test]
    fn exit_leaves_state_unchanged() {
        let mut nav = Navigator::new();
        nav.apply(NavCommand::FrameNext);
        let before = nav.clone();
        assert_eq!(nav.apply(NavCommand::Exit), Transition::Exit);
        assert_eq!(nav, before);
    }
}
