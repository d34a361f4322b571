//! Interactive navigation and sequential playback over a loaded movie.

use std::time::Duration;

use anyhow::Result;

use crate::axis::Axis;
use crate::movie::Movie;
use crate::navigator::{Navigator, Transition};
use crate::slice::FrameView;
use crate::traits::{InputSource, PaintStyle, Renderer};

/// Run an interactive session until the exit command.
///
/// The initial state is painted before the first input is read, and every
/// input (mapped or not) is followed by a repaint. Returns the final state.
///
/// # Errors
/// Propagates renderer and input failures.
pub fn navigate<R, I>(
    movie: &Movie,
    renderer: &mut R,
    input: &mut I,
    style: &PaintStyle,
) -> Result<Navigator>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    let mut nav = Navigator::new();
    loop {
        let view = nav.view(&movie.grid)?;
        renderer.paint(&view, style)?;

        if let Some(command) = input.next_command()?
            && nav.apply(command) == Transition::Exit
        {
            break;
        }
    }
    log::info!(
        "Navigation terminée sur l'axe {} (compteur {})",
        nav.axis(),
        nav.frame_counter()
    );
    Ok(nav)
}

/// Paint every frame along `axis` once, in order, calling `wait` with the
/// movie's playback delay after each frame. No looping, no cancellation.
///
/// # Errors
/// Propagates renderer failures.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use vr_core::{session, Axis, FrameView, Movie, MovieInfo, PaintStyle, Renderer};
///
/// struct Indices(Vec<usize>);
/// impl Renderer for Indices {
///     fn paint(&mut self, view: &FrameView, _style: &PaintStyle) -> anyhow::Result<()> {
///         self.0.push(view.index);
///         Ok(())
///     }
/// }
///
/// let movie = Movie::blank(MovieInfo::default(), 3).unwrap();
/// let mut renderer = Indices(Vec::new());
/// let mut waited = Duration::ZERO;
/// session::play(&movie, Axis::Z, &mut renderer, &PaintStyle::default(), |d| waited += d).unwrap();
/// assert_eq!(renderer.0, vec![0, 1, 2]);
/// assert_eq!(waited, Duration::from_secs(3));
/// ```
pub fn play<R, W>(
    movie: &Movie,
    axis: Axis,
    renderer: &mut R,
    style: &PaintStyle,
    mut wait: W,
) -> Result<()>
where
    R: Renderer + ?Sized,
    W: FnMut(Duration),
{
    let delay = Duration::from_secs(u64::from(movie.info.play_back_speed));
    let extent = movie.grid.extent(axis);
    log::info!("Lecture sur l'axe {axis} : {extent} frames, {delay:?} entre chaque");

    for index in 0..extent {
        let view = FrameView::new(&movie.grid, axis, index)?;
        renderer.paint(&view, style)?;
        log::debug!("Frame {index}/{extent} affichée");
        wait(delay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::grid::FrameGrid;
    use crate::movie::MovieInfo;
    use crate::navigator::NavCommand;

    #[derive(Default)]
    struct RecordingRenderer {
        painted: Vec<(Axis, usize)>,
    }

    impl Renderer for RecordingRenderer {
        fn paint(&mut self, view: &FrameView, _style: &PaintStyle) -> Result<()> {
            self.painted.push((view.axis, view.index));
            Ok(())
        }
    }

    struct ScriptedInput(VecDeque<Option<NavCommand>>);

    impl InputSource for ScriptedInput {
        fn next_command(&mut self) -> Result<Option<NavCommand>> {
            self.0
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script épuisé"))
        }
    }

    fn movie(dx: usize, dy: usize, dz: usize) -> Movie {
        Movie {
            info: MovieInfo {
                x: dx,
                y: dy,
                play_back_speed: 2,
                filename: "test".into(),
            },
            grid: FrameGrid::new(dx, dy, dz).unwrap(),
        }
    }

    #[test]
    fn navigate_paints_initial_state_and_each_step() {
        let movie = movie(2, 3, 4);
        let mut renderer = RecordingRenderer::default();
        let mut input = ScriptedInput(VecDeque::from([
            Some(NavCommand::FrameNext),
            Some(NavCommand::FrameNext),
            Some(NavCommand::AxisNext),
            None,
            Some(NavCommand::Exit),
        ]));

        let nav = navigate(&movie, &mut renderer, &mut input, &PaintStyle::default()).unwrap();

        assert_eq!(
            renderer.painted,
            vec![
                (Axis::X, 0),
                (Axis::X, 1),
                (Axis::X, 0), // 2 mod 2
                (Axis::Y, 2), // 2 mod 3
                (Axis::Y, 2),
            ]
        );
        assert_eq!(nav.axis(), Axis::Y);
        assert_eq!(nav.frame_counter(), 2);
    }

    #[test]
    fn navigate_propagates_input_failure() {
        let movie = movie(1, 1, 1);
        let mut renderer = RecordingRenderer::default();
        let mut input = ScriptedInput(VecDeque::new());
        assert!(navigate(&movie, &mut renderer, &mut input, &PaintStyle::default()).is_err());
        assert_eq!(renderer.painted.len(), 1);
    }

    #[test]
    fn play_walks_axis_once_with_delay() {
        let movie = movie(2, 3, 4);
        let mut renderer = RecordingRenderer::default();
        let mut delays = Vec::new();

        play(&movie, Axis::Y, &mut renderer, &PaintStyle::default(), |d| {
            delays.push(d);
        })
        .unwrap();

        assert_eq!(
            renderer.painted,
            vec![(Axis::Y, 0), (Axis::Y, 1), (Axis::Y, 2)]
        );
        assert_eq!(delays, vec![Duration::from_secs(2); 3]);
    }

    #[test]
    fn zero_speed_plays_without_delay() {
        let mut movie = movie(1, 1, 2);
        movie.info.play_back_speed = 0;
        let mut renderer = RecordingRenderer::default();
        let mut delays = Vec::new();

        play(&movie, Axis::Z, &mut renderer, &PaintStyle::default(), |d| {
            delays.push(d);
        })
        .unwrap();

        assert_eq!(renderer.painted.len(), 2);
        assert_eq!(delays, vec![Duration::ZERO; 2]);
    }
}
