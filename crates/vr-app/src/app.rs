use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use vr_core::config::ViewerConfig;
use vr_core::{Axis, Movie, MovieInfo, session};
use vr_render::TerminalRenderer;
use vr_render::ui::ViewMode;

use crate::input::CrosstermInput;

/// Terminal session kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Interactive scrubbing.
    Navigate,
    /// Sequential playback along one axis.
    Play(Axis),
}

/// A loaded movie and the settings to show it with.
pub struct App {
    /// Movie exclusively owned by this session.
    pub movie: Movie,
    /// Configuration résolue (fichier + overrides CLI).
    pub config: ViewerConfig,
}

impl App {
    /// Load the movie. Fails before any terminal state is touched.
    ///
    /// # Errors
    /// Returns the load error (`FileNotFound`, `Decode`, `Io`) with the path as context.
    pub fn load(path: &Path, config: ViewerConfig) -> Result<Self> {
        let movie =
            Movie::load(path).with_context(|| format!("Chargement de {} impossible", path.display()))?;
        Ok(Self { movie, config })
    }

    /// Re-encode the movie to `out`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export(&self, out: &Path) -> Result<()> {
        self.movie
            .export_to(out)
            .with_context(|| format!("Export vers {} impossible", out.display()))
    }

    /// Run an interactive or playback session on `terminal`.
    ///
    /// # Errors
    /// Propagates terminal drawing and input failures.
    pub fn run(&self, terminal: DefaultTerminal, action: &Action) -> Result<()> {
        let style = self.config.paint_style();
        let title = self.movie.info.filename.clone();

        match action {
            Action::Navigate => {
                let mut renderer = TerminalRenderer::new(terminal, ViewMode::Navigate, title);
                let mut input = CrosstermInput;
                session::navigate(&self.movie, &mut renderer, &mut input, &style)?;
            }
            Action::Play(axis) => {
                let mut renderer = TerminalRenderer::new(terminal, ViewMode::Playback, title);
                session::play(&self.movie, *axis, &mut renderer, &style, std::thread::sleep)?;
            }
        }
        Ok(())
    }
}

/// Create a zero-filled movie from the configured defaults and write it.
///
/// `name` replaces the configured filename; the file lands at `out`, or at
/// the movie's own filename.
///
/// # Errors
/// Returns an error if the depth is zero or the file cannot be written.
pub fn create_blank(
    config: &ViewerConfig,
    name: Option<&Path>,
    depth: usize,
    out: Option<&Path>,
) -> Result<PathBuf> {
    let mut info: MovieInfo = config.movie.clone();
    if let Some(name) = name {
        info.filename = name.display().to_string();
    }
    let movie = Movie::blank(info, depth)?;
    let target = out.map_or_else(|| PathBuf::from(&movie.info.filename), Path::to_path_buf);
    movie
        .export_to(&target)
        .with_context(|| format!("Création de {} impossible", target.display()))?;
    log::info!("Film vide {:?} créé : {}", movie.grid.dims(), target.display());
    Ok(target)
}
