use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::CoreError;
use crate::grid::FrameGrid;

/// Metadata stored alongside the frames.
///
/// Only x and y are declared; the z extent comes from the data.
///
/// # Example
/// ```
/// use vr_core::MovieInfo;
/// let info = MovieInfo::default();
/// assert_eq!(info.filename, "movie1");
/// assert_eq!((info.x, info.y), (4, 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovieInfo {
    /// Declared extent along x.
    pub x: usize,
    /// Declared extent along y.
    pub y: usize,
    /// Seconds between frames during playback. 0 plays without delay.
    #[serde(rename = "playBackSpeed")]
    pub play_back_speed: u32,
    /// Source name, also the default export path.
    pub filename: String,
}

impl Default for MovieInfo {
    fn default() -> Self {
        Self {
            x: 4,
            y: 4,
            play_back_speed: 1,
            filename: "movie1".into(),
        }
    }
}

/// A frame grid and its metadata, loaded and exported as a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    /// Metadata.
    pub info: MovieInfo,
    /// Color codes, `info.x × info.y × depth`.
    pub grid: FrameGrid,
}

impl Movie {
    /// Load and decode a movie file.
    ///
    /// The whole file is read, whatever its size.
    ///
    /// # Errors
    /// `CoreError::FileNotFound` if `path` does not exist, `CoreError::Io` if
    /// it cannot be read, `CoreError::Decode` if its content is malformed.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let bytes = std::fs::read(path).map_err(|source| {
            let path = path.display().to_string();
            if source.kind() == ErrorKind::NotFound {
                CoreError::FileNotFound { path }
            } else {
                CoreError::Io { path, source }
            }
        })?;
        let movie = codec::decode(&bytes)?;
        log::info!(
            "Film chargé depuis {} ({} octets, {:?})",
            path.display(),
            bytes.len(),
            movie.grid.dims()
        );
        Ok(movie)
    }

    /// Zero-filled movie of `info.x × info.y × depth`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if any extent is zero.
    ///
    /// # Example
    /// ```
    /// use vr_core::{Axis, Movie, MovieInfo};
    /// let movie = Movie::blank(MovieInfo::default(), 3).unwrap();
    /// assert_eq!(movie.grid.dims(), [4, 4, 3]);
    /// assert!(Movie::blank(MovieInfo::default(), 0).is_err());
    /// ```
    pub fn blank(info: MovieInfo, depth: usize) -> Result<Self, CoreError> {
        let grid = FrameGrid::new(info.x, info.y, depth)?;
        Ok(Self { info, grid })
    }

    /// Write the movie to `info.filename`.
    ///
    /// # Errors
    /// See [`Movie::export_to`].
    pub fn export(&self) -> Result<(), CoreError> {
        self.export_to(Path::new(&self.info.filename))
    }

    /// Write the movie to `path`, replacing any previous content.
    ///
    /// # Errors
    /// Returns `CoreError::Io` if the file cannot be written.
    pub fn export_to(&self, path: &Path) -> Result<(), CoreError> {
        let bytes = codec::encode(self)?;
        std::fs::write(path, &bytes).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Film exporté vers {} ({} octets)", path.display(), bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        let info = MovieInfo {
            x: 2,
            y: 1,
            play_back_speed: 3,
            filename: "sample".into(),
        };
        let grid = FrameGrid::from_cells([2, 1, 3], vec![0, 1, 2, 13, 14, 15]).unwrap();
        Movie { info, grid }
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let err = Movie::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }

    #[test]
    fn load_unreadable_path_is_io_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Movie::load(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }), "{err:?}");
    }

    #[test]
    fn export_refuses_inconsistent_movie() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut movie = sample();
        movie.info.x = 5;
        assert!(matches!(
            movie.export_to(&path),
            Err(CoreError::InvalidDimensions { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn export_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.json");
        let movie = sample();
        movie.export_to(&path).unwrap();
        assert_eq!(Movie::load(&path).unwrap(), movie);
    }

    #[test]
    fn export_truncates_longer_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.json");
        std::fs::write(&path, vec![b' '; 64 * 1024]).unwrap();
        let movie = sample();
        movie.export_to(&path).unwrap();
        assert_eq!(Movie::load(&path).unwrap(), movie);
    }

    #[test]
    fn export_uses_info_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut movie = sample();
        movie.info.filename = dir.path().join("named").display().to_string();
        movie.export().unwrap();
        assert!(dir.path().join("named").exists());
    }

    #[test]
    fn load_reads_files_past_legacy_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        let info = MovieInfo {
            x: 40,
            y: 40,
            play_back_speed: 1,
            filename: "big".into(),
        };
        let movie = Movie::blank(info, 40).unwrap();
        movie.export_to(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 111_000);
        assert_eq!(Movie::load(&path).unwrap().grid.dims(), [40, 40, 40]);
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage");
        std::fs::write(&path, b"not a movie").unwrap();
        assert!(matches!(Movie::load(&path), Err(CoreError::Decode(_))));
    }
}
