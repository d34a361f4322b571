use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::movie::MovieInfo;
use crate::traits::PaintStyle;

/// Viewer configuration, built once at startup and passed down explicitly.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use vr_core::config::ViewerConfig;
/// let config = ViewerConfig::default();
/// assert_eq!(config.cell_width, 4);
/// assert_eq!(config.movie.filename, "movie1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewerConfig {
    // === Rendu ===
    /// Colonnes terminal par cellule de la grille.
    pub cell_width: u16,
    /// Lignes terminal par cellule de la grille.
    pub cell_height: u16,
    /// Mode debug : le code 0 est peint avec `empty_color`.
    pub debug: bool,
    /// Code couleur des cellules vides en mode debug.
    pub empty_color: u8,

    // === Nouveau film ===
    /// Metadata for movies created from scratch, and the default load path.
    pub movie: MovieInfo,
    /// Z extent of movies created from scratch.
    pub depth: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cell_width: 4,
            cell_height: 3,
            debug: false,
            empty_color: 9,
            movie: MovieInfo::default(),
            depth: 4,
        }
    }
}

impl ViewerConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and after CLI overrides.
    pub fn clamp_all(&mut self) {
        self.cell_width = self.cell_width.clamp(1, 16);
        self.cell_height = self.cell_height.clamp(1, 16);
        self.movie.x = self.movie.x.max(1);
        self.movie.y = self.movie.y.max(1);
        self.movie.play_back_speed = self.movie.play_back_speed.max(1);
        self.depth = self.depth.max(1);
    }

    /// Paint settings handed to the renderer.
    #[must_use]
    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            debug: self.debug,
            empty_color: self.empty_color,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    movie: Option<MovieSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    cell_width: Option<u16>,
    cell_height: Option<u16>,
    debug: Option<bool>,
    empty_color: Option<u8>,
}

/// Movie defaults section, all fields optional.
#[derive(Deserialize)]
struct MovieSection {
    filename: Option<String>,
    x: Option<usize>,
    y: Option<usize>,
    play_back_speed: Option<u32>,
    depth: Option<usize>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use vr_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

fn parse_config(content: &str) -> Result<ViewerConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = ViewerConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.cell_width {
            config.cell_width = v;
        }
        if let Some(v) = r.cell_height {
            config.cell_height = v;
        }
        if let Some(v) = r.debug {
            config.debug = v;
        }
        if let Some(v) = r.empty_color {
            config.empty_color = v;
        }
    }

    if let Some(m) = file.movie {
        if let Some(v) = m.filename {
            config.movie.filename = v;
        }
        if let Some(v) = m.x {
            config.movie.x = v;
        }
        if let Some(v) = m.y {
            config.movie.y = v;
        }
        if let Some(v) = m.play_back_speed {
            config.movie.play_back_speed = v;
        }
        if let Some(v) = m.depth {
            config.depth = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn partial_sections_override_defaults() {
        let config = parse_config(
            r#"
            [render]
            cell_width = 2
            debug = true

            [movie]
            filename = "demo"
            depth = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.cell_width, 2);
        assert_eq!(config.cell_height, 3);
        assert!(config.debug);
        assert_eq!(config.movie.filename, "demo");
        assert_eq!(config.movie.x, 4);
        assert_eq!(config.depth, 8);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            r#"
            [render]
            cell_width = 0
            cell_height = 99

            [movie]
            x = 0
            depth = 0
            play_back_speed = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.movie.play_back_speed, 1);
        assert_eq!(config.cell_width, 1);
        assert_eq!(config.cell_height, 16);
        assert_eq!(config.movie.x, 1);
        assert_eq!(config.depth, 1);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[render\ncell_width = ").is_err());
        assert!(parse_config("[render]\ncell_width = \"wide\"").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.toml");
        std::fs::write(&path, "[render]\nempty_color = 12\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.paint_style().empty_color, 12);
        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }
}
