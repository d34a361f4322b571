use std::path::PathBuf;

use clap::Parser;
use vr_core::Axis;

/// voxreel — Terminal viewer for volumetric movies.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier film à ouvrir. Défaut : `[movie].filename` de la config.
    pub file: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Lecture séquentielle le long d'un axe (x, y, z) au lieu de la navigation.
    #[arg(long, value_parser = parse_axis, conflicts_with_all = ["export", "new"])]
    pub play: Option<Axis>,

    /// Réencoder le film chargé sans ouvrir l'interface.
    #[arg(long, default_value_t = false, conflicts_with = "new")]
    pub export: bool,

    /// Destination de --export / --new. Défaut : `info.filename`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Créer un film vide de cette profondeur (z) à partir de la config.
    #[arg(long)]
    pub new: Option<usize>,

    /// Colonnes terminal par cellule.
    #[arg(long)]
    pub cell_width: Option<u16>,

    /// Lignes terminal par cellule.
    #[arg(long)]
    pub cell_height: Option<u16>,

    /// Rendre visibles les cellules vides (code 0).
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_axis(s: &str) -> Result<Axis, String> {
    s.parse::<Axis>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_navigation() {
        let cli = Cli::try_parse_from(["voxreel"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.play.is_none());
        assert!(!cli.export);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn play_parses_axis() {
        let cli = Cli::try_parse_from(["voxreel", "movie1", "--play", "Z"]).unwrap();
        assert_eq!(cli.play, Some(Axis::Z));
        assert_eq!(cli.file, Some(PathBuf::from("movie1")));
        assert!(Cli::try_parse_from(["voxreel", "--play", "w"]).is_err());
    }

    #[test]
    fn modes_are_exclusive() {
        assert!(Cli::try_parse_from(["voxreel", "--play", "x", "--export"]).is_err());
        assert!(Cli::try_parse_from(["voxreel", "--export", "--new", "3"]).is_err());
        assert!(Cli::try_parse_from(["voxreel", "--export", "--out", "copy"]).is_ok());
    }
}
