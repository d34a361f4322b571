use thiserror::Error;

use crate::axis::Axis;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Bytes are not a well-formed movie document.
    #[error("Film illisible : {0}")]
    Decode(String),

    /// A movie could not be serialized.
    #[error("Encodage du film impossible : {0}")]
    Encode(String),

    /// A grid extent is zero, or declared extents disagree with the grid.
    #[error("Dimensions invalides : {x}×{y}×{z}")]
    InvalidDimensions {
        /// Extent along x.
        x: usize,
        /// Extent along y.
        y: usize,
        /// Extent along z.
        z: usize,
    },

    /// Slice index past the extent of its axis.
    #[error("Index {index} hors limites sur l'axe {axis} (étendue {extent})")]
    IndexOutOfRange {
        /// Axis being sliced.
        axis: Axis,
        /// Requested index.
        index: usize,
        /// Extent of `axis`.
        extent: usize,
    },

    /// Read or write failure on an existing path.
    #[error("Erreur d'E/S sur {path} : {source}")]
    Io {
        /// Path involved.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
