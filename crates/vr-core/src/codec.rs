//! JSON wire format for movies.
//!
//! On disk a movie is a pretty-printed document with an `info` record and a
//! triple-nested `frames` array (x-major, then y, z innermost). The nested
//! shape never leaves this module: [`decode`] turns it into a dense
//! [`FrameGrid`] and [`encode`] rebuilds it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::grid::FrameGrid;
use crate::movie::{Movie, MovieInfo};

/// Document as stored on disk. Field order is the on-disk order.
#[derive(Deserialize, Serialize)]
struct WireMovie {
    info: MovieInfo,
    frames: Vec<Vec<Vec<u8>>>,
}

/// Parse a movie document.
///
/// `dimZ` is taken from the first innermost sequence; every other innermost
/// sequence must have the same length.
///
/// # Errors
/// Returns `CoreError::Decode` if the bytes are not valid JSON, a field is
/// missing, a value is not a color code in `0..=255`, or the `frames` shape
/// disagrees with `info.x`, `info.y` or itself.
///
/// # Example
/// ```
/// use vr_core::{codec, Axis};
/// let doc = br#"{"info":{"x":1,"y":2,"playBackSpeed":1,"filename":"m"},"frames":[[[1,2],[3,4]]]}"#;
/// let movie = codec::decode(doc).unwrap();
/// assert_eq!(movie.grid.extent(Axis::Z), 2);
/// assert_eq!(movie.grid.get(0, 1, 1), Some(4));
/// ```
pub fn decode(bytes: &[u8]) -> Result<Movie, CoreError> {
    let wire: WireMovie =
        serde_json::from_slice(bytes).map_err(|e| CoreError::Decode(e.to_string()))?;
    let WireMovie { info, frames } = wire;

    if frames.len() != info.x {
        return Err(CoreError::Decode(format!(
            "frames contient {} plans x, info.x annonce {}",
            frames.len(),
            info.x
        )));
    }
    let dim_z = frames
        .first()
        .and_then(|plane| plane.first())
        .map(Vec::len)
        .ok_or_else(|| CoreError::Decode("frames est vide".into()))?;

    let mut grid = FrameGrid::new(info.x, info.y, dim_z)
        .map_err(|e| CoreError::Decode(e.to_string()))?;

    for (x, plane) in frames.iter().enumerate() {
        if plane.len() != info.y {
            return Err(CoreError::Decode(format!(
                "frames[{x}] contient {} colonnes, info.y annonce {}",
                plane.len(),
                info.y
            )));
        }
        for (y, column) in plane.iter().enumerate() {
            if column.len() != dim_z {
                return Err(CoreError::Decode(format!(
                    "frames[{x}][{y}] contient {} valeurs, {dim_z} attendues",
                    column.len()
                )));
            }
            for (z, &code) in column.iter().enumerate() {
                grid.set(x, y, z, code);
            }
        }
    }

    log::debug!(
        "Film décodé : {}×{}×{dim_z} ({})",
        info.x,
        info.y,
        info.filename
    );
    Ok(Movie { info, grid })
}

/// Serialize a movie to its pretty-printed document, newline-terminated.
///
/// `info.x` and `info.y` must agree with the grid, otherwise the document
/// could not be decoded back.
///
/// # Errors
/// Returns `CoreError::InvalidDimensions` if the declared extents differ
/// from the grid's, or `CoreError::Encode` if serde_json fails.
pub fn encode(movie: &Movie) -> Result<Vec<u8>, CoreError> {
    let [dim_x, dim_y, dim_z] = movie.grid.dims();
    if movie.info.x != dim_x || movie.info.y != dim_y {
        return Err(CoreError::InvalidDimensions {
            x: movie.info.x,
            y: movie.info.y,
            z: dim_z,
        });
    }
    let cells = movie.grid.cells();
    let frames: Vec<Vec<Vec<u8>>> = (0..dim_x)
        .map(|x| {
            (0..dim_y)
                .map(|y| {
                    let start = (x * dim_y + y) * dim_z;
                    cells[start..start + dim_z].to_vec()
                })
                .collect()
        })
        .collect();

    let wire = WireMovie {
        info: movie.info.clone(),
        frames,
    };
    let mut bytes =
        serde_json::to_vec_pretty(&wire).map_err(|e| CoreError::Encode(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}
