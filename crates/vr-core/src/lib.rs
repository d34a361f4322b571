/// Data model, codec, and navigation logic for voxreel.
///
/// This crate contains the volumetric frame grid, its JSON wire format,
/// axis slicing, and the navigator state machine. Nothing here touches
/// the terminal: rendering and input are reached through the traits in
/// [`traits`].

pub mod axis;
pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod movie;
pub mod navigator;
pub mod session;
pub mod slice;
pub mod traits;

pub use axis::Axis;
pub use config::ViewerConfig;
pub use error::CoreError;
pub use grid::FrameGrid;
pub use movie::{Movie, MovieInfo};
pub use navigator::{NavCommand, Navigator, Transition};
pub use slice::{FrameSlice, FrameView};
pub use traits::{InputSource, PaintStyle, Renderer};
