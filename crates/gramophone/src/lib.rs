pub mod disc;
pub mod error;
pub mod macros;
pub mod picture;
pub mod theme;

pub use disc::{Axis, CropRect, FrameAction, Gramophone, Layout, Settings, SizeConstraint};
pub use error::GramophoneError;
pub use picture::{PictureSource, ResourcePath};
pub use theme::Colors;
