use crate::disc::CropRect;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GramophoneError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("Failed to load picture: {0}")]
    Picture(#[from] glib::Error),
    #[error("Picture radius {0} is outside 1..={max}", max = crate::disc::MAX_PICTURE_RADIUS)]
    InvalidRadius(i32),
    #[error("Failed to allocate a {side}x{side} default picture")]
    PictureAlloc { side: i32 },
    #[error("Crop region {crop} lies outside the {width}x{height} picture")]
    CropOutOfBounds {
        crop: CropRect,
        width: i32,
        height: i32,
    },
}
