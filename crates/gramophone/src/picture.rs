use crate::error::GramophoneError;
use derive_more::{AsRef, Deref, Display, From, Into};
use gdk_pixbuf::{Colorspace, Pixbuf};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const RESOURCE_PREFIX: &str = "resource:";
const VINYL_FILL: u32 = 0x1E1E1EFF;
const LABEL_FILL: u32 = 0xB03A2EFF;

/// A GResource path such as `/org/gramophone/player/cover.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct ResourcePath(String);

crate::impl_string_newtype!(ResourcePath);

/// Where the picture in the middle of the disc comes from.
///
/// Parses from `default` (or an empty string), `resource:/some/path`, or a
/// plain filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PictureSource {
    #[default]
    Default,
    File(PathBuf),
    Resource(ResourcePath),
}

impl PictureSource {
    /// Decodes the picture. The built-in default is sized to the diameter of
    /// `picture_radius` so it always covers the crop region.
    pub fn load(&self, picture_radius: i32) -> Result<Pixbuf, GramophoneError> {
        match self {
            Self::Default => default_picture(picture_radius),
            Self::File(path) => Ok(Pixbuf::from_file(path)?),
            Self::Resource(path) => Ok(Pixbuf::from_resource(path)?),
        }
    }
}

impl FromStr for PictureSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s.eq_ignore_ascii_case("default") {
            Self::Default
        } else if let Some(path) = s.strip_prefix(RESOURCE_PREFIX) {
            Self::Resource(ResourcePath::new(path))
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for PictureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Resource(path) => write!(f, "{RESOURCE_PREFIX}{path}"),
        }
    }
}

/// Dark vinyl square with a coloured label in the middle.
fn default_picture(picture_radius: i32) -> Result<Pixbuf, GramophoneError> {
    let side = (picture_radius * 2).max(1);
    let pixbuf = Pixbuf::new(Colorspace::Rgb, true, 8, side, side)
        .ok_or(GramophoneError::PictureAlloc { side })?;
    pixbuf.fill(VINYL_FILL);

    let label = side / 3;
    if label > 0 {
        let offset = (side - label) / 2;
        pixbuf
            .new_subpixbuf(offset, offset, label, label)
            .fill(LABEL_FILL);
    }
    Ok(pixbuf)
}
