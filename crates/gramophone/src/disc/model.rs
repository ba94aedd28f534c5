use super::geometry::{Axis, CropRect, Layout, SizeConstraint};
use super::{
    DEFAULT_PICTURE_RADIUS, DEFAULT_ROTATE_SPEED, FULL_TURN, MAX_PICTURE_RADIUS, NEEDLE_STEP,
    PAUSE_DEGREE, PLAY_DEGREE, view,
};
use crate::error::GramophoneError;
use crate::picture::PictureSource;
use crate::theme::Colors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameAction {
    pub should_redraw: bool,
}

impl FrameAction {
    pub fn new(should_redraw: bool) -> Self {
        Self { should_redraw }
    }
}

/// Angular counters of the disc and the tonearm.
#[derive(Debug, Clone, PartialEq)]
pub struct Turntable {
    disc_angle: f32,
    needle_angle: i32,
    playing: bool,
}

impl Default for Turntable {
    fn default() -> Self {
        Self {
            disc_angle: 0.0,
            needle_angle: PAUSE_DEGREE,
            playing: false,
        }
    }
}

impl Turntable {
    pub fn disc_angle(&self) -> f32 {
        self.disc_angle
    }

    pub fn needle_angle(&self) -> i32 {
        self.needle_angle
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) -> FrameAction {
        self.playing = playing;
        FrameAction::new(true)
    }

    /// Advances one frame. Another frame is wanted for as long as the needle
    /// is off its paused rest pose.
    pub fn advance(&mut self, rotate_speed: f32) -> FrameAction {
        self.disc_angle = self.disc_angle % FULL_TURN + rotate_speed;
        self.step_needle();
        FrameAction::new(self.needle_angle > PAUSE_DEGREE)
    }

    fn step_needle(&mut self) {
        let before = self.needle_angle;
        if self.playing {
            if self.needle_angle < PLAY_DEGREE {
                self.needle_angle += NEEDLE_STEP;
            }
        } else if self.needle_angle > PAUSE_DEGREE {
            self.needle_angle -= NEEDLE_STEP;
        }

        if before != self.needle_angle
            && (self.needle_angle == PLAY_DEGREE || self.needle_angle == PAUSE_DEGREE)
        {
            log::debug!("Needle settled at {} degrees", self.needle_angle);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub picture_radius: i32,
    pub rotate_speed: f32,
    pub picture: PictureSource,
    pub colors: Colors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            picture_radius: DEFAULT_PICTURE_RADIUS,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            picture: PictureSource::Default,
            colors: Colors::default(),
        }
    }
}

/// The record player widget: a spinning picture inside a black ring, and a
/// tonearm that swings onto the record while playing.
///
/// Geometry and the crop region are fixed at construction. The radius and
/// picture setters only replace the value they name; see [`Layout`].
pub struct Gramophone {
    picture_radius: i32,
    rotate_speed: f32,
    layout: Layout,
    picture: Pixbuf,
    crop: CropRect,
    colors: Colors,
    turntable: Turntable,
}

impl Gramophone {
    pub fn new(settings: Settings) -> Result<Self, GramophoneError> {
        let radius = Self::check_radius(settings.picture_radius)?;
        let picture = settings.picture.load(radius)?;
        Self::with_picture(settings, picture)
    }

    /// Builds the widget around an already decoded picture, ignoring
    /// `settings.picture`.
    pub fn with_picture(settings: Settings, picture: Pixbuf) -> Result<Self, GramophoneError> {
        let radius = Self::check_radius(settings.picture_radius)?;
        let crop = CropRect::centered(picture.width(), picture.height(), radius);
        Ok(Self {
            picture_radius: radius,
            rotate_speed: settings.rotate_speed,
            layout: Layout::new(radius),
            picture,
            crop,
            colors: settings.colors,
            turntable: Turntable::default(),
        })
    }

    fn check_radius(picture_radius: i32) -> Result<i32, GramophoneError> {
        if (1..=MAX_PICTURE_RADIUS).contains(&picture_radius) {
            Ok(picture_radius)
        } else {
            Err(GramophoneError::InvalidRadius(picture_radius))
        }
    }

    pub fn set_playing(&mut self, playing: bool) -> FrameAction {
        self.turntable.set_playing(playing)
    }

    pub fn is_playing(&self) -> bool {
        self.turntable.is_playing()
    }

    pub fn picture_radius(&self) -> i32 {
        self.picture_radius
    }

    /// Out-of-range values are clamped into `1..=MAX_PICTURE_RADIUS`.
    pub fn set_picture_radius(&mut self, picture_radius: i32) {
        let clamped = picture_radius.clamp(1, MAX_PICTURE_RADIUS);
        if clamped != picture_radius {
            log::warn!("Picture radius {} clamped to {}", picture_radius, clamped);
        }
        self.picture_radius = clamped;
    }

    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    pub fn set_rotate_speed(&mut self, rotate_speed: f32) {
        self.rotate_speed = rotate_speed;
    }

    /// Decodes and swaps the picture. The crop region computed at
    /// construction is kept, so a regenerated default picture is sized from
    /// the construction radius as well.
    pub fn set_picture(&mut self, source: &PictureSource) -> Result<(), GramophoneError> {
        self.picture = source.load(self.layout.picture_radius)?;
        log::debug!(
            "Picture replaced with {} ({}x{})",
            source,
            self.picture.width(),
            self.picture.height()
        );
        Ok(())
    }

    pub fn disc_angle(&self) -> f32 {
        self.turntable.disc_angle()
    }

    pub fn needle_angle(&self) -> i32 {
        self.turntable.needle_angle()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn crop_rect(&self) -> CropRect {
        self.crop
    }

    pub fn picture(&self) -> &Pixbuf {
        &self.picture
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    pub fn measure(&self, axis: Axis, constraint: SizeConstraint) -> i32 {
        self.layout.measure(self.picture_radius, axis, constraint)
    }

    pub fn advance(&mut self) -> FrameAction {
        self.turntable.advance(self.rotate_speed)
    }

    /// Advances one frame and paints it onto `cr`, centred horizontally in a
    /// surface `width` pixels wide.
    pub fn render(&mut self, cr: &Context, width: i32) -> Result<FrameAction, GramophoneError> {
        let action = self.advance();
        view::draw(cr, self, width)?;
        Ok(action)
    }
}
