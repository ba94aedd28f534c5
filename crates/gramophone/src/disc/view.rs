use super::model::Gramophone;
use super::{ARM_BEND_DEGREE, ARM_STROKE, LONG_HEAD_STROKE, SHORT_HEAD_STROKE};
use crate::error::GramophoneError;
use cairo::Context;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct DiscRenderer<'a> {
    gramophone: &'a Gramophone,
    center_x: f64,
}

impl<'a> DiscRenderer<'a> {
    fn new(gramophone: &'a Gramophone, center_x: f64) -> Self {
        Self {
            gramophone,
            center_x,
        }
    }

    fn draw(&self, cr: &Context) -> Result<(), GramophoneError> {
        let layout = self.gramophone.layout();
        let radius = self.gramophone.picture_radius();

        cr.save()?;
        cr.translate(
            self.center_x,
            f64::from(radius + layout.ring_width + layout.long_arm),
        );
        cr.rotate(f64::from(self.gramophone.disc_angle()).to_radians());
        let drawn = self.draw_ring(cr).and_then(|()| self.draw_picture(cr));
        cr.restore()?;
        drawn
    }

    fn draw_ring(&self, cr: &Context) -> Result<(), GramophoneError> {
        let ring_width = self.gramophone.layout().ring_width;
        set_color(cr, self.gramophone.colors().ring);
        cr.set_line_width(f64::from(ring_width));
        cr.arc(
            0.0,
            0.0,
            f64::from(self.gramophone.picture_radius() + ring_width / 2),
            0.0,
            2.0 * PI,
        );
        Ok(cr.stroke()?)
    }

    fn draw_picture(&self, cr: &Context) -> Result<(), GramophoneError> {
        let picture = self.gramophone.picture();
        let crop = self.gramophone.crop_rect();
        let (width, height) = (picture.width(), picture.height());
        if !crop.fits_within(width, height) {
            return Err(GramophoneError::CropOutOfBounds {
                crop,
                width,
                height,
            });
        }

        let layout = self.gramophone.layout();
        let dst = layout.destination();

        cr.arc(0.0, 0.0, f64::from(layout.picture_radius), 0.0, 2.0 * PI);
        cr.clip();

        // map the crop region onto the destination square
        cr.translate(f64::from(dst.x), f64::from(dst.y));
        cr.scale(
            f64::from(dst.width) / f64::from(crop.width),
            f64::from(dst.height) / f64::from(crop.height),
        );
        cr.set_source_pixbuf(picture, -f64::from(crop.x), -f64::from(crop.y));
        Ok(cr.paint()?)
    }
}

struct NeedleRenderer<'a> {
    gramophone: &'a Gramophone,
    center_x: f64,
}

impl<'a> NeedleRenderer<'a> {
    fn new(gramophone: &'a Gramophone, center_x: f64) -> Self {
        Self {
            gramophone,
            center_x,
        }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.draw_arm(cr)?;
        self.draw_hub(cr)
    }

    /// Segments are drawn end to end along the local y axis, each one
    /// translating the origin to its tip.
    fn draw_arm(&self, cr: &Context) -> Result<(), cairo::Error> {
        let layout = self.gramophone.layout();

        cr.save()?;
        cr.translate(self.center_x, 0.0);
        set_color(cr, self.gramophone.colors().arm);

        cr.rotate(f64::from(self.gramophone.needle_angle()).to_radians());
        Self::segment(cr, layout.long_arm, ARM_STROKE)?;

        cr.rotate(ARM_BEND_DEGREE.to_radians());
        Self::segment(cr, layout.short_arm, ARM_STROKE)?;
        Self::segment(cr, layout.long_head, LONG_HEAD_STROKE)?;
        Self::segment(cr, layout.short_head, SHORT_HEAD_STROKE)?;
        cr.restore()
    }

    fn segment(cr: &Context, length: i32, stroke: f64) -> Result<(), cairo::Error> {
        let length = f64::from(length);
        cr.set_line_width(stroke);
        cr.move_to(0.0, 0.0);
        cr.line_to(0.0, length);
        cr.stroke()?;
        cr.translate(0.0, length);
        Ok(())
    }

    fn draw_hub(&self, cr: &Context) -> Result<(), cairo::Error> {
        let layout = self.gramophone.layout();
        let colors = self.gramophone.colors();

        cr.save()?;
        cr.translate(self.center_x, 0.0);
        for (radius, color) in [
            (layout.big_hub_radius, colors.arm),
            (layout.small_hub_radius, colors.hub),
        ] {
            set_color(cr, color);
            cr.arc(0.0, 0.0, f64::from(radius), 0.0, 2.0 * PI);
            cr.fill()?;
        }
        cr.restore()
    }
}

/// Paints the disc and then the tonearm on top of it. Does not advance any
/// counters.
pub fn draw(cr: &Context, gramophone: &Gramophone, width: i32) -> Result<(), GramophoneError> {
    let center_x = f64::from(width >> 1);
    DiscRenderer::new(gramophone, center_x).draw(cr)?;
    NeedleRenderer::new(gramophone, center_x).draw(cr)?;
    Ok(())
}
