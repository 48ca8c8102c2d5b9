//! Bitmap text rendering
//!
//! Glyphs come from embedded-graphics monospace fonts. Each font pixel is
//! drawn as a `size × size` block, so small fonts stay legible when scaled
//! up on a 16 × 16 panel.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::framebuffer::Framebuffer;

/// Font and scale for [`Framebuffer::text`].
#[derive(Clone, Copy)]
pub struct TextOptions<'a> {
    /// Glyph source. Defaults to the 5 × 8 ASCII font.
    pub font: &'a MonoFont<'a>,
    /// Integer scale factor. 0 is treated as 1.
    pub size: u32,
}

impl TextOptions<'static> {
    /// Default font at 1× scale.
    pub const fn new() -> Self {
        Self {
            font: &FONT_5X8,
            size: 1,
        }
    }
}

impl TextOptions<'_> {
    /// Replace the font.
    #[must_use]
    pub const fn font<'b>(self, font: &'b MonoFont<'b>) -> TextOptions<'b> {
        TextOptions {
            font,
            size: self.size,
        }
    }

    /// Replace the scale factor.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

impl Default for TextOptions<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TextOptions<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextOptions")
            .field("character_size", &self.font.character_size)
            .field("size", &self.size)
            .finish()
    }
}

/// Upscaling adapter: one source pixel becomes a `scale × scale` block at
/// `origin + p * scale` on the framebuffer.
struct Scaled<'fb, const W: usize, const H: usize> {
    fb: &'fb mut Framebuffer<W, H>,
    origin: Point,
    scale: i32,
}

impl<const W: usize, const H: usize> Dimensions for Scaled<'_, W, H> {
    // Unbounded: clipping happens per pixel in the framebuffer.
    fn bounding_box(&self) -> Rectangle {
        let max = i32::MAX.unsigned_abs();
        Rectangle::new(Point::zero(), Size::new(max, max))
    }
}

impl<const W: usize, const H: usize> DrawTarget for Scaled<'_, W, H> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            let x = self.origin.x.saturating_add(p.x.saturating_mul(self.scale));
            let y = self.origin.y.saturating_add(p.y.saturating_mul(self.scale));
            self.fb.fill_rect(x, y, self.scale, self.scale, color);
        }
        Ok(())
    }
}

pub(crate) fn draw<const W: usize, const H: usize>(
    fb: &mut Framebuffer<W, H>,
    string: &str,
    position: Point,
    color: Rgb888,
    options: &TextOptions<'_>,
) {
    let scale = i32::try_from(options.size.max(1)).unwrap_or(i32::MAX);
    let mut target = Scaled {
        fb,
        origin: position,
        scale,
    };
    let style = MonoTextStyle::new(options.font, color);
    Text::with_baseline(string, Point::zero(), style, Baseline::Top)
        .draw(&mut target)
        .unwrap_or_else(|never| match never {});
}
