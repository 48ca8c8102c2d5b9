//! RGB888 framebuffer with clipped drawing primitives
//!
//! The backing store is `W × H × 3` bytes, row-major, one byte per channel in
//! R, G, B order. That is exactly the payload the panel expects, so a frame
//! transfer is a single write of [`Framebuffer::as_bytes`].
//!
//! Every primitive goes through the current [`Rotation`] and is clipped per
//! pixel: coordinates that land outside the grid are dropped silently.
//! [`Framebuffer::scroll`] is the exception: it works on physical
//! coordinates and ignores rotation.

// Coordinates are i32 (matching embedded-graphics); the grid is indexed with
// usize. Every i32 → usize cast below happens after clamping to [0, W) or
// [0, H), and W, H are panel-sized, so the casts cannot lose information.
// Rasterizer arithmetic runs in i64 (i128 for the line slope) and cannot
// overflow for i32 inputs.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]

use core::convert::Infallible;
use core::ops::RangeInclusive;

use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::color;
use crate::error::DrawError;
use crate::rotation::Rotation;
use crate::text::{self, TextOptions};

/// In-memory pixel grid mirroring the panel.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[[u8; 3]; W]; H],
    rotation: Rotation,
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Size of the backing array in bytes.
    pub const BYTES: usize = W * H * 3;

    const MAX_X: i32 = W as i32 - 1;
    const MAX_Y: i32 = H as i32 - 1;

    /// Black framebuffer, no rotation.
    #[allow(clippy::large_stack_arrays)] // 768 bytes for the 16×16 panel
    pub const fn new() -> Self {
        Self {
            pixels: [[[0; 3]; W]; H],
            rotation: Rotation::Degrees0,
        }
    }

    /// The backing array: row-major, R G B per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened().as_flattened()
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.pixels.as_flattened_mut().as_flattened_mut()
    }

    /// Physical width in pixels.
    pub const fn width(&self) -> usize {
        W
    }

    /// Physical height in pixels.
    pub const fn height(&self) -> usize {
        H
    }

    /// Drawing area as seen through the current rotation.
    pub fn logical_size(&self) -> Size {
        let (w, h) = self.rotation.apply_to_dimensions(W as u32, H as u32);
        Size::new(w, h)
    }

    /// Current drawing rotation.
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the rotation used by all later drawing calls.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        #[cfg(feature = "defmt")]
        defmt::trace!("rotation set to {=u16} degrees", rotation.degrees());
        #[cfg(feature = "tracing")]
        tracing::trace!(degrees = rotation.degrees(), "rotation set");
        self.rotation = rotation;
    }

    /// Logical to physical, `None` when off the grid.
    fn physical(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (px, py) = self.rotation.to_physical(x, y, W as i32, H as i32);
        if (0..=Self::MAX_X).contains(&px) && (0..=Self::MAX_Y).contains(&py) {
            Some((px as usize, py as usize))
        } else {
            None
        }
    }

    /// Read one pixel. `None` when `(x, y)` is off the grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        let (px, py) = self.physical(x, y)?;
        self.pixels
            .get(py)
            .and_then(|row| row.get(px))
            .map(|rgb| color::from_bytes(*rgb))
    }

    /// Write one pixel. Off-grid writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some((px, py)) = self.physical(x, y) {
            if let Some(rgb) = self.pixels.get_mut(py).and_then(|row| row.get_mut(px)) {
                *rgb = color::to_bytes(color);
            }
        }
    }

    /// Set every pixel.
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels
            .as_flattened_mut()
            .fill(color::to_bytes(color));
    }

    /// Fill `[x, x + width) × [y, y + height)`, clipped to the grid.
    ///
    /// A non-positive width or height draws nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb888) {
        if width < 1 || height < 1 {
            return;
        }
        let x_end = x.saturating_add(width - 1);
        let y_end = y.saturating_add(height - 1);

        // Rotation maps rectangles onto rectangles: transform two opposite
        // corners and normalise.
        let (ax, ay) = self.rotation.to_physical(x, y, W as i32, H as i32);
        let (bx, by) = self.rotation.to_physical(x_end, y_end, W as i32, H as i32);
        let x0 = ax.min(bx).max(0);
        let x1 = ax.max(bx).min(Self::MAX_X);
        let y0 = ay.min(by).max(0);
        let y1 = ay.max(by).min(Self::MAX_Y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let rgb = color::to_bytes(color);
        let rows = self
            .pixels
            .get_mut(y0 as usize..=y1 as usize)
            .unwrap_or_default();
        for row in rows {
            if let Some(span) = row.get_mut(x0 as usize..=x1 as usize) {
                span.fill(rgb);
            }
        }
    }

    /// Horizontal line of `width` pixels starting at `(x, y)`.
    pub fn hline(&mut self, x: i32, y: i32, width: i32, color: Rgb888) {
        self.fill_rect(x, y, width, 1, color);
    }

    /// Vertical line of `height` pixels starting at `(x, y)`.
    pub fn vline(&mut self, x: i32, y: i32, height: i32, color: Rgb888) {
        self.fill_rect(x, y, 1, height, color);
    }

    /// Rectangle outline, one pixel wide, covering
    /// `[x, x + width) × [y, y + height)`.
    ///
    /// The filled variant is [`Framebuffer::fill_rect`]; `rect` never fills.
    /// A non-positive width or height draws nothing.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb888) {
        if width < 1 || height < 1 {
            return;
        }
        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);
        self.hline(x, y, width, color);
        self.hline(x, bottom, width, color);
        self.vline(x, y, height, color);
        self.vline(right, y, height, color);
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both ends included.
    ///
    /// Only the steps whose major-axis coordinate lands on the grid are
    /// visited, so far-off endpoints cost no more than a short line.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb888) {
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let step_x = if x0 > x1 { -1 } else { 1 };
        let step_y = if y0 > y1 { -1 } else { 1 };
        let size = self.logical_size();

        if dx == 0 && dy == 0 {
            self.plot_wide(x0, y0, color);
        } else if dx > dy {
            for i in visible_steps(x0, step_x, dx, i64::from(size.width)) {
                let y = y0 + step_y * minor_offset(i, dx, dy);
                self.plot_wide(x0 + step_x * i, y, color);
            }
        } else {
            for i in visible_steps(y0, step_y, dy, i64::from(size.height)) {
                let x = x0 + step_x * minor_offset(i, dy, dx);
                self.plot_wide(x, y0 + step_y * i, color);
            }
        }
    }

    /// Midpoint circle outline centred on `(cx, cy)`.
    ///
    /// A radius of 0 plots the centre; a negative radius draws nothing.
    /// Octant rows are evaluated directly and only those that can reach the
    /// grid are visited, so huge radii stay cheap.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb888) {
        if radius < 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let size = self.logical_size();
        let (w, h) = (i64::from(size.width), i64::from(size.height));

        // Offset `y` is drawn at cy ± y (or cx ± y for the mirrored octants);
        // anything outside these windows lands off the grid.
        let windows = [
            (-cy, h - 1 - cy),
            (cy - (h - 1), cy),
            (-cx, w - 1 - cx),
            (cx - (w - 1), cx),
        ];
        for (lo, hi) in windows {
            for y in lo.max(0)..=hi.min(r) {
                let x = circle_x(r, y);
                if x < y {
                    continue;
                }
                for (ox, oy) in [(x, y), (y, x)] {
                    self.plot_wide(cx + ox, cy + oy, color);
                    self.plot_wide(cx - ox, cy + oy, color);
                    self.plot_wide(cx - ox, cy - oy, color);
                    self.plot_wide(cx + ox, cy - oy, color);
                }
            }
        }
    }

    /// `set_pixel` for coordinates computed in i64.
    fn plot_wide(&mut self, x: i64, y: i64, color: Rgb888) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Render `string` with its top-left corner at `(x, y)`.
    ///
    /// See [`TextOptions`] for font and scaling. Characters missing from the
    /// font render as the font's replacement glyph.
    pub fn text(
        &mut self,
        string: &str,
        x: i32,
        y: i32,
        color: Rgb888,
        options: TextOptions<'_>,
    ) {
        text::draw(self, string, Point::new(x, y), color, &options);
    }

    /// Blit `image` with its top-left corner at the logical origin.
    ///
    /// The image goes through the rotation like any other drawing. An image
    /// larger than [`Framebuffer::logical_size`] is rejected untouched.
    pub fn image<I>(&mut self, image: &I) -> Result<(), DrawError>
    where
        I: ImageDrawable<Color = Rgb888>,
    {
        let size = image.size();
        let area = self.logical_size();
        if size.width > area.width || size.height > area.height {
            return Err(DrawError::ImageTooLarge {
                width: size.width,
                height: size.height,
            });
        }
        Image::new(image, Point::zero())
            .draw(self)
            .unwrap_or_else(|never| match never {});
        Ok(())
    }

    /// Shift the physical contents by `(dx, dy)` pixels.
    ///
    /// Pixel `(x, y)` takes the value of `(x - dx, y - dy)` wherever that
    /// source lies on the grid. Pixels pushed off the edge are lost. Every
    /// pixel without a source (the uncovered rows and columns, an L-shaped
    /// region for a diagonal shift) keeps whatever it held before: fill it if
    /// it matters. A shift of a full width or height (or more) leaves the
    /// buffer as it is.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let shift_x = dx.unsigned_abs() as usize;
        let shift_y = dy.unsigned_abs() as usize;
        if shift_x >= W || shift_y >= H {
            return;
        }

        let span = (W - shift_x) * 3;
        let (src_x, dst_x) = if dx >= 0 { (0, shift_x) } else { (shift_x, 0) };
        let bytes = self.as_bytes_mut();
        let mut copy_row = |dst_y: usize| {
            let src_y = if dy >= 0 { dst_y - shift_y } else { dst_y + shift_y };
            let src = (src_y * W + src_x) * 3;
            bytes.copy_within(src..src + span, (dst_y * W + dst_x) * 3);
        };

        // Rows are read before they are overwritten: moving down walks
        // bottom-up, moving up walks top-down.
        if dy > 0 {
            (shift_y..H).rev().for_each(&mut copy_row);
        } else {
            (0..H - shift_y).for_each(&mut copy_row);
        }
    }
}

/// Range of Bresenham steps `i` in `0..=major` whose major-axis coordinate
/// `start + step * i` falls inside `[0, extent)`.
fn visible_steps(start: i64, step: i64, major: i64, extent: i64) -> RangeInclusive<i64> {
    let (lo, hi) = if step > 0 {
        (-start, extent - 1 - start)
    } else {
        (start - (extent - 1), start)
    };
    lo.max(0)..=hi.min(major)
}

/// Minor-axis offset after `i` major steps of a Bresenham walk. Equal to
/// `ceil((2 * minor * i - major) / (2 * major))`, the closed form of the
/// doubled error term starting at `major`. `major` is positive.
fn minor_offset(i: i64, major: i64, minor: i64) -> i64 {
    let num = 2 * i128::from(minor) * i128::from(i) - i128::from(major);
    let den = 2 * i128::from(major);
    let ceil = -(-num).div_euclid(den);
    ceil as i64
}

/// Midpoint-circle x for row offset `y` in `0..=r`: the smallest `x` with
/// `(2x + 1)² >= 4(r² - y²)`.
fn circle_x(r: i64, y: i64) -> i64 {
    let target = ((r * r - y * y) as u64) * 4;
    let root = isqrt(target);
    let ceil = if root * root == target { root } else { root + 1 };
    (ceil / 2) as i64
}

/// Integer square root, rounded down.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = 1u64 << (64 - n.leading_zeros()).div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> core::fmt::Debug for Framebuffer<W, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &W)
            .field("height", &H)
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Framebuffer<W, H> {
    fn size(&self) -> Size {
        self.logical_size()
    }
}

impl<const W: usize, const H: usize> DrawTarget for Framebuffer<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    /// Plot pixels through the rotation, dropping any that fall off the grid.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let width = i32::try_from(area.size.width).unwrap_or(i32::MAX);
        let height = i32::try_from(area.size.height).unwrap_or(i32::MAX);
        self.fill_rect(area.top_left.x, area.top_left.y, width, height, color);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use embedded_graphics::image::ImageRaw;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    type Fb = Framebuffer<16, 16>;

    const BG: Rgb888 = Rgb888::BLACK;
    const FG: Rgb888 = Rgb888::WHITE;

    fn lit(fb: &Fb) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..16 {
            for x in 0..16 {
                if fb.pixel(x, y) != Some(BG) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_framebuffer_creation() {
        let fb = Fb::new();
        assert_eq!(fb.as_bytes().len(), 16 * 16 * 3);
        assert_eq!(Fb::BYTES, 768);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.rotation(), Rotation::Degrees0);
    }

    #[test]
    fn test_non_square_buffer_size() {
        let fb = Framebuffer::<5, 3>::new();
        assert_eq!(fb.as_bytes().len(), 45);
        assert_eq!(fb.logical_size(), Size::new(5, 3));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Fb::new();
        fb.set_pixel(3, 4, Rgb888::new(1, 2, 3));
        assert_eq!(fb.pixel(3, 4), Some(Rgb888::new(1, 2, 3)));
        // Row-major RGB layout: index = (y * W + x) * 3
        let i = (4 * 16 + 3) * 3;
        assert_eq!(&fb.as_bytes()[i..i + 3], &[1, 2, 3]);
    }

    #[test]
    fn test_bounds_checking() {
        let mut fb = Fb::new();
        let before = fb.clone();
        fb.set_pixel(-1, 0, FG);
        fb.set_pixel(16, 0, FG);
        fb.set_pixel(0, 16, FG);
        fb.set_pixel(i32::MIN, i32::MAX, FG);
        assert_eq!(fb, before);
        assert_eq!(fb.pixel(16, 16), None);
        assert_eq!(fb.pixel(-1, -1), None);
    }

    #[test]
    fn test_fill_rect_clips_to_grid() {
        let mut fb = Fb::new();
        fb.fill_rect(14, -2, 5, 4, FG);
        assert_eq!(lit(&fb), vec![(14, 0), (15, 0), (14, 1), (15, 1)]);
    }

    #[test]
    fn test_fill_rect_rejects_empty_sizes() {
        let mut fb = Fb::new();
        fb.fill_rect(2, 2, 0, 5, FG);
        fb.fill_rect(2, 2, 5, -1, FG);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_fill_rect_huge_extent_does_not_overflow() {
        let mut fb = Fb::new();
        fb.fill_rect(i32::MAX - 1, 0, i32::MAX, 1, FG);
        fb.fill_rect(i32::MIN, 3, i32::MAX, 1, FG);
        assert!(lit(&fb).is_empty());
        fb.fill_rect(-5, 0, i32::MAX, 1, FG);
        assert_eq!(lit(&fb).len(), 16);
    }

    #[rustfmt::skip]
    #[test]
    fn test_rect_outline() {
        let mut fb = Fb::new();
        fb.rect(1, 1, 4, 3, FG);
        let expected = vec![
            (1, 1), (2, 1), (3, 1), (4, 1),
            (1, 2), (4, 2),
            (1, 3), (2, 3), (3, 3), (4, 3),
        ];
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_rect_is_fill_rect_minus_interior() {
        let mut outline = Fb::new();
        outline.rect(2, 3, 6, 5, FG);

        let mut carved = Fb::new();
        carved.fill_rect(2, 3, 6, 5, FG);
        carved.fill_rect(3, 4, 4, 3, BG);
        assert_eq!(outline, carved);
    }

    #[test]
    fn test_hline_vline() {
        let mut fb = Fb::new();
        fb.hline(-2, 0, 4, FG);
        fb.vline(15, 14, 10, FG);
        assert_eq!(lit(&fb), vec![(0, 0), (1, 0), (15, 14), (15, 15)]);
    }

    #[test]
    fn test_line_includes_both_endpoints() {
        let mut fb = Fb::new();
        fb.line(0, 0, 3, 1, FG);
        let pts = lit(&fb);
        assert!(pts.contains(&(0, 0)));
        assert!(pts.contains(&(3, 1)));
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn test_line_matches_embedded_graphics_on_diagonal() {
        let mut ours = Fb::new();
        ours.line(2, 13, 13, 2, FG);

        let mut theirs = Fb::new();
        Line::new(Point::new(2, 13), Point::new(13, 2))
            .into_styled(PrimitiveStyle::with_stroke(FG, 1))
            .draw(&mut theirs)
            .unwrap();

        assert_eq!(lit(&ours), lit(&theirs));
    }

    #[test]
    fn test_line_single_point() {
        let mut fb = Fb::new();
        fb.line(5, 5, 5, 5, FG);
        assert_eq!(lit(&fb), vec![(5, 5)]);
    }

    /// Step-by-step Bresenham walk over the whole span.
    fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let (sx, sy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let (mut x, mut y) = (x0, y0);
        let mut out = Vec::new();
        if dx > dy {
            let mut err = dx;
            while x != x1 {
                out.push((x, y));
                err -= 2 * dy;
                if err < 0 {
                    y += sy;
                    err += 2 * dx;
                }
                x += sx;
            }
        } else {
            let mut err = dy;
            while y != y1 {
                out.push((x, y));
                err -= 2 * dx;
                if err < 0 {
                    x += sx;
                    err += 2 * dy;
                }
                y += sy;
            }
        }
        out.push((x, y));
        out
    }

    #[test]
    fn test_line_matches_stepwise_walk() {
        let ends = [-40, -7, -1, 0, 3, 8, 15, 16, 23, 55];
        for &x0 in &ends {
            for &y0 in &ends {
                for (x1, y1) in [(15, 0), (0, 15), (9, 31), (-20, 4), (x0 + 3, y0 - 50)] {
                    let mut ours = Fb::new();
                    ours.line(x0, y0, x1, y1, FG);
                    let mut walked = Fb::new();
                    for (x, y) in walk_line(x0, y0, x1, y1) {
                        walked.set_pixel(x, y, FG);
                    }
                    assert_eq!(ours, walked, "({x0}, {y0}) -> ({x1}, {y1})");
                }
            }
        }
    }

    #[test]
    fn test_line_far_endpoints_only_touch_the_grid() {
        let mut fb = Fb::new();
        fb.line(i32::MIN, 5, i32::MAX, 5, FG);
        assert_eq!(lit(&fb), (0..16).map(|x| (x, 5)).collect::<Vec<_>>());

        let mut fb = Fb::new();
        fb.line(3, i32::MAX, 3, i32::MIN, FG);
        assert_eq!(lit(&fb), (0..16).map(|y| (3, y)).collect::<Vec<_>>());

        let mut fb = Fb::new();
        fb.line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, FG);
        assert_eq!(lit(&fb).len(), 16);
        assert!(lit(&fb).iter().all(|&(x, y)| x == y));
    }

    #[test]
    fn test_rotated_line_clips_to_logical_size() {
        let mut fb = Framebuffer::<8, 4>::new();
        fb.set_rotation(Rotation::Degrees90);
        fb.line(1, -100, 1, 100, FG);
        fb.line(-100, 6, 100, 6, FG);
        let lit = fb.as_bytes().chunks(3).filter(|p| p != &[0, 0, 0]).count();
        // 8 pixels down column 1, 4 across row 6, one shared.
        assert_eq!(lit, 11);
    }

    /// Step-by-step midpoint circle over all octant rows.
    fn walk_circle(cx: i32, cy: i32, r: i32) -> Vec<(i32, i32)> {
        let (mut x, mut y, mut err) = (r, 0, 1 - r);
        let mut out = Vec::new();
        while x >= y {
            for (ox, oy) in [(x, y), (y, x)] {
                out.extend([
                    (cx + ox, cy + oy),
                    (cx - ox, cy + oy),
                    (cx - ox, cy - oy),
                    (cx + ox, cy - oy),
                ]);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
        out
    }

    #[test]
    fn test_circle_matches_stepwise_midpoint() {
        for r in 0..40 {
            for (cx, cy) in [(8, 8), (0, 0), (-5, 12), (20, 3), (7, -30)] {
                let mut ours = Fb::new();
                ours.circle(cx, cy, r, FG);
                let mut walked = Fb::new();
                for (x, y) in walk_circle(cx, cy, r) {
                    walked.set_pixel(x, y, FG);
                }
                assert_eq!(ours, walked, "centre ({cx}, {cy}) radius {r}");
            }
        }
    }

    #[test]
    fn test_huge_circle_draws_only_visible_arc() {
        let r = 1_000_000_000;
        let mut fb = Fb::new();
        // Top of the circle touches row 8; its curvature is invisible here.
        fb.circle(8, 8 + r, r, FG);
        assert_eq!(lit(&fb), (0..16).map(|x| (x, 8)).collect::<Vec<_>>());

        // The grid sits well inside the circle: nothing to draw.
        let mut fb = Fb::new();
        fb.circle(8, 8, i32::MAX, FG);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_circle_is_outline_only() {
        let mut fb = Fb::new();
        fb.circle(8, 8, 4, FG);
        assert_eq!(fb.pixel(12, 8), Some(FG));
        assert_eq!(fb.pixel(4, 8), Some(FG));
        assert_eq!(fb.pixel(8, 12), Some(FG));
        assert_eq!(fb.pixel(8, 4), Some(FG));
        for y in 0..16 {
            for x in 0..16 {
                let (dx, dy) = (x - 8, y - 8);
                if dx * dx + dy * dy < 9 {
                    assert_eq!(fb.pixel(x, y), Some(BG), "({x}, {y}) inside radius 3");
                }
            }
        }
    }

    #[test]
    fn test_circle_degenerate_radii() {
        let mut fb = Fb::new();
        fb.circle(3, 3, -1, FG);
        assert!(lit(&fb).is_empty());
        fb.circle(3, 3, 0, FG);
        assert_eq!(lit(&fb), vec![(3, 3)]);
    }

    #[test]
    fn test_rotation_moves_logical_origin() {
        let cases = [
            (Rotation::Degrees0, 0usize),
            (Rotation::Degrees90, 15 * 3),
            (Rotation::Degrees180, (15 * 16 + 15) * 3),
            (Rotation::Degrees270, (15 * 16) * 3),
        ];
        for (rotation, byte) in cases {
            let mut fb = Fb::new();
            fb.set_rotation(rotation);
            fb.set_pixel(0, 0, Rgb888::RED);
            assert_eq!(fb.as_bytes()[byte], 0xFF, "{rotation:?}");
            assert_eq!(fb.pixel(0, 0), Some(Rgb888::RED));
        }
    }

    #[test]
    fn test_rotated_fill_rect_matches_rotated_pixels() {
        for turns in 0..4 {
            let rotation = Rotation::from_quarter_turns(turns);
            let mut by_rect = Framebuffer::<8, 4>::new();
            by_rect.set_rotation(rotation);
            by_rect.fill_rect(1, 0, 2, 3, FG);

            let mut by_pixel = Framebuffer::<8, 4>::new();
            by_pixel.set_rotation(rotation);
            for y in 0..3 {
                for x in 1..3 {
                    by_pixel.set_pixel(x, y, FG);
                }
            }
            assert_eq!(by_rect.as_bytes(), by_pixel.as_bytes(), "{rotation:?}");
        }
    }

    #[test]
    fn test_rotation_swaps_logical_size() {
        let mut fb = Framebuffer::<8, 4>::new();
        fb.set_rotation(Rotation::Degrees90);
        assert_eq!(fb.logical_size(), Size::new(4, 8));
        assert_eq!(fb.size(), Size::new(4, 8));
        fb.set_pixel(3, 7, FG);
        assert_eq!(fb.pixel(3, 7), Some(FG));
        assert_eq!(fb.pixel(7, 3), None);
    }

    #[test]
    fn test_scroll_right_down_keeps_stale_strip() {
        let mut fb = Fb::new();
        fb.set_pixel(0, 0, Rgb888::RED);
        fb.set_pixel(15, 15, Rgb888::BLUE);
        fb.scroll(2, 1);
        assert_eq!(fb.pixel(2, 1), Some(Rgb888::RED));
        // Blue pixel scrolled off the bottom-right corner.
        assert!(!fb.as_bytes().chunks(3).any(|p| p == [0, 0, 0xFF]));
        // Row 0 was not overwritten: the red pixel is still there.
        assert_eq!(fb.pixel(0, 0), Some(Rgb888::RED));
    }

    #[test]
    fn test_scroll_diagonal_keeps_stale_l_region() {
        let mut fb = Fb::new();
        for y in 0..16u8 {
            for x in 0..16u8 {
                fb.set_pixel(i32::from(x), i32::from(y), Rgb888::new(x, y, 1));
            }
        }
        fb.scroll(3, -2);

        for y in 0..16u8 {
            for x in 0..16u8 {
                let expected = if x >= 3 && y < 14 {
                    Rgb888::new(x - 3, y + 2, 1)
                } else {
                    Rgb888::new(x, y, 1)
                };
                assert_eq!(fb.pixel(i32::from(x), i32::from(y)), Some(expected), "({x}, {y})");
            }
        }
        assert_eq!(fb.pixel(0, 0), Some(Rgb888::new(0, 0, 1)));
    }

    #[test]
    fn test_scroll_down_left_reads_rows_before_overwriting() {
        let mut fb = Framebuffer::<5, 4>::new();
        for y in 0..4u8 {
            for x in 0..5u8 {
                fb.set_pixel(i32::from(x), i32::from(y), Rgb888::new(x, y, 9));
            }
        }
        fb.scroll(-2, 1);

        for y in 0..4u8 {
            for x in 0..5u8 {
                let expected = if x < 3 && y >= 1 {
                    Rgb888::new(x + 2, y - 1, 9)
                } else {
                    Rgb888::new(x, y, 9)
                };
                assert_eq!(fb.pixel(i32::from(x), i32::from(y)), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_scroll_left_up() {
        let mut fb = Fb::new();
        fb.set_pixel(5, 5, Rgb888::GREEN);
        fb.scroll(-3, -4);
        assert_eq!(fb.pixel(2, 1), Some(Rgb888::GREEN));
    }

    #[test]
    fn test_scroll_ignores_rotation() {
        let mut fb = Fb::new();
        fb.set_pixel(4, 4, Rgb888::GREEN);
        fb.set_rotation(Rotation::Degrees180);
        fb.scroll(1, 0);
        fb.set_rotation(Rotation::Degrees0);
        assert_eq!(fb.pixel(5, 4), Some(Rgb888::GREEN));
    }

    #[test]
    fn test_scroll_by_full_width_is_noop() {
        let mut fb = Fb::new();
        fb.set_pixel(1, 1, FG);
        let before = fb.clone();
        fb.scroll(16, 0);
        fb.scroll(0, -16);
        fb.scroll(i32::MIN, 0);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_image_blit_and_size_check() {
        // 2×1 image: red, green
        let data = [0xFF, 0, 0, 0, 0xFF, 0];
        let img = ImageRaw::<Rgb888>::new(&data, 2);
        let mut fb = Fb::new();
        fb.image(&img).unwrap();
        assert_eq!(fb.pixel(0, 0), Some(Rgb888::RED));
        assert_eq!(fb.pixel(1, 0), Some(Rgb888::GREEN));

        let wide = [0u8; 17 * 3];
        let too_wide = ImageRaw::<Rgb888>::new(&wide, 17);
        let before = fb.clone();
        assert_eq!(
            fb.image(&too_wide),
            Err(DrawError::ImageTooLarge {
                width: 17,
                height: 1
            })
        );
        assert_eq!(fb, before);
    }

    #[test]
    fn test_draw_target_fill_and_clear() {
        let mut fb = Fb::new();
        Rectangle::new(Point::new(14, 14), Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_fill(FG))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(lit(&fb), vec![(14, 14), (15, 14), (14, 15), (15, 15)]);

        fb.clear(Rgb888::BLUE).unwrap();
        assert!(fb.as_bytes().chunks(3).all(|p| p == [0, 0, 0xFF]));
    }
}
