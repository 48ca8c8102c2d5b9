//! Colour helpers
//!
//! Pixels are [`Rgb888`]. Application code coming from other LED libraries
//! often carries packed `0xRRGGBB` integers; these helpers convert both ways.

use embedded_graphics::pixelcolor::raw::{RawData, RawU24};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Unpack a `0xRRGGBB` integer. Bits above 24 are ignored.
pub fn from_u32(packed: u32) -> Rgb888 {
    Rgb888::from(RawU24::new(packed & 0x00FF_FFFF))
}

/// Pack a colour as `0xRRGGBB`.
pub fn to_u32(color: Rgb888) -> u32 {
    RawU24::from(color).into_inner()
}

/// Colour wheel: 0 → red, 85 → green, 170 → blue, back to red at 255.
///
/// Walking `pos` through 0..=255 gives a full rainbow at constant
/// brightness.
// Every branch has pos <= 85 after offsetting, so pos * 3 <= 255 and
// neither the multiplication nor the subtraction can overflow u8.
#[allow(clippy::arithmetic_side_effects)]
pub fn wheel(pos: u8) -> Rgb888 {
    match pos {
        0..=84 => Rgb888::new(255 - pos * 3, pos * 3, 0),
        85..=169 => {
            let pos = pos - 85;
            Rgb888::new(0, 255 - pos * 3, pos * 3)
        }
        _ => {
            let pos = pos - 170;
            Rgb888::new(pos * 3, 0, 255 - pos * 3)
        }
    }
}

/// Channel bytes in wire order.
pub(crate) fn to_bytes(color: Rgb888) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}

/// Inverse of [`to_bytes`].
pub(crate) fn from_bytes([r, g, b]: [u8; 3]) -> Rgb888 {
    Rgb888::new(r, g, b)
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip_for_primaries() {
        assert_eq!(from_u32(0xFF0000), Rgb888::RED);
        assert_eq!(from_u32(0x00FF00), Rgb888::GREEN);
        assert_eq!(from_u32(0x0000FF), Rgb888::BLUE);
        assert_eq!(to_u32(Rgb888::new(0x12, 0x34, 0x56)), 0x12_3456);
    }

    #[test]
    fn high_byte_is_ignored() {
        assert_eq!(from_u32(0xAB00_00FF), Rgb888::BLUE);
    }

    #[test]
    fn wheel_hits_primaries_at_thirds() {
        assert_eq!(wheel(0), Rgb888::RED);
        assert_eq!(wheel(85), Rgb888::GREEN);
        assert_eq!(wheel(170), Rgb888::BLUE);
        assert_eq!(wheel(255), Rgb888::new(255, 0, 0));
    }

    #[test]
    fn wheel_keeps_channel_sum_constant() {
        for pos in 0..=u8::MAX {
            let c = wheel(pos);
            let sum = u16::from(c.r()) + u16::from(c.g()) + u16::from(c.b());
            assert_eq!(sum, 255, "wheel({pos}) = {c:?}");
        }
    }

    #[test]
    fn wire_bytes_are_rgb_order() {
        assert_eq!(to_bytes(Rgb888::new(1, 2, 3)), [1, 2, 3]);
        assert_eq!(from_bytes([4, 5, 6]), Rgb888::new(4, 5, 6));
    }
}
