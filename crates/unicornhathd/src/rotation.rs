//! Drawing orientation
//!
//! Rotation changes how logical drawing coordinates map onto the physical
//! pixel grid. It only affects drawing calls made after it is set; pixels
//! already in the framebuffer stay where they are.

/// Drawing rotation, clockwise, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation
    #[default]
    Degrees0,
    /// Rotate 90° clockwise (logical width and height swap)
    Degrees90,
    /// Rotate 180°
    Degrees180,
    /// Rotate 270° clockwise / 90° counter-clockwise (logical width and height swap)
    Degrees270,
}

impl Rotation {
    /// Build from a count of clockwise quarter turns, taken modulo 4.
    ///
    /// Negative counts turn counter-clockwise, so `-1` is `Degrees270`.
    pub const fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            1 => Self::Degrees90,
            2 => Self::Degrees180,
            3 => Self::Degrees270,
            _ => Self::Degrees0,
        }
    }

    /// Build from an angle in degrees. Only multiples of 90 are accepted.
    pub const fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 == 0 {
            Some(Self::from_quarter_turns(degrees / 90))
        } else {
            None
        }
    }

    /// Clockwise quarter turns, 0..=3.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Degrees0 => 0,
            Self::Degrees90 => 1,
            Self::Degrees180 => 2,
            Self::Degrees270 => 3,
        }
    }

    /// Angle in degrees: 0, 90, 180 or 270.
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Degrees0 => 0,
            Self::Degrees90 => 90,
            Self::Degrees180 => 180,
            Self::Degrees270 => 270,
        }
    }

    /// The next orientation, a further 90° clockwise.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        match self {
            Self::Degrees0 => Self::Degrees90,
            Self::Degrees90 => Self::Degrees180,
            Self::Degrees180 => Self::Degrees270,
            Self::Degrees270 => Self::Degrees0,
        }
    }

    /// Check if rotation swaps width and height
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Degrees90 | Self::Degrees270)
    }

    /// Logical drawing area for a physical `width × height` grid.
    pub const fn apply_to_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Map logical `(x, y)` to physical coordinates on a `width × height`
    /// grid.
    ///
    /// The result is not clipped; callers check it against the grid. Uses
    /// saturating arithmetic so far off-screen inputs stay off-screen.
    pub const fn to_physical(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        let last_x = width.saturating_sub(1);
        let last_y = height.saturating_sub(1);
        match self {
            Self::Degrees0 => (x, y),
            Self::Degrees90 => (last_x.saturating_sub(y), x),
            Self::Degrees180 => (last_x.saturating_sub(x), last_y.saturating_sub(y)),
            Self::Degrees270 => (y, last_y.saturating_sub(x)),
        }
    }
}
