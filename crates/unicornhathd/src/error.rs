//! Driver error types
//!
//! Out-of-bounds drawing is never an error: it is clipped. Errors only come
//! from the collaborators (bus, chip-select pin), from construction-time
//! configuration, or from images that cannot fit.

use core::fmt;

/// Errors returned by [`crate::Display`].
///
/// `BusE` and `PinE` are the error types of the SPI bus and chip-select pin.
/// Their values are passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusE, PinE> {
    /// SPI configure, write or flush failed. The frame was not (fully) sent.
    Bus(BusE),
    /// Driving the chip-select line failed.
    ChipSelect(PinE),
    /// The configured SPI clock was 0 Hz.
    InvalidFrequency(u32),
}

impl<BusE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<BusE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "SPI transfer failed: {e:?}"),
            Self::ChipSelect(e) => write!(f, "chip-select pin error: {e:?}"),
            Self::InvalidFrequency(hz) => write!(f, "invalid SPI frequency: {hz} Hz"),
        }
    }
}

#[cfg(feature = "std")]
impl<BusE: fmt::Debug, PinE: fmt::Debug> std::error::Error for Error<BusE, PinE> {}

/// Errors returned by framebuffer operations that take external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Image is larger than the (rotated) drawing area.
    ImageTooLarge {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageTooLarge { width, height } => {
                write!(f, "image {width}x{height} does not fit the display")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DrawError {}
