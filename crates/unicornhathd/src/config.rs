//! Panel geometry, wire constants and construction-time configuration
//!
//! Width, height and colour depth are fixed by the hardware. The SPI clock
//! is the only knob.
//!
//! # Frame layout
//!
//! ```text
//! byte 0        : 0x72 (start of frame)
//! bytes 1..=768 : pixel (0,0) R G B, pixel (1,0) R G B, ... pixel (15,15) R G B
//! ```

use platform::SpiConfig;

/// Panel width in pixels.
pub const WIDTH: usize = 16;

/// Panel height in pixels.
pub const HEIGHT: usize = 16;

/// Bits per colour channel.
pub const DEPTH: u8 = 8;

/// Bytes per pixel (R, G, B).
pub const BYTES_PER_PIXEL: usize = 3;

/// Framebuffer payload size: 16 × 16 × 3 = 768 bytes.
pub const FRAME_BYTES: usize = WIDTH * HEIGHT * BYTES_PER_PIXEL;

/// Full frame on the wire, start-of-frame byte included: 769 bytes.
pub const FRAME_LEN: usize = FRAME_BYTES + 1;

/// Marker the panel firmware expects before the pixel payload.
pub const START_OF_FRAME: u8 = 0x72;

/// Default SPI clock: 5 MHz.
pub const DEFAULT_FREQUENCY_HZ: u32 = 5_000_000;

/// Construction-time options for [`crate::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// SPI clock used for `show()` transfers, in Hz. Must be non-zero.
    pub frequency_hz: u32,
}

impl DisplayConfig {
    /// Configuration with a custom SPI clock.
    pub const fn with_frequency(frequency_hz: u32) -> Self {
        Self { frequency_hz }
    }

    /// Bus settings applied before every frame: mode 0, MSB first.
    pub const fn spi_config(&self) -> SpiConfig {
        SpiConfig::mode0(self.frequency_hz)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::with_frequency(DEFAULT_FREQUENCY_HZ)
    }
}
