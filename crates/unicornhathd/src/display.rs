//! Display handle: framebuffer plus the SPI frame transfer
//!
//! # Transfer sequence
//!
//! ```text
//! lock bus ─→ configure (mode 0) ─→ CS low ─→ 0x72 ─→ framebuffer ─→ flush ─→ CS high ─→ unlock
//! ```
//!
//! Chip-select is driven high again whenever it was driven low, even if a
//! write failed, and the bus guard is dropped on every exit path.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi;
use platform::{lock_blocking, ChipSelect, ConfigurableSpi};

use crate::config::{DisplayConfig, DEPTH, HEIGHT, START_OF_FRAME, WIDTH};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::rotation::Rotation;

/// Result type for display operations.
pub type DisplayResult<SPI, CS> =
    Result<(), Error<<SPI as spi::ErrorType>::Error, <CS as digital::ErrorType>::Error>>;

/// Unicorn HAT HD on a shared SPI bus.
///
/// Drawing happens on the in-memory [`Framebuffer`]; nothing reaches the
/// panel until [`Display::show`].
pub struct Display<'a, M, SPI, CS>
where
    M: RawMutex,
    SPI: ConfigurableSpi,
    CS: OutputPin,
{
    bus: &'a Mutex<M, SPI>,
    chip_select: ChipSelect<CS>,
    config: DisplayConfig,
    framebuffer: Framebuffer<WIDTH, HEIGHT>,
}

impl<'a, M, SPI, CS> Display<'a, M, SPI, CS>
where
    M: RawMutex,
    SPI: ConfigurableSpi,
    CS: OutputPin,
{
    /// Create a display with a black framebuffer.
    ///
    /// Drives `chip_select` high straight away so the panel ignores any
    /// traffic for other devices on the bus. The bus itself is not touched.
    pub fn new(
        bus: &'a Mutex<M, SPI>,
        chip_select: CS,
        config: DisplayConfig,
    ) -> Result<Self, Error<SPI::Error, CS::Error>> {
        if config.frequency_hz == 0 {
            return Err(Error::InvalidFrequency(config.frequency_hz));
        }
        let chip_select = ChipSelect::new(chip_select).map_err(Error::ChipSelect)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Unicorn HAT HD ready, SPI at {=u32} Hz", config.frequency_hz);
        #[cfg(feature = "tracing")]
        tracing::debug!(frequency_hz = config.frequency_hz, "Unicorn HAT HD ready");

        Ok(Self {
            bus,
            chip_select,
            config,
            framebuffer: Framebuffer::new(),
        })
    }

    /// Push the framebuffer to the panel.
    ///
    /// Blocks until the shared bus is free. A bus error wins over a
    /// chip-select error when both occur. The framebuffer is left as it is,
    /// so calling `show` again retransmits the same frame.
    pub fn show(&mut self) -> DisplayResult<SPI, CS> {
        let result = self.transfer();

        match &result {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("frame sent ({=usize} bytes)", crate::config::FRAME_LEN);
                #[cfg(feature = "tracing")]
                tracing::trace!(bytes = crate::config::FRAME_LEN, "frame sent");
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("frame transfer failed");
                #[cfg(feature = "tracing")]
                tracing::warn!(error = ?_e, "frame transfer failed");
            }
        }

        result
    }

    fn transfer(&mut self) -> DisplayResult<SPI, CS> {
        let mut bus = lock_blocking(self.bus);

        bus.configure(&self.config.spi_config()).map_err(Error::Bus)?;

        if let Err(e) = self.chip_select.select() {
            // Leave the line released if the pin can still be driven at all.
            let _ = self.chip_select.deselect();
            return Err(Error::ChipSelect(e));
        }

        let sent = bus
            .write(&[START_OF_FRAME])
            .and_then(|()| bus.write(self.framebuffer.as_bytes()))
            .and_then(|()| bus.flush());

        let released = self.chip_select.deselect();
        drop(bus);
        debug_assert!(released.is_err() || !self.chip_select.is_selected());

        sent.map_err(Error::Bus)?;
        released.map_err(Error::ChipSelect)
    }

    /// Read access to the framebuffer.
    pub fn framebuffer(&self) -> &Framebuffer<WIDTH, HEIGHT> {
        &self.framebuffer
    }

    /// Draw into the framebuffer.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<WIDTH, HEIGHT> {
        &mut self.framebuffer
    }

    /// Current drawing rotation.
    pub fn rotation(&self) -> Rotation {
        self.framebuffer.rotation()
    }

    /// Rotation for later drawing calls. Existing pixels do not move.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.framebuffer.set_rotation(rotation);
    }

    /// Physical width in pixels.
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Physical height in pixels.
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Bits per colour channel.
    pub const fn depth(&self) -> u8 {
        DEPTH
    }

    /// SPI clock used for transfers, in Hz.
    pub const fn frequency(&self) -> u32 {
        self.config.frequency_hz
    }

    /// Give back the chip-select pin. The bus stays with its owner.
    pub fn release(self) -> CS {
        self.chip_select.release()
    }
}

impl<M, SPI, CS> OriginDimensions for Display<'_, M, SPI, CS>
where
    M: RawMutex,
    SPI: ConfigurableSpi,
    CS: OutputPin,
{
    fn size(&self) -> Size {
        self.framebuffer.logical_size()
    }
}

impl<M, SPI, CS> DrawTarget for Display<'_, M, SPI, CS>
where
    M: RawMutex,
    SPI: ConfigurableSpi,
    CS: OutputPin,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.clear(color)
    }
}
