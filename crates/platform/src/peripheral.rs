//! SPI peripheral contract
//!
//! `embedded-hal` 1.0 deliberately leaves bus configuration out of
//! [`SpiBus`]. Devices that share one bus at different clocks need to
//! reconfigure it on every transfer, so the contract adds exactly that.

use embedded_hal::spi::{Mode, Phase, Polarity, SpiBus};

/// An SPI bus that can be reconfigured between transfers.
///
/// Board support crates implement this for their HAL's SPI type, mapping
/// [`SpiConfig`] onto the peripheral registers.
pub trait ConfigurableSpi: SpiBus<u8> {
    /// Apply clock frequency, mode and bit order for the next transfers.
    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error>;
}

impl<T: ConfigurableSpi + ?Sized> ConfigurableSpi for &mut T {
    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        T::configure(self, config)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// SPI mode (CPOL, CPHA)
    pub mode: SpiMode,
    /// Bit order
    pub bit_order: BitOrder,
}

impl SpiConfig {
    /// Mode 0, MSB first, at `frequency` Hz.
    pub const fn mode0(frequency: u32) -> Self {
        Self {
            frequency,
            mode: SpiMode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

/// SPI modes (CPOL, CPHA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl SpiMode {
    /// Clock polarity (CPOL).
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Mode0 | Self::Mode1 => Polarity::IdleLow,
            Self::Mode2 | Self::Mode3 => Polarity::IdleHigh,
        }
    }

    /// Clock phase (CPHA).
    pub const fn phase(self) -> Phase {
        match self {
            Self::Mode0 | Self::Mode2 => Phase::CaptureOnFirstTransition,
            Self::Mode1 | Self::Mode3 => Phase::CaptureOnSecondTransition,
        }
    }
}

impl From<SpiMode> for Mode {
    fn from(mode: SpiMode) -> Self {
        Mode {
            polarity: mode.polarity(),
            phase: mode.phase(),
        }
    }
}

/// Bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}
