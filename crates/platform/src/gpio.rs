//! Chip-select line control
//!
//! Wraps any [`OutputPin`] so callers speak in terms of selecting and
//! deselecting a device instead of raw logic levels.

use embedded_hal::digital::OutputPin;

/// Level last driven on a [`ChipSelect`] line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

/// Active-low chip-select line.
///
/// The pin is driven low to select the device and high to release it. The
/// wrapper tracks the last level it drove so drivers can check that a
/// transfer never leaves the device selected.
pub struct ChipSelect<P> {
    pin: P,
    state: PinState,
}

impl<P: OutputPin> ChipSelect<P> {
    /// Take ownership of `pin` and drive it to the deselected (high) level.
    ///
    /// A pin that cannot be driven is reported here, before any transfer.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_high()?;
        Ok(Self {
            pin,
            state: PinState::High,
        })
    }

    /// Drive the line low.
    pub fn select(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.state = PinState::Low;
        Ok(())
    }

    /// Drive the line high.
    pub fn deselect(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.state = PinState::High;
        Ok(())
    }

    /// `true` while the device is selected.
    pub fn is_selected(&self) -> bool {
        self.state == PinState::Low
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
