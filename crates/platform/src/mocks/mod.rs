//! Mock implementations for testing
//!
//! [`MockSpiBus`] and [`MockPin`] record every operation into one shared
//! [`EventLog`], so tests can assert the relative order of bus
//! configuration, chip-select edges and data writes. Both support fault
//! injection.

#![cfg(any(test, feature = "std"))]

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::{digital, spi};

use crate::{ConfigurableSpi, SpiConfig};

/// One observed operation on the mock bus or pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// `ConfigurableSpi::configure`
    Configure(SpiConfig),
    /// `SpiBus::write` (and the write half of transfers)
    Write(Vec<u8>),
    /// `SpiBus::flush`
    Flush,
    /// Pin driven high
    PinHigh,
    /// Pin driven low
    PinLow,
}

/// Shared, cloneable event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<BusEvent>>>);

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: BusEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<BusEvent> {
        self.0.borrow().clone()
    }

    /// All bytes written to the bus, concatenated in order.
    pub fn written_bytes(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BusEvent::Write(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Error returned by an injected bus fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

impl spi::Error for MockBusError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// Recording SPI bus with optional fault injection.
pub struct MockSpiBus {
    log: EventLog,
    writes_before_failure: Option<usize>,
    fail_configure: bool,
    writes: usize,
}

impl MockSpiBus {
    /// A bus on which every operation succeeds.
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            writes_before_failure: None,
            fail_configure: false,
            writes: 0,
        }
    }

    /// A bus whose first `writes` writes succeed and every later one fails.
    pub fn failing_after(log: EventLog, writes: usize) -> Self {
        Self {
            writes_before_failure: Some(writes),
            ..Self::new(log)
        }
    }

    /// A bus that rejects configuration.
    pub fn failing_configure(log: EventLog) -> Self {
        Self {
            fail_configure: true,
            ..Self::new(log)
        }
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn record_write(&mut self, bytes: &[u8]) -> Result<(), MockBusError> {
        if self.writes_before_failure.is_some_and(|limit| self.writes >= limit) {
            return Err(MockBusError);
        }
        self.writes = self.writes.saturating_add(1);
        self.log.push(BusEvent::Write(bytes.to_vec()));
        Ok(())
    }
}

impl spi::ErrorType for MockSpiBus {
    type Error = MockBusError;
}

impl spi::SpiBus<u8> for MockSpiBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.record_write(words)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.record_write(write)?;
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.record_write(words)?;
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.push(BusEvent::Flush);
        Ok(())
    }
}

impl ConfigurableSpi for MockSpiBus {
    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockBusError);
        }
        self.log.push(BusEvent::Configure(*config));
        Ok(())
    }
}

/// Error returned by an injected pin fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Recording output pin.
pub struct MockPin {
    log: EventLog,
    fail: bool,
}

impl MockPin {
    /// A pin on which every operation succeeds.
    pub fn new(log: EventLog) -> Self {
        Self { log, fail: false }
    }

    /// A pin that refuses to change level.
    pub fn failing(log: EventLog) -> Self {
        Self { log, fail: true }
    }

    fn drive(&mut self, event: BusEvent) -> Result<(), MockPinError> {
        if self.fail {
            return Err(MockPinError);
        }
        self.log.push(event);
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(BusEvent::PinLow)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(BusEvent::PinHigh)
    }
}
