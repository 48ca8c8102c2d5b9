//! Collaborator contracts for SPI-attached LED matrix drivers
//!
//! The driver crates never talk to a concrete HAL. They depend on the
//! contracts in this crate, which sit on top of `embedded-hal` 1.0:
//!
//! ```text
//! Application
//!         ↓
//! Display driver (unicornhathd)
//!         ↓
//! Platform contracts (this crate)
//!         ↓
//! embedded-hal SpiBus / OutputPin  +  embassy-sync Mutex
//!         ↓
//! Board HAL (external)
//! ```
//!
//! # Contracts
//!
//! - [`ConfigurableSpi`] - an [`embedded_hal::spi::SpiBus`] whose clock and
//!   mode can be changed per transfer
//! - [`lock_blocking`] - spin until a bus shared through an
//!   [`embassy_sync::mutex::Mutex`] becomes available
//! - [`ChipSelect`] - active-low chip-select line over any
//!   [`embedded_hal::digital::OutputPin`]
//!
//! # Features
//!
//! - `std`: the [`mocks`] module (host tests)
//! - `defmt`: `defmt::Format` derives

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide

pub mod gpio;
pub mod peripheral;
pub mod shared_bus;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use gpio::{ChipSelect, PinState};
pub use peripheral::{BitOrder, ConfigurableSpi, SpiConfig, SpiMode};
pub use shared_bus::lock_blocking;
