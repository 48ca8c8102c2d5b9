//! Driver for the Pimoroni Unicorn HAT HD
//!
//! The Unicorn HAT HD is a 16×16 matrix of RGB LEDs behind a small
//! microcontroller that listens on SPI. This crate keeps a 24-bit
//! framebuffer in RAM, offers drawing primitives on it, and pushes it to the
//! panel with a single [`Display::show`] call.
//!
//! # Layers
//!
//! ```text
//! Application
//!         ↓
//! Display (show, rotation, DrawTarget)
//!         ↓
//! Framebuffer (pixels, lines, circles, text, images, scroll)
//!         ↓
//! platform contracts (ConfigurableSpi, ChipSelect, lock_blocking)
//! ```
//!
//! # Wire format
//!
//! Each frame is the start-of-frame byte `0x72` followed by the 768
//! framebuffer bytes (row-major, R G B per pixel), clocked in SPI mode 0.
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls
//! - `defmt`: on-target logging and `defmt::Format` derives
//! - `tracing`: host logging
//!
//! # Example
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use embassy_sync::mutex::Mutex;
//! use embedded_graphics::pixelcolor::Rgb888;
//! use embedded_graphics::prelude::*;
//! use platform::ConfigurableSpi;
//! use unicornhathd::{Display, DisplayConfig};
//!
//! fn draw<SPI: ConfigurableSpi, CS: embedded_hal::digital::OutputPin>(
//!     bus: &Mutex<NoopRawMutex, SPI>,
//!     cs: CS,
//! ) -> Result<(), unicornhathd::Error<SPI::Error, CS::Error>> {
//!     let mut display = Display::new(bus, cs, DisplayConfig::default())?;
//!     display.framebuffer_mut().fill(Rgb888::BLACK);
//!     display.framebuffer_mut().set_pixel(0, 0, Rgb888::RED);
//!     display.show()
//! }
//! ```

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
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // x0/x1, dx/dy are the natural names in rasterizers

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod rotation;
pub mod text;

pub use config::{DisplayConfig, DEFAULT_FREQUENCY_HZ, DEPTH, HEIGHT, START_OF_FRAME, WIDTH};
pub use display::{Display, DisplayResult};
pub use error::{DrawError, Error};
pub use framebuffer::Framebuffer;
pub use rotation::Rotation;
pub use text::TextOptions;
