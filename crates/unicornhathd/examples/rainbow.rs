//! Fill the panel with the colour wheel and push one frame.
//!
//! Runs on the host against the recording mock bus, so the frame bytes can
//! be inspected without hardware.
//!
//! Run with: RUST_LOG=trace cargo run -p unicornhathd --example rainbow --features std,tracing

#![allow(clippy::arithmetic_side_effects)]

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use platform::mocks::{EventLog, MockPin, MockSpiBus};
use tracing_subscriber::EnvFilter;
use unicornhathd::color::wheel;
use unicornhathd::{Display, DisplayConfig, HEIGHT, WIDTH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let log = EventLog::new();
    let bus: Mutex<NoopRawMutex, _> = Mutex::new(MockSpiBus::new(log.clone()));
    let mut display = Display::new(&bus, MockPin::new(log.clone()), DisplayConfig::default())?;

    let fb = display.framebuffer_mut();
    for i in 0..WIDTH * HEIGHT {
        let x = i32::try_from(i / WIDTH)?;
        let y = i32::try_from(i % WIDTH)?;
        fb.set_pixel(x, y, wheel(u8::try_from(i % 256)?));
    }

    display.show()?;

    let frame = log.written_bytes();
    tracing::info!(
        bytes = frame.len(),
        start_of_frame = frame.first().copied().unwrap_or_default(),
        "frame sent"
    );
    for (row, chunk) in frame.get(1..).unwrap_or_default().chunks(WIDTH * 3).enumerate() {
        tracing::debug!(row, first_pixel = ?chunk.get(..3), "row");
    }
    Ok(())
}
