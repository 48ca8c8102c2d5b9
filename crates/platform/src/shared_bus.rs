//! Exclusive access to a bus shared between peripherals
//!
//! The bus lives inside an [`embassy_sync::mutex::Mutex`]. Async tasks can
//! `lock().await` it; blocking drivers use [`lock_blocking`], which polls
//! `try_lock` in a tight loop.

use core::hint::spin_loop;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

/// Spin until the bus is free and return its guard.
///
/// There is no timeout: if another owner never releases the bus this call
/// never returns. Dropping the guard releases the bus on every exit path,
/// including early returns through `?`.
pub fn lock_blocking<M: RawMutex, T: ?Sized>(bus: &Mutex<M, T>) -> MutexGuard<'_, M, T> {
    loop {
        if let Ok(guard) = bus.try_lock() {
            return guard;
        }
        spin_loop();
    }
}
