//! Timer interface trait
//!
//! Blocking delay and monotonic time source used by drivers for power-up
//! settling times and conversion waits.

use crate::platform::Result;

/// Timer interface trait
pub trait TimerInterface {
    /// Block for `us` microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be represented.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for `ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be represented.
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Microseconds since an arbitrary epoch (typically boot)
    fn now_us(&self) -> u64;
}

impl<T: TimerInterface + ?Sized> TimerInterface for &mut T {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        T::delay_us(self, us)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        T::delay_ms(self, ms)
    }

    fn now_us(&self) -> u64 {
        T::now_us(self)
    }
}
