//! Delay adapter over `embedded_hal::delay::DelayNs`

use crate::platform::{traits::TimerInterface, Result};
use embedded_hal::delay::DelayNs;

/// Wraps an embedded-hal delay source as a platform [`TimerInterface`]
///
/// `now_us` reports accumulated delay time, which is a monotonic lower bound
/// on elapsed time; drivers only use it for spacing, not wall-clock reads.
#[derive(Debug)]
pub struct EhalTimer<D> {
    delay: D,
    elapsed_us: u64,
}

impl<D: DelayNs> EhalTimer<D> {
    /// Wrap an embedded-hal delay source
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            elapsed_us: 0,
        }
    }

    /// Release the wrapped delay source
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> TimerInterface for EhalTimer<D> {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.delay.delay_us(us);
        self.elapsed_us = self.elapsed_us.wrapping_add(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.elapsed_us
    }
}
