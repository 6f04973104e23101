//! SPI adapter over `embedded_hal::spi::SpiBus`

use crate::platform::{
    error::{PlatformError, SpiError},
    traits::SpiInterface,
    Result,
};
use embedded_hal::spi::{Error as _, ErrorKind, SpiBus};

/// Wraps any embedded-hal 1.0 SPI bus as a platform [`SpiInterface`]
///
/// Chip select stays with the caller, matching the platform trait contract:
/// drivers frame their own transactions with a CS GPIO.
#[derive(Debug)]
pub struct EhalSpi<B> {
    bus: B,
}

impl<B: SpiBus> EhalSpi<B> {
    /// Wrap an embedded-hal SPI bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn release(self) -> B {
        self.bus
    }
}

fn map_err<E: embedded_hal::spi::Error>(err: E) -> PlatformError {
    let mapped = match err.kind() {
        ErrorKind::Overrun => SpiError::Overrun,
        ErrorKind::ModeFault => SpiError::ModeFault,
        _ => SpiError::TransferFailed,
    };
    PlatformError::Spi(mapped)
}

impl<B: SpiBus> SpiInterface for EhalSpi<B> {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.bus
            .transfer(read_buffer, write_buffer)
            .and_then(|_| self.bus.flush())
            .map_err(map_err)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.bus
            .write(data)
            .and_then(|_| self.bus.flush())
            .map_err(map_err)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.bus
            .read(buffer)
            .and_then(|_| self.bus.flush())
            .map_err(map_err)
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        // Bus frequency is fixed at HAL construction time in embedded-hal 1.0.
        Err(PlatformError::InvalidConfig)
    }
}
