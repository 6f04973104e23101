//! I2C adapter over `embedded_hal::i2c::I2c`

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::I2cInterface,
    Result,
};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

/// Wraps any embedded-hal 1.0 I2C bus as a platform [`I2cInterface`]
#[derive(Debug)]
pub struct EhalI2c<B> {
    bus: B,
}

impl<B: I2c> EhalI2c<B> {
    /// Wrap an embedded-hal I2C bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn release(self) -> B {
        self.bus
    }
}

fn map_err<E: embedded_hal::i2c::Error>(err: E) -> PlatformError {
    let mapped = match err.kind() {
        ErrorKind::Bus => I2cError::BusError,
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cError::InvalidAddress,
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        _ => I2cError::BusError,
    };
    PlatformError::I2c(mapped)
}

impl<B: I2c> I2cInterface for EhalI2c<B> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.bus.write(addr, data).map_err(map_err)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.bus.read(addr, buffer).map_err(map_err)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(map_err)
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        // Bus frequency is fixed at HAL construction time in embedded-hal 1.0.
        Err(PlatformError::InvalidConfig)
    }
}
