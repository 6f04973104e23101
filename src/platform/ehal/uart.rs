//! UART adapter over `embedded_io` blocking serial traits

use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
    Result,
};
use embedded_io::{Read, ReadReady, Write};

/// Wraps an embedded-io serial port as a platform [`UartInterface`]
///
/// Requires `ReadReady` so reads can return `Ok(0)` instead of blocking when
/// no data is pending, per the platform trait contract.
#[derive(Debug)]
pub struct EhalUart<S> {
    serial: S,
}

impl<S: Read + ReadReady + Write> EhalUart<S> {
    /// Wrap an embedded-io serial port
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Release the wrapped port
    pub fn release(self) -> S {
        self.serial
    }
}

impl<S: Read + ReadReady + Write> UartInterface for EhalUart<S> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.serial
            .write(data)
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let ready = self
            .serial
            .read_ready()
            .map_err(|_| PlatformError::Uart(UartError::ReadFailed))?;
        if !ready {
            return Ok(0);
        }
        self.serial
            .read(buffer)
            .map_err(|_| PlatformError::Uart(UartError::ReadFailed))
    }

    fn set_baud_rate(&mut self, _baud: u32) -> Result<()> {
        // Baud rate is fixed at HAL construction time for embedded-io ports.
        Err(PlatformError::Uart(UartError::InvalidBaudRate))
    }
}
