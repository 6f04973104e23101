//! UART interface trait
//!
//! This module defines the serial communication interface that platform implementations must provide.

use crate::platform::Result;

/// UART parity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartParity {
    /// No parity bit
    None,
    /// Even parity
    Even,
    /// Odd parity
    Odd,
}

/// UART stop bit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartStopBits {
    /// One stop bit
    One,
    /// Two stop bits
    Two,
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Data bits per frame (typically 8)
    pub data_bits: u8,
    /// Stop bits
    pub stop_bits: UartStopBits,
    /// Parity
    pub parity: UartParity,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200, // 8N1 at 115200 baud
            data_bits: 8,
            stop_bits: UartStopBits::One,
            parity: UartParity::None,
        }
    }
}

/// UART interface trait
///
/// Platform implementations must provide this interface for serial communication.
/// Reads are non-blocking in the sense that they return however many bytes are
/// currently available (possibly zero); callers that need a full response poll
/// with an explicit attempt budget.
pub trait UartInterface {
    /// Write data, returning the number of bytes accepted
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the transmitter fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read available data into `buffer`, returning the number of bytes read
    ///
    /// Returns `Ok(0)` when no data is pending.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` on framing, parity, or overrun errors.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Set the baud rate
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidBaudRate)` if the rate
    /// cannot be achieved with the current clock configuration.
    fn set_baud_rate(&mut self, baud: u32) -> Result<()>;
}

impl<T: UartInterface + ?Sized> UartInterface for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        T::write(self, data)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        T::read(self, buffer)
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        T::set_baud_rate(self, baud)
    }
}
