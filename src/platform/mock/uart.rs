//! Mock UART implementation for testing

use crate::platform::{
    traits::{UartConfig, UartInterface},
    Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data,
/// allowing unit tests to verify UART operations without hardware.
///
/// # Example
///
/// ```ignore
/// use click_drivers::platform::mock::MockUart;
/// use click_drivers::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
///
/// uart.write(b"AT\r\n").unwrap();
/// assert_eq!(uart.tx_buffer(), b"AT\r\n");
///
/// uart.inject_rx_data(b"+AT: OK\r\n");
/// let mut buf = [0u8; 9];
/// let n = uart.read(&mut buf).unwrap();
/// assert_eq!(&buf[..n], b"+AT: OK\r\n");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: RefCell<Vec<u8>>,
    rx_buffer: RefCell<Vec<u8>>,
    /// Maximum bytes handed out per read call (simulates slow arrival)
    rx_chunk: usize,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: RefCell::new(Vec::new()),
            rx_buffer: RefCell::new(Vec::new()),
            rx_chunk: usize::MAX,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.borrow().clone()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.borrow_mut().clear();
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.borrow_mut().extend_from_slice(data);
    }

    /// Limit how many bytes each read call returns
    ///
    /// Simulates data trickling in, so response-polling loops take several
    /// iterations in tests.
    pub fn set_rx_chunk_size(&mut self, chunk: usize) {
        self.rx_chunk = chunk;
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut rx = self.rx_buffer.borrow_mut();
        let to_read = buffer.len().min(rx.len()).min(self.rx_chunk);

        buffer[..to_read].copy_from_slice(&rx[..to_read]);
        rx.drain(..to_read);

        Ok(to_read)
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        self.config.baud_rate = baud;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_zero_when_empty() {
        let mut uart = MockUart::new(Default::default());
        let mut buf = [0u8; 8];
        assert_eq!(uart.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn chunked_reads_trickle_data() {
        let mut uart = MockUart::new(Default::default());
        uart.set_rx_chunk_size(2);
        uart.inject_rx_data(b"OK\r\n");

        let mut buf = [0u8; 8];
        assert_eq!(uart.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"OK");
        assert_eq!(uart.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"\r\n");
    }
}
