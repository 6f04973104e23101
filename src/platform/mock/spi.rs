//! Mock SPI implementation for testing

use crate::platform::{
    error::{PlatformError, SpiError},
    traits::{SpiConfig, SpiInterface},
    Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// SPI transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpiTransaction {
    /// Transfer (full-duplex)
    Transfer { write: Vec<u8>, read: Vec<u8> },
    /// Write only
    Write { data: Vec<u8> },
    /// Read only
    Read { len: usize },
}

/// Mock SPI implementation
///
/// Records all transactions for test verification and allows
/// pre-programming expected read data.
#[derive(Debug)]
pub struct MockSpi {
    config: SpiConfig,
    transactions: RefCell<Vec<SpiTransaction>>,
    read_data: RefCell<Vec<u8>>,
    repeat_read_data: Option<Vec<u8>>,
    fail_with: Option<SpiError>,
}

impl MockSpi {
    /// Create a new mock SPI
    pub fn new(config: SpiConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
            repeat_read_data: None,
            fail_with: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<SpiTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations (replaces the queue)
    pub fn set_read_data(&mut self, data: &[u8]) {
        *self.read_data.borrow_mut() = data.to_vec();
    }

    /// Append data to the read queue
    pub fn push_read_data(&mut self, data: &[u8]) {
        self.read_data.borrow_mut().extend_from_slice(data);
    }

    /// Return this fixed pattern for every read instead of draining the queue
    pub fn set_repeat_read_data(&mut self, data: &[u8]) {
        self.repeat_read_data = Some(data.to_vec());
    }

    /// Make every subsequent transaction fail with the given error
    pub fn fail_with(&mut self, error: SpiError) {
        self.fail_with = Some(error);
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn fill(&self, buffer: &mut [u8]) {
        if let Some(pattern) = &self.repeat_read_data {
            let to_read = core::cmp::min(buffer.len(), pattern.len());
            buffer[..to_read].copy_from_slice(&pattern[..to_read]);
            return;
        }

        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);
    }

    fn check_fail(&self) -> Result<()> {
        match self.fail_with {
            Some(e) => Err(PlatformError::Spi(e)),
            None => Ok(()),
        }
    }
}

impl SpiInterface for MockSpi {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.check_fail()?;
        self.fill(read_buffer);

        self.transactions
            .borrow_mut()
            .push(SpiTransaction::Transfer {
                write: write_buffer.to_vec(),
                read: read_buffer.to_vec(),
            });

        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.check_fail()?;
        self.transactions.borrow_mut().push(SpiTransaction::Write {
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.check_fail()?;
        self.transactions
            .borrow_mut()
            .push(SpiTransaction::Read { len: buffer.len() });
        self.fill(buffer);
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }
}
