//! Bus dispatch for the dual-interface Compass 4 board
//!
//! The board straps to either I2C or SPI; the choice is made once at
//! construction by picking the implementation handed to the driver, after
//! which register access is uniform.

use super::registers;
use crate::platform::{GpioInterface, I2cInterface, Result, SpiInterface};

/// Register access over whichever bus the board is strapped to
pub trait Compass4Bus {
    /// Read consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<()>;

    /// Write one register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()>;
}

/// I2C transport
pub struct Compass4I2c<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cInterface> Compass4I2c<I2C> {
    /// Bind the driver to an I2C bus
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2C: I2cInterface> Compass4Bus for Compass4I2c<I2C> {
    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<()> {
        self.i2c.write_read(self.address, &[reg], buffer)
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c.write(self.address, &[reg, value])
    }
}

/// SPI transport; the read flag rides on the register address top bit and
/// every transaction is framed by the CS pin
pub struct Compass4Spi<SPI, CS> {
    spi: SPI,
    cs: CS,
}

/// Scratch size for one full-duplex frame (address byte + payload)
const SPI_FRAME_LEN: usize = 16;

impl<SPI: SpiInterface, CS: GpioInterface> Compass4Spi<SPI, CS> {
    /// Bind the driver to an SPI bus with a dedicated chip-select pin
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }
}

impl<SPI: SpiInterface, CS: GpioInterface> Compass4Bus for Compass4Spi<SPI, CS> {
    fn read_registers(&mut self, reg: u8, buffer: &mut [u8]) -> Result<()> {
        // One address byte plus the payload per frame, full duplex. Reads
        // longer than the scratch buffers continue at the next register
        // address in a fresh frame.
        let mut tx = [0u8; SPI_FRAME_LEN];
        let mut rx = [0u8; SPI_FRAME_LEN];

        for (i, chunk) in buffer.chunks_mut(SPI_FRAME_LEN - 1).enumerate() {
            let frame = chunk.len() + 1;
            tx[0] = reg.wrapping_add((i * (SPI_FRAME_LEN - 1)) as u8) | registers::SPI_READ;

            self.cs.set_low()?;
            let result = self.spi.transfer(&tx[..frame], &mut rx[..frame]);
            self.cs.set_high()?;
            result?;

            chunk.copy_from_slice(&rx[1..frame]);
        }
        Ok(())
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.cs.set_low()?;
        let result = self.spi.write(&[reg & !registers::SPI_READ, value]);
        self.cs.set_high()?;
        result
    }
}
