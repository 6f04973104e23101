//! Bus dispatch for the dual-interface OLED W board
//!
//! The command/data distinction travels differently per bus: I2C prefixes
//! each transfer with a control byte, SPI levels a dedicated D/C pin. The
//! [`OledWBus`] trait hides that behind two operations.

use super::registers;
use crate::platform::{GpioInterface, I2cInterface, Result, SpiInterface};

/// Command/data transport over whichever bus the board is strapped to
pub trait OledWBus {
    /// Send one command byte
    fn send_command(&mut self, command: u8) -> Result<()>;

    /// Send display data bytes
    fn send_data(&mut self, data: &[u8]) -> Result<()>;
}

/// I2C transport; control byte 0x00 announces commands, 0x40 data
pub struct OledWI2c<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cInterface> OledWI2c<I2C> {
    /// Bind the display to an I2C bus
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2C: I2cInterface> OledWBus for OledWI2c<I2C> {
    fn send_command(&mut self, command: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[registers::CONTROL_COMMAND, command])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<()> {
        // Control byte plus at most one page row
        let mut frame = [0u8; registers::WIDTH + 1];
        frame[0] = registers::CONTROL_DATA;
        for chunk in data.chunks(registers::WIDTH) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()])?;
        }
        Ok(())
    }
}

/// SPI transport; the D/C pin selects command (low) or data (high) and every
/// transaction is framed by the CS pin
pub struct OledWSpi<SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
}

impl<SPI: SpiInterface, CS: GpioInterface, DC: GpioInterface> OledWSpi<SPI, CS, DC> {
    /// Bind the display to an SPI bus with chip-select and D/C pins
    pub fn new(spi: SPI, cs: CS, dc: DC) -> Self {
        Self { spi, cs, dc }
    }

    fn send(&mut self, data: &[u8], is_data: bool) -> Result<()> {
        if is_data {
            self.dc.set_high()?;
        } else {
            self.dc.set_low()?;
        }
        self.cs.set_low()?;
        let result = self.spi.write(data);
        self.cs.set_high()?;
        result
    }
}

impl<SPI: SpiInterface, CS: GpioInterface, DC: GpioInterface> OledWBus for OledWSpi<SPI, CS, DC> {
    fn send_command(&mut self, command: u8) -> Result<()> {
        self.send(&[command], false)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<()> {
        self.send(data, true)
    }
}
