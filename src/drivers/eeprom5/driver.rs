//! EEPROM 5 Click driver implementation

use super::registers;
use crate::platform::{GpioInterface, PlatformError, SpiInterface, TimerInterface};

/// EEPROM 5 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// Address outside the 19-bit memory space
    InvalidAddress,
    /// Access runs past the memory end or crosses a write page boundary
    InvalidLength,
    /// Write-in-progress never cleared within the attempt budget
    Timeout,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// EEPROM 5 Click driver (M95M04)
///
/// The board routes the chip's write-protect and hold lines to mikroBUS
/// GPIOs, so both are under driver control; `init` releases them.
pub struct Eeprom5<SPI, CS, WP, HOLD, TIMER> {
    spi: SPI,
    cs: CS,
    wp: WP,
    hold: HOLD,
    timer: TIMER,
}

impl<SPI, CS, WP, HOLD, TIMER> Eeprom5<SPI, CS, WP, HOLD, TIMER>
where
    SPI: SpiInterface,
    CS: GpioInterface,
    WP: GpioInterface,
    HOLD: GpioInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(spi: SPI, cs: CS, wp: WP, hold: HOLD, timer: TIMER) -> Self {
        Self {
            spi,
            cs,
            wp,
            hold,
            timer,
        }
    }

    /// Park the control lines: CS idle high, hold released, writes unprotected
    pub fn init(&mut self) -> Result<(), Error> {
        self.cs.set_high()?;
        self.hold.set_high()?;
        self.wp.set_high()?;
        Ok(())
    }

    /// Set the write enable latch
    pub fn enable_write(&mut self) -> Result<(), Error> {
        self.command(registers::OP_WREN)
    }

    /// Reset the write enable latch
    pub fn disable_write(&mut self) -> Result<(), Error> {
        self.command(registers::OP_WRDI)
    }

    /// Read the status register
    pub fn read_status(&mut self) -> Result<u8, Error> {
        let mut rx = [0u8; 2];
        self.cs.set_low()?;
        let result = self.spi.transfer(&[registers::OP_RDSR, 0x00], &mut rx);
        self.cs.set_high()?;
        result?;
        Ok(rx[1])
    }

    /// Write the status register (block-protect bits) and wait for the cycle
    /// to finish
    pub fn write_status(&mut self, value: u8) -> Result<(), Error> {
        self.enable_write()?;

        self.cs.set_low()?;
        let result = self.spi.write(&[registers::OP_WRSR, value]);
        self.cs.set_high()?;
        result?;

        self.wait_write_complete()
    }

    /// Read `buffer.len()` bytes starting at `addr`
    ///
    /// Reads may span pages freely; only the memory end bounds them.
    pub fn read_memory(&mut self, addr: u32, buffer: &mut [u8]) -> Result<(), Error> {
        Self::check_bounds(addr, buffer.len())?;

        self.cs.set_low()?;
        let result = self
            .spi
            .write(&Self::instruction(registers::OP_READ, addr))
            .and_then(|_| self.spi.read(buffer));
        self.cs.set_high()?;
        result?;
        Ok(())
    }

    /// Write `data` starting at `addr` within a single 512-byte page
    ///
    /// The write-enable latch is set, the page programmed, and completion
    /// awaited via the write-in-progress flag. A write that would wrap at a
    /// page boundary is rejected before any traffic: the device wraps to the
    /// start of the page and overwrites unrelated bytes.
    pub fn write_memory(&mut self, addr: u32, data: &[u8]) -> Result<(), Error> {
        Self::check_bounds(addr, data.len())?;
        if addr % registers::PAGE_SIZE + data.len() as u32 > registers::PAGE_SIZE {
            return Err(Error::InvalidLength);
        }

        self.enable_write()?;

        self.cs.set_low()?;
        let result = self
            .spi
            .write(&Self::instruction(registers::OP_WRITE, addr))
            .and_then(|_| self.spi.write(data));
        self.cs.set_high()?;
        result?;

        self.wait_write_complete()
    }

    /// Drive the write-protect line (active low protects the status register)
    pub fn set_write_protect(&mut self, protect: bool) -> Result<(), Error> {
        if protect {
            self.wp.set_low()?;
        } else {
            self.wp.set_high()?;
        }
        Ok(())
    }

    /// Drive the hold line (active low pauses an in-flight transaction)
    pub fn set_hold(&mut self, hold: bool) -> Result<(), Error> {
        if hold {
            self.hold.set_low()?;
        } else {
            self.hold.set_high()?;
        }
        Ok(())
    }

    fn wait_write_complete(&mut self) -> Result<(), Error> {
        for _ in 0..registers::MAX_WIP_ATTEMPTS {
            if self.read_status()? & registers::STATUS_WIP == 0 {
                return Ok(());
            }
            self.timer.delay_ms(registers::WIP_POLL_DELAY_MS)?;
        }
        Err(Error::Timeout)
    }

    fn command(&mut self, op: u8) -> Result<(), Error> {
        self.cs.set_low()?;
        let result = self.spi.write(&[op]);
        self.cs.set_high()?;
        result?;
        Ok(())
    }

    fn instruction(op: u8, addr: u32) -> [u8; 4] {
        [
            op,
            (addr >> 16) as u8 & 0x07,
            (addr >> 8) as u8,
            addr as u8,
        ]
    }

    fn check_bounds(addr: u32, len: usize) -> Result<(), Error> {
        if addr >= registers::MEMORY_SIZE {
            return Err(Error::InvalidAddress);
        }
        if len == 0 || addr as usize + len > registers::MEMORY_SIZE as usize {
            return Err(Error::InvalidLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockSpi, MockTimer, SpiTransaction};

    fn driver(
        spi: &mut MockSpi,
    ) -> Eeprom5<&mut MockSpi, MockGpio, MockGpio, MockGpio, MockTimer> {
        Eeprom5::new(
            spi,
            MockGpio::new_output(),
            MockGpio::new_output(),
            MockGpio::new_output(),
            MockTimer::new(),
        )
    }

    #[test]
    fn write_is_enabled_addressed_and_polled() {
        let mut spi = MockSpi::new(Default::default());
        let mut eeprom = driver(&mut spi);

        eeprom.write_memory(0x7_0123, b"abc").unwrap();

        let log = spi.transactions();
        assert_eq!(
            log[0],
            SpiTransaction::Write {
                data: vec![registers::OP_WREN],
            }
        );
        // 19-bit address split across three bytes
        assert_eq!(
            log[1],
            SpiTransaction::Write {
                data: vec![registers::OP_WRITE, 0x07, 0x01, 0x23],
            }
        );
        assert_eq!(
            log[2],
            SpiTransaction::Write {
                data: b"abc".to_vec(),
            }
        );
        // WIP poll (mock status reads back 0 = idle)
        assert_eq!(
            log[3],
            SpiTransaction::Transfer {
                write: vec![registers::OP_RDSR, 0x00],
                read: vec![0x00, 0x00],
            }
        );
    }

    #[test]
    fn read_frames_one_instruction() {
        let mut spi = MockSpi::new(Default::default());
        spi.set_read_data(b"hello");

        let mut eeprom = driver(&mut spi);
        let mut buf = [0u8; 5];
        eeprom.read_memory(0x0000, &mut buf).unwrap();
        assert_eq!(&buf, b"hello");

        let log = spi.transactions();
        assert_eq!(
            log[0],
            SpiTransaction::Write {
                data: vec![registers::OP_READ, 0x00, 0x00, 0x00],
            }
        );
        assert_eq!(log[1], SpiTransaction::Read { len: 5 });
    }

    #[test]
    fn page_boundary_crossing_is_rejected() {
        let mut spi = MockSpi::new(Default::default());
        let mut eeprom = driver(&mut spi);

        // 510 + 4 bytes would wrap inside the page
        assert_eq!(
            eeprom.write_memory(510, &[0u8; 4]),
            Err(Error::InvalidLength)
        );
        assert!(spi.transactions().is_empty());
    }

    #[test]
    fn out_of_space_access_is_rejected() {
        let mut spi = MockSpi::new(Default::default());
        let mut eeprom = driver(&mut spi);

        let mut buf = [0u8; 4];
        assert_eq!(
            eeprom.read_memory(registers::MEMORY_SIZE, &mut buf),
            Err(Error::InvalidAddress)
        );
        assert_eq!(
            eeprom.read_memory(registers::MEMORY_SIZE - 2, &mut buf),
            Err(Error::InvalidLength)
        );
    }

    #[test]
    fn stuck_write_cycle_times_out_within_budget() {
        let mut spi = MockSpi::new(Default::default());
        spi.set_repeat_read_data(&[0x00, registers::STATUS_WIP]);

        let mut eeprom = driver(&mut spi);
        assert_eq!(eeprom.write_memory(0, &[0xAA]), Err(Error::Timeout));

        // WREN + instruction + data + budget-many polls
        assert_eq!(
            spi.transactions().len(),
            3 + registers::MAX_WIP_ATTEMPTS as usize
        );
    }

    #[test]
    fn status_register_write_waits_for_completion() {
        let mut spi = MockSpi::new(Default::default());
        let mut eeprom = driver(&mut spi);

        eeprom.write_status(registers::STATUS_BP_MASK).unwrap();

        let log = spi.transactions();
        assert_eq!(
            log[1],
            SpiTransaction::Write {
                data: vec![registers::OP_WRSR, 0x0C],
            }
        );
    }
}
