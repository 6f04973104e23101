//! OLED W Click driver implementation

use super::interface::OledWBus;
use super::registers;
use crate::platform::{GpioInterface, PlatformError, TimerInterface};

/// OLED W errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus or pin operation failed
    Bus(PlatformError),
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// OLED W configuration
#[derive(Debug, Clone, Copy)]
pub struct OledWConfig {
    /// Contrast applied by `default_cfg`
    pub contrast: u8,
}

impl Default for OledWConfig {
    fn default() -> Self {
        Self {
            contrast: registers::DEFAULT_CONTRAST,
        }
    }
}

/// OLED W Click driver (SSD1306, 96x39)
///
/// Generic over [`OledWBus`], so the same driver body serves both the I2C
/// and the SPI strapping of the board.
pub struct OledW<BUS, RST, TIMER> {
    bus: BUS,
    rst: RST,
    timer: TIMER,
}

impl<BUS, RST, TIMER> OledW<BUS, RST, TIMER>
where
    BUS: OledWBus,
    RST: GpioInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver over an already-selected bus transport
    pub fn new(bus: BUS, rst: RST, timer: TIMER) -> Self {
        Self { bus, rst, timer }
    }

    /// Pulse the hardware reset line and wait for the controller to settle
    pub fn reset(&mut self) -> Result<(), Error> {
        self.rst.set_high()?;
        self.timer.delay_ms(registers::RESET_PULSE_MS)?;
        self.rst.set_low()?;
        self.timer.delay_ms(registers::RESET_PULSE_MS)?;
        self.rst.set_high()?;
        self.timer.delay_ms(registers::RESET_SETTLE_MS)?;
        Ok(())
    }

    /// Hardware reset followed by the vendor initialization sequence
    pub fn default_cfg(&mut self, config: OledWConfig) -> Result<(), Error> {
        self.reset()?;

        self.send_command(registers::CMD_DISPLAY_OFF)?;
        self.send_command(registers::CMD_SET_DISPLAY_CLOCK)?;
        self.send_command(registers::DISPLAY_CLOCK_DIV)?;
        self.send_command(registers::CMD_SET_MULTIPLEX)?;
        self.send_command(registers::MULTIPLEX_RATIO)?;
        self.send_command(registers::CMD_SET_DISPLAY_OFFSET)?;
        self.send_command(0x00)?;
        self.send_command(registers::CMD_SET_START_LINE)?;
        self.send_command(registers::CMD_CHARGE_PUMP)?;
        self.send_command(registers::CHARGE_PUMP_ON)?;
        self.send_command(registers::CMD_SEGMENT_REMAP)?;
        self.send_command(registers::CMD_COM_SCAN_DEC)?;
        self.send_command(registers::CMD_SET_COM_PINS)?;
        self.send_command(registers::COM_PINS_CONFIG)?;
        self.set_contrast(config.contrast)?;
        self.send_command(registers::CMD_DISPLAY_FROM_RAM)?;
        self.send_command(registers::CMD_NORMAL_DISPLAY)?;
        self.send_command(registers::CMD_DISPLAY_ON)?;

        crate::log_info!("SSD1306 initialized");
        Ok(())
    }

    /// Send a raw command byte
    pub fn send_command(&mut self, command: u8) -> Result<(), Error> {
        self.bus.send_command(command)?;
        Ok(())
    }

    /// Set the contrast (0x00 dimmest, 0xFF brightest)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error> {
        self.send_command(registers::CMD_SET_CONTRAST)?;
        self.send_command(contrast)
    }

    /// Wake the panel
    pub fn display_on(&mut self) -> Result<(), Error> {
        self.send_command(registers::CMD_DISPLAY_ON)
    }

    /// Put the panel to sleep, RAM content preserved
    pub fn display_off(&mut self) -> Result<(), Error> {
        self.send_command(registers::CMD_DISPLAY_OFF)
    }

    /// Push a full frame, page by page
    ///
    /// The frame is 5 pages of 96 column bytes, page 0 first, each byte one
    /// 8-pixel column strip with bit 0 at the top.
    pub fn display_picture(&mut self, frame: &[u8; registers::FRAME_SIZE]) -> Result<(), Error> {
        for page in 0..registers::PAGES {
            self.send_command(registers::CMD_PAGE_ADDR | page as u8)?;
            self.send_command(registers::CMD_COLUMN_LOW)?;
            self.send_command(registers::CMD_COLUMN_HIGH)?;
            let row = &frame[page * registers::WIDTH..(page + 1) * registers::WIDTH];
            self.bus.send_data(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::interface::{OledWI2c, OledWSpi};
    use super::*;
    use crate::platform::mock::{
        I2cTransaction, MockGpio, MockI2c, MockSpi, MockTimer, SpiTransaction,
    };

    #[test]
    fn i2c_commands_carry_the_control_byte() {
        let mut i2c = MockI2c::new(Default::default());
        let bus = OledWI2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut oled = OledW::new(bus, MockGpio::new_output(), MockTimer::new());

        oled.set_contrast(0x42).unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x3C,
                data: vec![0x00, 0x81],
            }
        );
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x3C,
                data: vec![0x00, 0x42],
            }
        );
    }

    #[test]
    fn spi_levels_the_dc_pin_per_transfer() {
        let mut spi = MockSpi::new(Default::default());
        let bus = OledWSpi::new(&mut spi, MockGpio::new_output(), MockGpio::new_output());
        let mut oled = OledW::new(bus, MockGpio::new_output(), MockTimer::new());

        oled.display_on().unwrap();

        assert_eq!(
            spi.transactions()[0],
            SpiTransaction::Write {
                data: vec![registers::CMD_DISPLAY_ON],
            }
        );
    }

    #[test]
    fn default_cfg_runs_the_vendor_sequence() {
        let mut i2c = MockI2c::new(Default::default());
        let bus = OledWI2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut oled = OledW::new(bus, MockGpio::new_output(), MockTimer::new());

        oled.default_cfg(OledWConfig::default()).unwrap();

        let commands: Vec<u8> = i2c
            .transactions()
            .iter()
            .map(|t| match t {
                I2cTransaction::Write { data, .. } => data[1],
                other => panic!("unexpected transaction {other:?}"),
            })
            .collect();
        assert_eq!(
            commands,
            vec![
                0xAE, 0xD5, 0x80, 0xA8, 0x27, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0xA1, 0xC8, 0xDA,
                0x12, 0x81, 0x8F, 0xA4, 0xA6, 0xAF,
            ]
        );
    }

    #[test]
    fn frame_is_paged_with_addresses_between_pages() {
        let mut i2c = MockI2c::new(Default::default());
        let bus = OledWI2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut oled = OledW::new(bus, MockGpio::new_output(), MockTimer::new());

        let mut frame = [0u8; registers::FRAME_SIZE];
        frame[0] = 0xAA;
        frame[registers::WIDTH] = 0xBB;
        oled.display_picture(&frame).unwrap();

        let log = i2c.transactions();
        // 5 pages x (3 commands + 1 data burst)
        assert_eq!(log.len(), 20);
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x3C,
                data: vec![0x00, 0xB0],
            }
        );
        // First page data burst, control byte 0x40 then 96 column bytes
        match &log[3] {
            I2cTransaction::Write { data, .. } => {
                assert_eq!(data.len(), registers::WIDTH + 1);
                assert_eq!(data[0], 0x40);
                assert_eq!(data[1], 0xAA);
            }
            other => panic!("unexpected transaction {other:?}"),
        }
        assert_eq!(
            log[4],
            I2cTransaction::Write {
                addr: 0x3C,
                data: vec![0x00, 0xB1],
            }
        );
        match &log[7] {
            I2cTransaction::Write { data, .. } => assert_eq!(data[1], 0xBB),
            other => panic!("unexpected transaction {other:?}"),
        }
    }

    #[test]
    fn reset_pulses_the_line() {
        let mut i2c = MockI2c::new(Default::default());
        let bus = OledWI2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut oled = OledW::new(bus, MockGpio::new_output(), MockTimer::new());

        oled.reset().unwrap();
        assert!(oled.rst.is_high());
        assert!(i2c.transactions().is_empty());
    }
}
