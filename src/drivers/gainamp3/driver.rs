//! Gain AMP 3 Click driver implementation
//!
//! Every SPI frame carries a trailing CRC-8 byte; the chip rejects writes
//! with a bad check byte and appends one to every read-back, which the
//! driver verifies before handing the value out.

use super::registers;
use crate::platform::{GpioInterface, PlatformError, SpiInterface, TimerInterface};

/// Gain AMP 3 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// Read-back check byte did not match the computed CRC
    Crc,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// Closed-loop gain setting (GAIN_MUX code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gain {
    /// 1/16 V/V
    X1Over16,
    /// 1/8 V/V
    X1Over8,
    /// 1/4 V/V
    X1Over4,
    /// 1/2 V/V
    X1Over2,
    /// 1 V/V (default)
    #[default]
    X1,
    /// 2 V/V
    X2,
    /// 4 V/V
    X4,
    /// 8 V/V
    X8,
    /// 16 V/V
    X16,
    /// 32 V/V
    X32,
    /// 64 V/V
    X64,
    /// 128 V/V
    X128,
}

impl Gain {
    /// GAIN_MUX field code
    pub fn code(self) -> u8 {
        match self {
            Gain::X1Over16 => 0x00,
            Gain::X1Over8 => 0x01,
            Gain::X1Over4 => 0x02,
            Gain::X1Over2 => 0x03,
            Gain::X1 => 0x04,
            Gain::X2 => 0x05,
            Gain::X4 => 0x06,
            Gain::X8 => 0x07,
            Gain::X16 => 0x08,
            Gain::X32 => 0x09,
            Gain::X64 => 0x0A,
            Gain::X128 => 0x0B,
        }
    }
}

/// Input channel selection (INPUT_MUX field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMux {
    /// All inputs disconnected
    Off,
    /// Differential input pair 1 (default)
    #[default]
    Channel1,
    /// Differential input pair 2
    Channel2,
}

impl InputMux {
    /// Register value for INPUT_MUX
    pub fn register_value(self) -> u8 {
        match self {
            InputMux::Off => 0x00,
            InputMux::Channel1 => 0x40,
            InputMux::Channel2 => 0x80,
        }
    }
}

/// CRC-8 over `data`, polynomial x^8 + x^2 + x + 1, init 0x00, no reflection
pub fn calculate_crc(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ registers::CRC_POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Gain AMP 3 configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct GainAmp3Config {
    /// Gain applied by `init`
    pub gain: Gain,
    /// Input channel routed by `init`
    pub input: InputMux,
}

/// Gain AMP 3 Click driver (ADA4254)
pub struct GainAmp3<SPI, CS, TIMER> {
    spi: SPI,
    cs: CS,
    timer: TIMER,
    config: GainAmp3Config,
}

impl<SPI, CS, TIMER> GainAmp3<SPI, CS, TIMER>
where
    SPI: SpiInterface,
    CS: GpioInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(spi: SPI, cs: CS, timer: TIMER, config: GainAmp3Config) -> Self {
        Self {
            spi,
            cs,
            timer,
            config,
        }
    }

    /// Soft-reset the amplifier and apply the configured gain and input mux
    pub fn init(&mut self) -> Result<(), Error> {
        self.cs.set_high()?;
        self.write_register(registers::REG_RESET, registers::RESET_SW)?;
        self.timer.delay_ms(registers::RESET_DELAY_MS)?;
        self.set_gain(self.config.gain)?;
        self.set_input_mux(self.config.input)?;
        crate::log_info!("ADA4254 configured");
        Ok(())
    }

    /// Write one register, check byte appended
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let frame = [
            reg & !registers::SPI_READ,
            value,
            calculate_crc(&[reg & !registers::SPI_READ, value]),
        ];
        self.cs.set_low()?;
        let result = self.spi.write(&frame);
        self.cs.set_high()?;
        result?;
        Ok(())
    }

    /// Read one register, verifying the check byte the chip returns
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error> {
        let tx = [reg | registers::SPI_READ, 0x00, 0x00];
        let mut rx = [0u8; 3];

        self.cs.set_low()?;
        let result = self.spi.transfer(&tx, &mut rx);
        self.cs.set_high()?;
        result?;

        let expected = calculate_crc(&[reg | registers::SPI_READ, rx[1]]);
        if rx[2] != expected {
            crate::log_warn!("ADA4254 CRC mismatch on reg {:#04x}", reg);
            return Err(Error::Crc);
        }
        Ok(rx[1])
    }

    /// Program the gain mux field
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error> {
        self.config.gain = gain;
        let current = self.read_register(registers::REG_GAIN_MUX)?;
        let value =
            (current & !registers::GAIN_MUX_MASK) | (gain.code() << registers::GAIN_MUX_SHIFT);
        self.write_register(registers::REG_GAIN_MUX, value)
    }

    /// Route the input multiplexer
    pub fn set_input_mux(&mut self, input: InputMux) -> Result<(), Error> {
        self.config.input = input;
        self.write_register(registers::REG_INPUT_MUX, input.register_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockSpi, MockTimer, SpiTransaction};

    fn driver(
        spi: &mut MockSpi,
        config: GainAmp3Config,
    ) -> GainAmp3<&mut MockSpi, MockGpio, MockTimer> {
        GainAmp3::new(spi, MockGpio::new_output(), MockTimer::new(), config)
    }

    #[test]
    fn crc_matches_known_vectors() {
        assert_eq!(calculate_crc(b"123456789"), 0xF4);
        assert_eq!(calculate_crc(&[0x01]), 0x07);
        assert_eq!(calculate_crc(&[0x00]), 0x00);
    }

    #[test]
    fn writes_carry_a_check_byte() {
        let mut spi = MockSpi::new(Default::default());
        let mut amp = driver(&mut spi, GainAmp3Config::default());

        amp.write_register(registers::REG_RESET, registers::RESET_SW)
            .unwrap();

        assert_eq!(
            spi.transactions()[0],
            SpiTransaction::Write {
                data: vec![0x01, 0x01, calculate_crc(&[0x01, 0x01])],
            }
        );
    }

    #[test]
    fn read_verifies_the_returned_crc() {
        let mut spi = MockSpi::new(Default::default());
        let value = 0x24;
        let good = calculate_crc(&[registers::REG_GAIN_MUX | registers::SPI_READ, value]);
        spi.push_read_data(&[0x00, value, good]);

        let mut amp = driver(&mut spi, GainAmp3Config::default());
        assert_eq!(amp.read_register(registers::REG_GAIN_MUX), Ok(value));
    }

    #[test]
    fn corrupted_read_is_rejected() {
        let mut spi = MockSpi::new(Default::default());
        spi.push_read_data(&[0x00, 0x24, 0xFF]);

        let mut amp = driver(&mut spi, GainAmp3Config::default());
        assert_eq!(amp.read_register(registers::REG_GAIN_MUX), Err(Error::Crc));
    }

    #[test]
    fn gain_code_lands_in_the_mux_field() {
        let mut spi = MockSpi::new(Default::default());
        // Read-back of GAIN_MUX with the excitation bits set
        let addr = registers::REG_GAIN_MUX | registers::SPI_READ;
        spi.push_read_data(&[0x00, 0x03, calculate_crc(&[addr, 0x03])]);

        let mut amp = driver(&mut spi, GainAmp3Config::default());
        amp.set_gain(Gain::X16).unwrap();

        // 0x08 << 3 merged over the preserved low bits
        let expected = 0x43;
        assert_eq!(
            spi.transactions()[1],
            SpiTransaction::Write {
                data: vec![0x00, expected, calculate_crc(&[0x00, expected])],
            }
        );
    }

    #[test]
    fn input_mux_is_programmed_directly() {
        let mut spi = MockSpi::new(Default::default());
        let mut amp = driver(&mut spi, GainAmp3Config::default());

        amp.set_input_mux(InputMux::Channel2).unwrap();
        assert_eq!(
            spi.transactions()[0],
            SpiTransaction::Write {
                data: vec![0x06, 0x80, calculate_crc(&[0x06, 0x80])],
            }
        );
    }
}
