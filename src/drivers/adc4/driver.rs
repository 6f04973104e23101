//! ADC 4 Click driver implementation

use super::registers;
use crate::platform::{I2cInterface, PlatformError, TimerInterface};

/// ADC 4 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// Conversion never finished within the attempt budget
    Timeout,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// Input selection (command byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputChannel {
    /// Differential VIN+ / VIN- (default)
    #[default]
    Vin,
    /// Internal temperature sensor
    Temperature,
}

impl InputChannel {
    fn bits(self) -> u8 {
        match self {
            InputChannel::Vin => registers::INPUT_VIN,
            InputChannel::Temperature => registers::INPUT_TEMPERATURE,
        }
    }
}

/// Line-frequency rejection mode (command byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rejection {
    /// Simultaneous 50 Hz / 60 Hz rejection (default)
    #[default]
    Both,
    /// 50 Hz only
    Hz50,
    /// 60 Hz only
    Hz60,
}

impl Rejection {
    fn bits(self) -> u8 {
        match self {
            Rejection::Both => registers::REJECT_50_60HZ,
            Rejection::Hz50 => registers::REJECT_50HZ,
            Rejection::Hz60 => registers::REJECT_60HZ,
        }
    }
}

/// ADC 4 configuration
#[derive(Debug, Clone, Copy)]
pub struct Adc4Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Reference voltage in millivolts
    pub vref_mv: f32,
}

impl Default for Adc4Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDR,
            vref_mv: 4096.0,
        }
    }
}

/// ADC 4 Click driver (LTC2485)
///
/// A conversion starts automatically after each result read; [`Self::read_raw`]
/// waits for the end-of-conversion flag with a bounded attempt budget.
pub struct Adc4<I2C, TIMER> {
    i2c: I2C,
    timer: TIMER,
    address: u8,
    vref_mv: f32,
}

impl<I2C, TIMER> Adc4<I2C, TIMER>
where
    I2C: I2cInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(i2c: I2C, timer: TIMER, config: Adc4Config) -> Self {
        Self {
            i2c,
            timer,
            address: config.address,
            vref_mv: config.vref_mv,
        }
    }

    /// Apply the power-up configuration: differential input, 50/60 Hz
    /// rejection, 1x speed, and wait for the first conversion
    pub fn init(&mut self) -> Result<(), Error> {
        self.write_config(registers::INPUT_VIN | registers::REJECT_50_60HZ)?;
        self.wait_ready()?;
        crate::log_info!("ADC 4 ready");
        Ok(())
    }

    /// Write a new command byte
    ///
    /// The update flag is OR-ed in; option bits come from [`registers`].
    pub fn write_config(&mut self, options: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[registers::CMD_UPDATE | options])?;
        Ok(())
    }

    /// Select the input and rejection mode
    pub fn set_config(&mut self, channel: InputChannel, rejection: Rejection) -> Result<(), Error> {
        self.write_config(channel.bits() | rejection.bits())
    }

    /// Restart conversion with default options and wait until the converter
    /// reports ready
    pub fn reset(&mut self) -> Result<(), Error> {
        self.write_config(registers::INPUT_VIN | registers::REJECT_50_60HZ)?;
        self.wait_ready()
    }

    /// Read one conversion result as a signed code
    ///
    /// Polls the end-of-conversion flag up to
    /// [`registers::MAX_READY_ATTEMPTS`] times before giving up.
    pub fn read_raw(&mut self) -> Result<i32, Error> {
        for _ in 0..registers::MAX_READY_ATTEMPTS {
            let word = self.read_word()?;
            if word[0] & registers::EOC_BUSY_MASK == 0 {
                let magnitude = (u32::from_be_bytes(word) & registers::MAGNITUDE_MASK) as i32;
                return Ok(if word[0] & registers::SIGN_MASK != 0 {
                    -magnitude
                } else {
                    magnitude
                });
            }
            self.timer.delay_ms(registers::READY_POLL_DELAY_MS)?;
        }
        Err(Error::Timeout)
    }

    /// Read the input voltage in millivolts
    ///
    /// `vout = raw * vref / (2^23 - 1)`, signed.
    pub fn get_voltage(&mut self) -> Result<f32, Error> {
        let raw = self.read_raw()?;
        Ok(raw as f32 * self.vref_mv / registers::FULL_SCALE as f32)
    }

    fn wait_ready(&mut self) -> Result<(), Error> {
        for _ in 0..registers::MAX_READY_ATTEMPTS {
            if self.read_word()?[0] & registers::EOC_BUSY_MASK == 0 {
                return Ok(());
            }
            self.timer.delay_ms(registers::READY_POLL_DELAY_MS)?;
        }
        Err(Error::Timeout)
    }

    fn read_word(&mut self) -> Result<[u8; 4], Error> {
        let mut word = [0u8; 4];
        self.i2c.read(self.address, &mut word)?;
        Ok(word)
    }
}
