//! Ambient 21 Click driver implementation

use super::registers;
use crate::platform::{I2cInterface, PlatformError, TimerInterface};

/// Ambient 21 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// ID register did not match the TSL2591 signature
    UnknownDevice(u8),
    /// No valid sample within the attempt budget
    Timeout,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// ALS analog gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gain {
    /// 1x (bright light)
    Low,
    /// 25x (default)
    #[default]
    Medium,
    /// 428x
    High,
    /// 9876x (darkness)
    Max,
}

impl Gain {
    /// Register value for the AGAIN field (bits 5:4)
    pub fn register_value(self) -> u8 {
        match self {
            Gain::Low => 0x00,
            Gain::Medium => 0x10,
            Gain::High => 0x20,
            Gain::Max => 0x30,
        }
    }

    /// Gain multiplier used in the lux equation
    pub fn multiplier(self) -> f32 {
        match self {
            Gain::Low => 1.0,
            Gain::Medium => 25.0,
            Gain::High => 428.0,
            Gain::Max => 9876.0,
        }
    }
}

/// ALS integration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationTime {
    /// 100 ms (default)
    #[default]
    Ms100,
    /// 200 ms
    Ms200,
    /// 300 ms
    Ms300,
    /// 400 ms
    Ms400,
    /// 500 ms
    Ms500,
    /// 600 ms
    Ms600,
}

impl IntegrationTime {
    /// Register value for the ATIME field (bits 2:0)
    pub fn register_value(self) -> u8 {
        match self {
            IntegrationTime::Ms100 => 0x00,
            IntegrationTime::Ms200 => 0x01,
            IntegrationTime::Ms300 => 0x02,
            IntegrationTime::Ms400 => 0x03,
            IntegrationTime::Ms500 => 0x04,
            IntegrationTime::Ms600 => 0x05,
        }
    }

    /// Integration time in milliseconds
    pub fn ms(self) -> f32 {
        match self {
            IntegrationTime::Ms100 => 100.0,
            IntegrationTime::Ms200 => 200.0,
            IntegrationTime::Ms300 => 300.0,
            IntegrationTime::Ms400 => 400.0,
            IntegrationTime::Ms500 => 500.0,
            IntegrationTime::Ms600 => 600.0,
        }
    }
}

/// Ambient 21 configuration
#[derive(Debug, Clone, Copy)]
pub struct Ambient21Config {
    /// 7-bit I2C address
    pub address: u8,
    /// ALS analog gain
    pub gain: Gain,
    /// ALS integration time
    pub integration_time: IntegrationTime,
}

impl Default for Ambient21Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDR,
            gain: Gain::default(),
            integration_time: IntegrationTime::default(),
        }
    }
}

/// Ambient 21 Click driver (TSL2591)
pub struct Ambient21<I2C, TIMER> {
    i2c: I2C,
    timer: TIMER,
    address: u8,
    gain: Gain,
    integration_time: IntegrationTime,
}

impl<I2C, TIMER> Ambient21<I2C, TIMER>
where
    I2C: I2cInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(i2c: I2C, timer: TIMER, config: Ambient21Config) -> Self {
        Self {
            i2c,
            timer,
            address: config.address,
            gain: config.gain,
            integration_time: config.integration_time,
        }
    }

    /// Probe the ID register, reset, and enable the ALS with the configured
    /// gain and integration time
    pub fn init(&mut self) -> Result<(), Error> {
        let id = self.read_register(registers::REG_ID)?;
        if id != registers::DEVICE_ID {
            crate::log_error!("TSL2591 not found, ID {:#04x}", id);
            return Err(Error::UnknownDevice(id));
        }

        self.write_register(registers::REG_CONFIG, registers::CONFIG_SRESET)?;
        self.timer.delay_ms(10)?;

        self.write_register(
            registers::REG_ENABLE,
            registers::ENABLE_PON | registers::ENABLE_AEN,
        )?;
        self.apply_config()
    }

    /// Change the analog gain
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error> {
        self.gain = gain;
        self.apply_config()
    }

    /// Change the integration time
    pub fn set_integration_time(&mut self, time: IntegrationTime) -> Result<(), Error> {
        self.integration_time = time;
        self.apply_config()
    }

    /// Read both raw channels (full spectrum, infrared)
    ///
    /// Waits for the data-valid flag with a bounded attempt budget.
    pub fn read_channels(&mut self) -> Result<(u16, u16), Error> {
        self.wait_data_valid()?;

        let mut data = [0u8; 4];
        self.i2c.write_read(
            self.address,
            &[registers::COMMAND_BIT | registers::REG_C0DATA_L],
            &mut data,
        )?;

        let ch0 = u16::from_le_bytes([data[0], data[1]]);
        let ch1 = u16::from_le_bytes([data[2], data[3]]);
        Ok((ch0, ch1))
    }

    /// Measure the light level in lux
    ///
    /// `cpl = atime_ms * gain / 408`, `lux = (ch0 - ch1) * (1 - ch1/ch0) / cpl`.
    /// A dark or saturated reading yields 0.0.
    pub fn measure_light_level(&mut self) -> Result<f32, Error> {
        let (ch0, ch1) = self.read_channels()?;
        Ok(self.calculate_lux(ch0, ch1))
    }

    /// Lux equation as a pure function of the raw channel counts
    pub fn calculate_lux(&self, ch0: u16, ch1: u16) -> f32 {
        if ch0 == 0
            || ch0 == registers::CHANNEL_SATURATED
            || ch1 == registers::CHANNEL_SATURATED
        {
            return 0.0;
        }

        let cpl = self.integration_time.ms() * self.gain.multiplier() / registers::LUX_DF;
        let full = ch0 as f32;
        let ir = ch1 as f32;
        ((full - ir) * (1.0 - ir / full) / cpl).max(0.0)
    }

    fn apply_config(&mut self) -> Result<(), Error> {
        self.write_register(
            registers::REG_CONFIG,
            self.gain.register_value() | self.integration_time.register_value(),
        )
    }

    fn wait_data_valid(&mut self) -> Result<(), Error> {
        for _ in 0..registers::MAX_READY_ATTEMPTS {
            let status = self.read_register(registers::REG_STATUS)?;
            if status & registers::STATUS_AVALID != 0 {
                return Ok(());
            }
            self.timer.delay_ms(registers::READY_POLL_DELAY_MS)?;
        }
        Err(Error::Timeout)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[registers::COMMAND_BIT | reg], &mut value)?;
        Ok(value[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[registers::COMMAND_BIT | reg, value])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c, MockTimer};

    fn driver(i2c: &mut MockI2c) -> Ambient21<&mut MockI2c, MockTimer> {
        Ambient21::new(i2c, MockTimer::new(), Ambient21Config::default())
    }

    #[test]
    fn default_config_matches_datasheet() {
        let config = Ambient21Config::default();
        assert_eq!(config.address, 0x29);
        assert_eq!(config.gain, Gain::Medium);
        assert_eq!(config.integration_time, IntegrationTime::Ms100);
    }

    #[test]
    fn init_probes_id_and_enables_als() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_read_data(&[registers::DEVICE_ID]);

        let mut als = driver(&mut i2c);
        als.init().unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::WriteRead {
                addr: 0x29,
                write_data: vec![0xB2],
                read_len: 1,
            }
        );
        // reset, enable PON|AEN, config 25x / 100 ms
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x29,
                data: vec![0xA1, 0x80],
            }
        );
        assert_eq!(
            log[2],
            I2cTransaction::Write {
                addr: 0x29,
                data: vec![0xA0, 0x03],
            }
        );
        assert_eq!(
            log[3],
            I2cTransaction::Write {
                addr: 0x29,
                data: vec![0xA1, 0x10],
            }
        );
    }

    #[test]
    fn wrong_id_is_rejected() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_read_data(&[0x39]);

        let mut als = driver(&mut i2c);
        assert_eq!(als.init(), Err(Error::UnknownDevice(0x39)));
        assert_eq!(i2c.transactions().len(), 1);
    }

    #[test]
    fn lux_is_pure_function_of_channels() {
        let i2c = MockI2c::new(Default::default());
        let als = Ambient21::new(i2c, MockTimer::new(), Ambient21Config::default());

        // cpl = 100 ms * 25x / 408 = 6.12745; (1000-300)*(1-0.3)/cpl
        let lux = als.calculate_lux(1000, 300);
        assert!((lux - 79.9676).abs() < 0.01);
    }

    #[test]
    fn dark_and_saturated_channels_read_zero_lux() {
        let i2c = MockI2c::new(Default::default());
        let als = Ambient21::new(i2c, MockTimer::new(), Ambient21Config::default());

        assert_eq!(als.calculate_lux(0, 0), 0.0);
        assert_eq!(als.calculate_lux(0xFFFF, 100), 0.0);
        assert_eq!(als.calculate_lux(1000, 0xFFFF), 0.0);
    }

    #[test]
    fn channels_wait_for_data_valid() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.push_read_data(&[0x00]); // not ready
        i2c.push_read_data(&[0x01]); // AVALID
        i2c.push_read_data(&[0xE8, 0x03, 0x2C, 0x01]); // ch0=1000, ch1=300

        let mut als = driver(&mut i2c);
        assert_eq!(als.read_channels().unwrap(), (1000, 300));
    }

    #[test]
    fn stuck_sensor_times_out_within_budget() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_repeat_read_data(&[0x00]);

        let mut als = driver(&mut i2c);
        assert_eq!(als.measure_light_level(), Err(Error::Timeout));
        assert_eq!(
            i2c.transactions().len(),
            registers::MAX_READY_ATTEMPTS as usize
        );
    }
}
