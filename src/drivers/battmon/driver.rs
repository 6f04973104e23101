//! BATT-MON Click driver implementation

use super::registers;
use crate::platform::{I2cInterface, PlatformError};

/// BATT-MON errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// ID register did not match the STC3115 signature
    UnknownDevice(u8),
    /// Register address outside the device map
    InvalidAddress,
    /// Access would run past the end of the register map
    InvalidLength,
    /// Alarm threshold does not fit the register
    InvalidAlarmValue,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// BATT-MON configuration
#[derive(Debug, Clone, Copy)]
pub struct BattMonConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Current sense resistor in milliohms
    pub rsense_mohm: f32,
}

impl Default for BattMonConfig {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDR,
            rsense_mohm: 10.0,
        }
    }
}

/// One decoded gauge sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattMonData {
    /// State of charge in percent
    pub soc: f32,
    /// Battery voltage in millivolts
    pub voltage_mv: f32,
    /// Battery current in milliamps (positive = charging)
    pub current_ma: f32,
    /// Die temperature in degrees Celsius
    pub temperature_c: f32,
}

/// BATT-MON Click driver (STC3115)
pub struct BattMon<I2C> {
    i2c: I2C,
    address: u8,
    rsense_mohm: f32,
}

impl<I2C: I2cInterface> BattMon<I2C> {
    /// Create a new driver
    pub fn new(i2c: I2C, config: BattMonConfig) -> Self {
        Self {
            i2c,
            address: config.address,
            rsense_mohm: config.rsense_mohm,
        }
    }

    /// Probe the ID register and start the gas gauge with alarms enabled
    pub fn init(&mut self) -> Result<(), Error> {
        let mut id = [0u8; 1];
        self.read_bytes(registers::REG_ID, &mut id)?;
        if id[0] != registers::ID_VALUE {
            crate::log_error!("STC3115 not found, ID {:#04x}", id[0]);
            return Err(Error::UnknownDevice(id[0]));
        }

        self.write_bytes(
            registers::REG_MODE,
            &[registers::MODE_GG_RUN | registers::MODE_ALM_ENA],
        )?;
        crate::log_info!("STC3115 gas gauge running");
        Ok(())
    }

    /// Read `buffer.len()` registers starting at `addr`
    ///
    /// The address range is validated before any bus traffic.
    pub fn read_bytes(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), Error> {
        Self::check_range(addr, buffer.len())?;
        self.i2c.write_read(self.address, &[addr], buffer)?;
        Ok(())
    }

    /// Write consecutive registers starting at `addr`
    ///
    /// The address range is validated before any bus traffic.
    pub fn write_bytes(&mut self, addr: u8, data: &[u8]) -> Result<(), Error> {
        Self::check_range(addr, data.len())?;

        let mut frame = [0u8; 17];
        frame[0] = addr;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c.write(self.address, &frame[..=data.len()])?;
        Ok(())
    }

    /// State of charge in percent (1/512 % per LSB)
    pub fn get_soc(&mut self) -> Result<f32, Error> {
        Ok(self.read_word(registers::REG_SOC)? as f32 * registers::SOC_LSB_PERCENT)
    }

    /// Battery voltage in millivolts (2.2 mV per LSB)
    pub fn get_voltage(&mut self) -> Result<f32, Error> {
        Ok(self.read_word(registers::REG_VOLTAGE)? as f32 * registers::VOLTAGE_LSB_MV)
    }

    /// Battery current in milliamps, signed (5.88 uV / Rsense per LSB)
    pub fn get_current(&mut self) -> Result<f32, Error> {
        let raw = self.read_word(registers::REG_CURRENT)? as i16;
        Ok(raw as f32 * registers::CURRENT_LSB_UV / self.rsense_mohm)
    }

    /// Die temperature in degrees Celsius
    pub fn get_temperature(&mut self) -> Result<f32, Error> {
        let mut raw = [0u8; 1];
        self.read_bytes(registers::REG_TEMPERATURE, &mut raw)?;
        Ok(raw[0] as i8 as f32)
    }

    /// Read one full gauge sample
    pub fn get_data(&mut self) -> Result<BattMonData, Error> {
        Ok(BattMonData {
            soc: self.get_soc()?,
            voltage_mv: self.get_voltage()?,
            current_ma: self.get_current()?,
            temperature_c: self.get_temperature()?,
        })
    }

    /// Program an alarm threshold register
    ///
    /// `alarm_reg` must be one of the three alarm registers; `value` is given
    /// in the register's physical unit (percent for SOC, millivolts for
    /// voltage, microvolts for the relaxation threshold) and is truncated to
    /// the register's LSB. A value that does not fit in one byte is rejected
    /// with [`Error::InvalidAlarmValue`] before any bus traffic.
    pub fn set_alarm(&mut self, alarm_reg: u8, value: f32) -> Result<(), Error> {
        let lsb = match alarm_reg {
            registers::REG_ALARM_SOC => registers::ALARM_SOC_LSB_PERCENT,
            registers::REG_ALARM_VOLTAGE => registers::ALARM_VOLTAGE_LSB_MV,
            registers::REG_CURRENT_THRES => registers::CURRENT_THRES_LSB_UV,
            _ => return Err(Error::InvalidAddress),
        };

        let code = (value / lsb) as u32;
        if code >= 256 {
            return Err(Error::InvalidAlarmValue);
        }
        self.write_bytes(alarm_reg, &[code as u8])
    }

    /// Read the 16 general-purpose RAM bytes
    ///
    /// The gauge keeps RAM through a battery swap, so hosts stash tracking
    /// state here.
    pub fn read_ram(&mut self) -> Result<[u8; 16], Error> {
        let mut ram = [0u8; 16];
        self.read_bytes(registers::REG_RAM, &mut ram)?;
        Ok(ram)
    }

    /// Write the 16 general-purpose RAM bytes
    pub fn write_ram(&mut self, ram: &[u8; 16]) -> Result<(), Error> {
        self.write_bytes(registers::REG_RAM, ram)
    }

    fn read_word(&mut self, addr: u8) -> Result<u16, Error> {
        let mut raw = [0u8; 2];
        self.read_bytes(addr, &mut raw)?;
        Ok(u16::from_le_bytes(raw))
    }

    fn check_range(addr: u8, len: usize) -> Result<(), Error> {
        if addr > registers::LAST_REG {
            return Err(Error::InvalidAddress);
        }
        if len == 0 || len > 16 || addr as usize + len > registers::LAST_REG as usize + 1 {
            return Err(Error::InvalidLength);
        }
        Ok(())
    }
}
