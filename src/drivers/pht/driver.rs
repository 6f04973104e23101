//! PHT Click driver implementation
//!
//! The MS8607 P/T die follows the MS56xx conversion scheme: factory
//! calibration constants live in a CRC-4-protected PROM, raw D1/D2
//! conversions are started per command and collected after a per-OSR wait,
//! and first-order compensation turns them into centi-degrees and
//! centi-millibar.

use super::registers;
use crate::platform::{I2cInterface, PlatformError, TimerInterface};

/// PHT errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// Calibration PROM failed its CRC-4 check
    CrcMismatch,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// Oversampling ratio for the P/T conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Osr {
    /// 256x
    Osr256,
    /// 512x
    Osr512,
    /// 1024x
    Osr1024,
    /// 2048x
    Osr2048,
    /// 4096x (default)
    #[default]
    Osr4096,
    /// 8192x
    Osr8192,
}

impl Osr {
    /// Offset added to the conversion command
    fn command_offset(self) -> u8 {
        match self {
            Osr::Osr256 => 0x00,
            Osr::Osr512 => 0x02,
            Osr::Osr1024 => 0x04,
            Osr::Osr2048 => 0x06,
            Osr::Osr4096 => 0x08,
            Osr::Osr8192 => 0x0A,
        }
    }

    /// Worst-case conversion time, rounded up to whole milliseconds
    fn conversion_delay_ms(self) -> u32 {
        match self {
            Osr::Osr256 => 1,
            Osr::Osr512 => 2,
            Osr::Osr1024 => 3,
            Osr::Osr2048 => 5,
            Osr::Osr4096 => 9,
            Osr::Osr8192 => 17,
        }
    }
}

/// PHT configuration
#[derive(Debug, Clone, Copy)]
pub struct PhtConfig {
    /// P/T die 7-bit address
    pub pt_address: u8,
    /// RH die 7-bit address
    pub rh_address: u8,
    /// Oversampling for pressure conversions
    pub pressure_osr: Osr,
    /// Oversampling for temperature conversions
    pub temperature_osr: Osr,
}

impl Default for PhtConfig {
    fn default() -> Self {
        Self {
            pt_address: registers::PT_ADDR,
            rh_address: registers::RH_ADDR,
            pressure_osr: Osr::default(),
            temperature_osr: Osr::default(),
        }
    }
}

/// Factory calibration constants from the P/T PROM
#[derive(Debug, Clone, Copy, Default)]
pub struct Calibration {
    /// Pressure sensitivity
    pub c1: u16,
    /// Pressure offset
    pub c2: u16,
    /// Temperature coefficient of pressure sensitivity
    pub c3: u16,
    /// Temperature coefficient of pressure offset
    pub c4: u16,
    /// Reference temperature
    pub c5: u16,
    /// Temperature coefficient of the temperature
    pub c6: u16,
}

impl Calibration {
    /// First-order compensation of raw D1/D2 into centi-degrees Celsius and
    /// centi-millibar
    pub fn compensate(&self, d1: u32, d2: u32) -> (i32, i32) {
        let dt = d2 as i64 - ((self.c5 as i64) << 8);
        let temp = 2000 + ((dt * self.c6 as i64) >> 23);
        let off = ((self.c2 as i64) << 17) + ((self.c4 as i64 * dt) >> 6);
        let sens = ((self.c1 as i64) << 16) + ((self.c3 as i64 * dt) >> 7);
        let pressure = ((d1 as i64 * sens >> 21) - off) >> 15;
        (temp as i32, pressure as i32)
    }
}

/// One combined reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Barometric pressure in millibar
    pub pressure_mbar: f32,
    /// Relative humidity in percent
    pub humidity_percent: f32,
}

/// CRC-4 over the calibration PROM (AN520 layout, check nibble in the top of
/// word 0)
pub fn prom_crc(words: &[u16; 8]) -> u8 {
    let mut words = *words;
    words[0] &= 0x0FFF;
    words[7] = 0;

    let mut rem: u16 = 0;
    for i in 0..16 {
        if i % 2 == 0 {
            rem ^= words[i / 2] >> 8;
        } else {
            rem ^= words[i / 2] & 0x00FF;
        }
        for _ in 0..8 {
            if rem & 0x8000 != 0 {
                rem = (rem << 1) ^ registers::PROM_CRC_POLY;
            } else {
                rem <<= 1;
            }
        }
    }
    ((rem >> 12) & 0x0F) as u8
}

/// PHT Click driver (MS8607)
pub struct Pht<I2C, TIMER> {
    i2c: I2C,
    timer: TIMER,
    config: PhtConfig,
    calibration: Calibration,
}

impl<I2C, TIMER> Pht<I2C, TIMER>
where
    I2C: I2cInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(i2c: I2C, timer: TIMER, config: PhtConfig) -> Self {
        Self {
            i2c,
            timer,
            config,
            calibration: Calibration::default(),
        }
    }

    /// Reset both dies and load the CRC-checked calibration PROM
    pub fn init(&mut self) -> Result<(), Error> {
        self.i2c
            .write(self.config.pt_address, &[registers::CMD_PT_RESET])?;
        self.timer.delay_ms(registers::PT_RESET_DELAY_MS)?;
        self.i2c
            .write(self.config.rh_address, &[registers::CMD_RH_RESET])?;
        self.timer.delay_ms(registers::RH_RESET_DELAY_MS)?;

        self.calibration = self.read_calibration()?;
        crate::log_info!("MS8607 calibration loaded");
        Ok(())
    }

    /// Calibration constants loaded by `init`
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Temperature and pressure from one D1/D2 conversion pair
    pub fn get_temperature_pressure(&mut self) -> Result<(f32, f32), Error> {
        let d1 = self.convert(
            registers::CMD_CONVERT_D1 + self.config.pressure_osr.command_offset(),
            self.config.pressure_osr,
        )?;
        let d2 = self.convert(
            registers::CMD_CONVERT_D2 + self.config.temperature_osr.command_offset(),
            self.config.temperature_osr,
        )?;

        let (temp, pressure) = self.calibration.compensate(d1, d2);
        Ok((temp as f32 / 100.0, pressure as f32 / 100.0))
    }

    /// Relative humidity from one no-hold conversion
    pub fn get_humidity(&mut self) -> Result<f32, Error> {
        self.i2c
            .write(self.config.rh_address, &[registers::CMD_RH_MEASURE])?;
        self.timer.delay_ms(registers::RH_CONVERSION_DELAY_MS)?;

        let mut raw = [0u8; 2];
        self.i2c.read(self.config.rh_address, &mut raw)?;
        let raw = u16::from_be_bytes(raw) & !registers::RH_STATUS_MASK;

        // RH% = -6 + 125 * raw / 2^16
        Ok(-6.0 + 125.0 * raw as f32 / 65536.0)
    }

    /// All three physical values in one call
    pub fn get_measurements(&mut self) -> Result<Measurements, Error> {
        let (temperature_c, pressure_mbar) = self.get_temperature_pressure()?;
        let humidity_percent = self.get_humidity()?;
        Ok(Measurements {
            temperature_c,
            pressure_mbar,
            humidity_percent,
        })
    }

    fn read_calibration(&mut self) -> Result<Calibration, Error> {
        let mut words = [0u16; 8];
        for (i, word) in words.iter_mut().take(registers::PROM_WORDS).enumerate() {
            let mut raw = [0u8; 2];
            self.i2c.write_read(
                self.config.pt_address,
                &[registers::CMD_PROM_READ + 2 * i as u8],
                &mut raw,
            )?;
            *word = u16::from_be_bytes(raw);
        }

        let stored = (words[0] >> 12) as u8;
        if prom_crc(&words) != stored {
            crate::log_error!("MS8607 PROM CRC mismatch");
            return Err(Error::CrcMismatch);
        }

        Ok(Calibration {
            c1: words[1],
            c2: words[2],
            c3: words[3],
            c4: words[4],
            c5: words[5],
            c6: words[6],
        })
    }

    fn convert(&mut self, command: u8, osr: Osr) -> Result<u32, Error> {
        self.i2c.write(self.config.pt_address, &[command])?;
        self.timer.delay_ms(osr.conversion_delay_ms())?;

        let mut raw = [0u8; 3];
        self.i2c
            .write_read(self.config.pt_address, &[registers::CMD_ADC_READ], &mut raw)?;
        Ok(u32::from_be_bytes([0, raw[0], raw[1], raw[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c, MockTimer};

    fn driver(i2c: &mut MockI2c) -> Pht<&mut MockI2c, MockTimer> {
        Pht::new(i2c, MockTimer::new(), PhtConfig::default())
    }

    #[test]
    fn compensation_follows_the_first_order_formulas() {
        let cal = Calibration {
            c1: 2000,
            c2: 1000,
            c3: 0,
            c4: 0,
            c5: 0,
            c6: 32768,
        };
        // dT = 256, TEMP = 2000 + 256*32768/2^23 = 2001
        // OFF = 1000*2^17, SENS = 2000*2^16
        // P = (4194304 * SENS / 2^21 - OFF) / 2^15 = 4000
        let (temp, pressure) = cal.compensate(4_194_304, 256);
        assert_eq!(temp, 2001);
        assert_eq!(pressure, 4000);
    }

    #[test]
    fn an_all_zero_prom_has_crc_zero() {
        assert_eq!(prom_crc(&[0u16; 8]), 0);
    }

    #[test]
    fn crc_covers_every_prom_word() {
        let mut words = [0u16; 8];
        let base = prom_crc(&words);
        words[3] = 0x0001;
        assert_ne!(prom_crc(&words), base);
    }

    #[test]
    fn init_resets_both_dies_and_loads_the_prom() {
        let mut i2c = MockI2c::new(Default::default());
        // 7 PROM words, all zero; stored CRC nibble 0 matches
        i2c.set_repeat_read_data(&[0x00, 0x00]);

        let mut pht = driver(&mut i2c);
        pht.init().unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x76,
                data: vec![0x1E],
            }
        );
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x40,
                data: vec![0xFE],
            }
        );
        assert_eq!(
            log[2],
            I2cTransaction::WriteRead {
                addr: 0x76,
                write_data: vec![0xA0],
                read_len: 2,
            }
        );
        assert_eq!(
            log[8],
            I2cTransaction::WriteRead {
                addr: 0x76,
                write_data: vec![0xAC],
                read_len: 2,
            }
        );
    }

    #[test]
    fn corrupted_prom_is_rejected() {
        let mut i2c = MockI2c::new(Default::default());
        // Stored CRC nibble claims 5, computed is 0
        i2c.push_read_data(&[0x50, 0x00]);
        for _ in 0..6 {
            i2c.push_read_data(&[0x00, 0x00]);
        }

        let mut pht = driver(&mut i2c);
        assert_eq!(pht.init(), Err(Error::CrcMismatch));
    }

    #[test]
    fn conversions_use_the_configured_osr_commands() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_repeat_read_data(&[0x00, 0x00, 0x00]);

        let mut pht = driver(&mut i2c);
        // Zero calibration: TEMP = 2000, P = 0
        let (temp, pressure) = pht.get_temperature_pressure().unwrap();
        assert_eq!(temp, 20.0);
        assert_eq!(pressure, 0.0);

        let log = i2c.transactions();
        // OSR 4096: D1 = 0x48, D2 = 0x58
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x76,
                data: vec![0x48],
            }
        );
        assert_eq!(
            log[2],
            I2cTransaction::Write {
                addr: 0x76,
                data: vec![0x58],
            }
        );
    }

    #[test]
    fn humidity_masks_the_status_bits() {
        let mut i2c = MockI2c::new(Default::default());
        // Raw 0x8002: data 0x8000, low two bits are status
        i2c.push_read_data(&[0x80, 0x02]);

        let mut pht = driver(&mut i2c);
        let rh = pht.get_humidity().unwrap();
        // -6 + 125 * 32768/65536 = 56.5
        assert!((rh - 56.5).abs() < 0.001);

        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::Write {
                addr: 0x40,
                data: vec![0xF5],
            }
        );
    }
}
