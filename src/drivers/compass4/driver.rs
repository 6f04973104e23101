//! Compass 4 Click driver implementation

use super::interface::Compass4Bus;
use super::registers;
use crate::platform::{PlatformError, TimerInterface};
use nalgebra::Vector3;

/// Compass 4 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// WIA registers did not match the AK09915C signature
    UnknownDevice(u8, u8),
    /// No sample within the attempt budget
    Timeout,
    /// Magnetic sensor overflow, sample invalid
    Overflow,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// Operating mode (CNTL2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Power down
    PowerDown,
    /// One measurement on demand
    Single,
    /// Continuous 10 Hz
    Continuous10Hz,
    /// Continuous 100 Hz (default)
    #[default]
    Continuous100Hz,
    /// Continuous 200 Hz
    Continuous200Hz,
}

impl Mode {
    /// Register value for CNTL2
    pub fn register_value(self) -> u8 {
        match self {
            Mode::PowerDown => 0x00,
            Mode::Single => 0x01,
            Mode::Continuous10Hz => 0x02,
            Mode::Continuous100Hz => 0x08,
            Mode::Continuous200Hz => 0x0A,
        }
    }
}

/// Compass 4 configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Compass4Config {
    /// Operating mode applied by `init`
    pub mode: Mode,
}

/// Compass 4 Click driver (AK09915C)
///
/// Generic over [`Compass4Bus`], so the same driver body serves both the I2C
/// and the SPI strapping of the board.
pub struct Compass4<BUS, TIMER> {
    bus: BUS,
    timer: TIMER,
    mode: Mode,
}

impl<BUS, TIMER> Compass4<BUS, TIMER>
where
    BUS: Compass4Bus,
    TIMER: TimerInterface,
{
    /// Create a new driver over an already-selected bus transport
    pub fn new(bus: BUS, timer: TIMER, config: Compass4Config) -> Self {
        Self {
            bus,
            timer,
            mode: config.mode,
        }
    }

    /// Probe the WIA registers, soft-reset, and enter the configured mode
    pub fn init(&mut self) -> Result<(), Error> {
        let mut wia = [0u8; 2];
        self.bus.read_registers(registers::REG_WIA1, &mut wia)?;
        if wia != [registers::COMPANY_ID, registers::DEVICE_ID] {
            crate::log_error!("AK09915C not found, WIA {:#04x} {:#04x}", wia[0], wia[1]);
            return Err(Error::UnknownDevice(wia[0], wia[1]));
        }

        self.bus
            .write_register(registers::REG_CNTL3, registers::CNTL3_SRST)?;
        self.timer.delay_ms(1)?;
        self.set_mode(self.mode)?;
        crate::log_info!("AK09915C online");
        Ok(())
    }

    /// Switch operating mode
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error> {
        self.mode = mode;
        self.bus
            .write_register(registers::REG_CNTL2, mode.register_value())?;
        Ok(())
    }

    /// Read one raw sample (X, Y, Z LSB counts)
    ///
    /// Waits for data-ready with a bounded attempt budget, then reads through
    /// ST2 to close the measurement. An overflowed sample returns
    /// [`Error::Overflow`].
    pub fn get_raw_axes(&mut self) -> Result<(i16, i16, i16), Error> {
        self.wait_data_ready()?;

        // HXL..HZH, TMPS, ST2
        let mut data = [0u8; 8];
        self.bus.read_registers(registers::REG_HXL, &mut data)?;
        if data[7] & registers::ST2_HOFL != 0 {
            return Err(Error::Overflow);
        }

        Ok((
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ))
    }

    /// Read the magnetic field vector in microtesla (0.15 uT per LSB)
    pub fn get_magnetic_field(&mut self) -> Result<Vector3<f32>, Error> {
        let (x, y, z) = self.get_raw_axes()?;
        Ok(Vector3::new(x as f32, y as f32, z as f32) * registers::SENSITIVITY_UT)
    }

    fn wait_data_ready(&mut self) -> Result<(), Error> {
        for _ in 0..registers::MAX_READY_ATTEMPTS {
            let mut st1 = [0u8; 1];
            self.bus.read_registers(registers::REG_ST1, &mut st1)?;
            if st1[0] & registers::ST1_DRDY != 0 {
                return Ok(());
            }
            self.timer.delay_ms(registers::READY_POLL_DELAY_MS)?;
        }
        Err(Error::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::super::interface::{Compass4I2c, Compass4Spi};
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockGpio, MockI2c, MockSpi, MockTimer, SpiTransaction};

    #[test]
    fn i2c_init_probes_wia_and_enters_mode() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_read_data(&[0x48, 0x10]);

        let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        compass.init().unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::WriteRead {
                addr: 0x0C,
                write_data: vec![0x00],
                read_len: 2,
            }
        );
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x0C,
                data: vec![0x32, 0x01],
            }
        );
        assert_eq!(
            log[2],
            I2cTransaction::Write {
                addr: 0x0C,
                data: vec![0x31, 0x08],
            }
        );
    }

    #[test]
    fn wrong_wia_is_rejected() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_read_data(&[0x48, 0x09]);

        let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        assert_eq!(compass.init(), Err(Error::UnknownDevice(0x48, 0x09)));
    }

    #[test]
    fn spi_reads_set_the_read_flag_and_frame_with_cs() {
        let mut spi = MockSpi::new(Default::default());
        let cs = MockGpio::new_output();
        spi.set_read_data(&[0x00, 0x48, 0x10]);

        let bus = Compass4Spi::new(&mut spi, cs);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        // Only interested in the probe framing
        let _ = compass.init();

        let log = spi.transactions();
        assert_eq!(
            log[0],
            SpiTransaction::Transfer {
                write: vec![0x80, 0x00, 0x00],
                read: vec![0x00, 0x48, 0x10],
            }
        );
        // CNTL3 soft reset with the read flag cleared
        assert_eq!(
            log[1],
            SpiTransaction::Write {
                data: vec![0x32, 0x01],
            }
        );
    }

    #[test]
    fn spi_reads_longer_than_one_frame_are_chunked() {
        use crate::platform::mock::SpiTransaction;

        let mut spi = MockSpi::new(Default::default());
        let cs = MockGpio::new_output();

        let mut bus = Compass4Spi::new(&mut spi, cs);
        let mut buffer = [0u8; 20];
        bus.read_registers(0x00, &mut buffer).unwrap();

        let log = spi.transactions();
        assert_eq!(log.len(), 2);
        // First frame carries 15 payload bytes, the second picks up at
        // register 15 with the remaining 5
        match &log[0] {
            SpiTransaction::Transfer { write, .. } => {
                assert_eq!(write.len(), 16);
                assert_eq!(write[0], 0x80);
            }
            other => panic!("unexpected transaction {other:?}"),
        }
        match &log[1] {
            SpiTransaction::Transfer { write, .. } => {
                assert_eq!(write.len(), 6);
                assert_eq!(write[0], 0x8F);
            }
            other => panic!("unexpected transaction {other:?}"),
        }
    }

    #[test]
    fn field_is_scaled_to_microtesla() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.push_read_data(&[0x01]); // DRDY
        i2c.push_read_data(&[0xE8, 0x03, 0x18, 0xFC, 0x64, 0x00, 0x00, 0x00]);

        let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        let field = compass.get_magnetic_field().unwrap();

        // 1000, -1000, 100 LSB at 0.15 uT
        assert!((field.x - 150.0).abs() < 0.001);
        assert!((field.y + 150.0).abs() < 0.001);
        assert!((field.z - 15.0).abs() < 0.001);
    }

    #[test]
    fn overflowed_sample_is_flagged() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.push_read_data(&[0x01]);
        i2c.push_read_data(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08]);

        let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        assert_eq!(compass.get_raw_axes(), Err(Error::Overflow));
    }

    #[test]
    fn stuck_sensor_times_out_within_budget() {
        let mut i2c = MockI2c::new(Default::default());
        i2c.set_repeat_read_data(&[0x00]);

        let bus = Compass4I2c::new(&mut i2c, registers::DEFAULT_ADDR);
        let mut compass = Compass4::new(bus, MockTimer::new(), Compass4Config::default());
        assert_eq!(compass.get_raw_axes(), Err(Error::Timeout));
        assert_eq!(
            i2c.transactions().len(),
            registers::MAX_READY_ATTEMPTS as usize
        );
    }
}
