//! LED Driver 12 Click driver implementation

use super::registers;
use crate::platform::{I2cInterface, PlatformError};

/// LED Driver 12 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying bus transaction failed
    Bus(PlatformError),
    /// LED index outside 0-15
    InvalidLed,
    /// Blink frequency not representable by the 8-bit prescaler
    InvalidFrequency,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// Per-LED drive selection (2-bit LS field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    /// Output high, LED off
    Off,
    /// Output low, LED fully on
    On,
    /// Blink/dim at the PWM0 rate
    Pwm0,
    /// Blink/dim at the PWM1 rate
    Pwm1,
}

impl LedState {
    fn bits(self) -> u8 {
        match self {
            LedState::Off => 0b00,
            LedState::On => 0b01,
            LedState::Pwm0 => 0b10,
            LedState::Pwm1 => 0b11,
        }
    }
}

/// One of the two shared blink/dim engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    /// PSC0/PWM0 pair
    Pwm0,
    /// PSC1/PWM1 pair
    Pwm1,
}

impl PwmChannel {
    fn psc_register(self) -> u8 {
        match self {
            PwmChannel::Pwm0 => registers::REG_PSC0,
            PwmChannel::Pwm1 => registers::REG_PSC1,
        }
    }

    fn pwm_register(self) -> u8 {
        match self {
            PwmChannel::Pwm0 => registers::REG_PWM0,
            PwmChannel::Pwm1 => registers::REG_PWM1,
        }
    }
}

/// LED Driver 12 configuration
#[derive(Debug, Clone, Copy)]
pub struct LedDriver12Config {
    /// 7-bit slave address
    pub address: u8,
}

impl Default for LedDriver12Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDR,
        }
    }
}

/// LED Driver 12 Click driver (PCA9532)
pub struct LedDriver12<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cInterface> LedDriver12<I2C> {
    /// Create a new driver
    pub fn new(i2c: I2C, config: LedDriver12Config) -> Self {
        Self {
            i2c,
            address: config.address,
        }
    }

    /// Turn all sixteen LEDs off in one auto-increment burst
    pub fn init(&mut self) -> Result<(), Error> {
        self.i2c.write(
            self.address,
            &[
                registers::REG_LS0 | registers::AUTO_INCREMENT,
                0x00,
                0x00,
                0x00,
                0x00,
            ],
        )?;
        Ok(())
    }

    /// Write one control register
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.i2c.write(self.address, &[reg, value])?;
        Ok(())
    }

    /// Read one control register
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut value)?;
        Ok(value[0])
    }

    /// Program a blink engine's rate
    ///
    /// The prescaler encodes `PSC = 152/hz - 1`, so only rates between
    /// roughly 0.6 Hz and 152 Hz fit the 8-bit register; anything outside
    /// that is rejected before any traffic.
    pub fn set_blink_frequency(&mut self, channel: PwmChannel, hz: f32) -> Result<(), Error> {
        if hz <= 0.0 {
            return Err(Error::InvalidFrequency);
        }
        let psc = registers::PRESCALER_CLOCK_HZ / hz - 1.0;
        let psc = libm::roundf(psc);
        if !(0.0..=255.0).contains(&psc) {
            return Err(Error::InvalidFrequency);
        }
        self.write_register(channel.psc_register(), psc as u8)
    }

    /// Program a blink engine's duty cycle from a percentage
    ///
    /// The register counts in 1/256 steps; 100% saturates at 255.
    pub fn set_duty_cycle(&mut self, channel: PwmChannel, percent: u8) -> Result<(), Error> {
        let percent = percent.min(100) as u16;
        let value = (percent * 256 / 100).min(255) as u8;
        self.write_register(channel.pwm_register(), value)
    }

    /// Drive one LED, leaving its three LS neighbors untouched
    pub fn set_led_state(&mut self, index: u8, state: LedState) -> Result<(), Error> {
        if index >= registers::LED_COUNT {
            return Err(Error::InvalidLed);
        }
        let reg = registers::REG_LS0 + index / 4;
        let shift = (index % 4) * 2;

        let current = self.read_register(reg)?;
        let value = (current & !(0b11 << shift)) | (state.bits() << shift);
        self.write_register(reg, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c};

    fn driver(i2c: &mut MockI2c) -> LedDriver12<&mut MockI2c> {
        LedDriver12::new(i2c, LedDriver12Config::default())
    }

    #[test]
    fn init_clears_all_selectors_in_one_burst() {
        let mut i2c = MockI2c::new(Default::default());
        driver(&mut i2c).init().unwrap();

        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![0x16, 0x00, 0x00, 0x00, 0x00],
            }
        );
    }

    #[test]
    fn blink_prescaler_encodes_the_period() {
        let mut i2c = MockI2c::new(Default::default());
        let mut leds = driver(&mut i2c);

        // 152 Hz is the fastest rate, PSC = 0
        leds.set_blink_frequency(PwmChannel::Pwm0, 152.0).unwrap();
        // 1 Hz lands at PSC = 151
        leds.set_blink_frequency(PwmChannel::Pwm1, 1.0).unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![registers::REG_PSC0, 0],
            }
        );
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![registers::REG_PSC1, 151],
            }
        );
    }

    #[test]
    fn unrepresentable_blink_rates_are_rejected() {
        let mut i2c = MockI2c::new(Default::default());
        let mut leds = driver(&mut i2c);

        // Faster than the prescaler clock
        assert_eq!(
            leds.set_blink_frequency(PwmChannel::Pwm0, 200.0),
            Err(Error::InvalidFrequency)
        );
        // Slower than PSC = 255 allows
        assert_eq!(
            leds.set_blink_frequency(PwmChannel::Pwm0, 0.5),
            Err(Error::InvalidFrequency)
        );
        assert_eq!(
            leds.set_blink_frequency(PwmChannel::Pwm0, 0.0),
            Err(Error::InvalidFrequency)
        );
        assert!(i2c.transactions().is_empty());
    }

    #[test]
    fn duty_cycle_scales_to_the_register_range() {
        let mut i2c = MockI2c::new(Default::default());
        let mut leds = driver(&mut i2c);

        leds.set_duty_cycle(PwmChannel::Pwm0, 50).unwrap();
        leds.set_duty_cycle(PwmChannel::Pwm0, 100).unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![registers::REG_PWM0, 128],
            }
        );
        // 100% saturates at 255 rather than wrapping
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![registers::REG_PWM0, 255],
            }
        );
    }

    #[test]
    fn led_state_modifies_only_its_field() {
        let mut i2c = MockI2c::new(Default::default());
        // LS2 read-back with LED 8 already on
        i2c.set_read_data(&[0b0000_0001]);

        let mut leds = driver(&mut i2c);
        leds.set_led_state(9, LedState::Pwm1).unwrap();

        let log = i2c.transactions();
        assert_eq!(
            log[0],
            I2cTransaction::WriteRead {
                addr: 0x60,
                write_data: vec![registers::REG_LS2],
                read_len: 1,
            }
        );
        // LED 9 field set to 0b11, LED 8 untouched
        assert_eq!(
            log[1],
            I2cTransaction::Write {
                addr: 0x60,
                data: vec![registers::REG_LS2, 0b0000_1101],
            }
        );
    }

    #[test]
    fn out_of_range_led_is_rejected() {
        let mut i2c = MockI2c::new(Default::default());
        let mut leds = driver(&mut i2c);

        assert_eq!(leds.set_led_state(16, LedState::On), Err(Error::InvalidLed));
        assert!(i2c.transactions().is_empty());
    }
}
