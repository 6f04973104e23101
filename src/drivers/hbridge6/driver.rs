//! H-Bridge 6 Click driver implementation
//!
//! The bridge takes its speed from one PWM input and its direction from the
//! IN1/IN2 pair:
//!
//! | IN1 | IN2 | Motor State                                |
//! |-----|-----|--------------------------------------------|
//! | 0   | 0   | Coast (High-Z, motor freewheels)           |
//! | 1   | 0   | Forward (speed = PWM duty cycle)           |
//! | 0   | 1   | Reverse (speed = PWM duty cycle)           |
//! | 1   | 1   | Brake (short brake, both terminals to GND) |

use crate::platform::{GpioInterface, PlatformError, PwmInterface};

/// Lowest PWM frequency the bridge switches cleanly at
pub const MIN_PWM_FREQUENCY_HZ: u32 = 100;
/// Highest PWM frequency the bridge switches cleanly at
pub const MAX_PWM_FREQUENCY_HZ: u32 = 100_000;

/// H-Bridge 6 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying pin or PWM operation failed
    Bus(PlatformError),
    /// Speed outside [-1.0, +1.0]
    InvalidSpeed,
    /// PWM frequency outside the part's switching window
    InvalidFrequency,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// H-Bridge 6 configuration
#[derive(Debug, Clone, Copy)]
pub struct HBridge6Config {
    /// PWM carrier frequency applied by `init`
    pub pwm_frequency_hz: u32,
}

impl Default for HBridge6Config {
    fn default() -> Self {
        Self {
            pwm_frequency_hz: 20_000,
        }
    }
}

/// H-Bridge 6 Click driver (DRV8837-class bridge)
pub struct HBridge6<PWM, IN1, IN2> {
    pwm: PWM,
    in1: IN1,
    in2: IN2,
}

impl<PWM, IN1, IN2> HBridge6<PWM, IN1, IN2>
where
    PWM: PwmInterface,
    IN1: GpioInterface,
    IN2: GpioInterface,
{
    /// Create a new driver
    pub fn new(pwm: PWM, in1: IN1, in2: IN2) -> Self {
        Self { pwm, in1, in2 }
    }

    /// Program the PWM carrier, enable it, and leave the motor coasting
    pub fn init(&mut self, config: HBridge6Config) -> Result<(), Error> {
        self.set_frequency(config.pwm_frequency_hz)?;
        self.pwm.enable();
        self.stop()?;
        Ok(())
    }

    /// Set motor speed and direction
    ///
    /// Positive speed drives forward, negative reverse, zero coasts. The
    /// magnitude becomes the PWM duty cycle. Out-of-range speed is rejected
    /// before any pin changes.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), Error> {
        if !(-1.0..=1.0).contains(&speed) {
            return Err(Error::InvalidSpeed);
        }

        if speed > 0.0 {
            self.in1.set_high()?;
            self.in2.set_low()?;
        } else if speed < 0.0 {
            self.in1.set_low()?;
            self.in2.set_high()?;
        } else {
            self.in1.set_low()?;
            self.in2.set_low()?;
        }
        self.pwm.set_duty_cycle(speed.abs())?;
        Ok(())
    }

    /// Coast: both inputs low, outputs High-Z, motor freewheels
    pub fn stop(&mut self) -> Result<(), Error> {
        self.in1.set_low()?;
        self.in2.set_low()?;
        self.pwm.set_duty_cycle(0.0)?;
        Ok(())
    }

    /// Short brake: both inputs high, motor actively resists rotation
    pub fn brake(&mut self) -> Result<(), Error> {
        self.in1.set_high()?;
        self.in2.set_high()?;
        self.pwm.set_duty_cycle(0.0)?;
        Ok(())
    }

    /// Change the PWM carrier frequency within the bridge's switching window
    pub fn set_frequency(&mut self, hz: u32) -> Result<(), Error> {
        if !(MIN_PWM_FREQUENCY_HZ..=MAX_PWM_FREQUENCY_HZ).contains(&hz) {
            return Err(Error::InvalidFrequency);
        }
        self.pwm.set_frequency(hz)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockPwm};

    fn driver() -> HBridge6<MockPwm, MockGpio, MockGpio> {
        HBridge6::new(
            MockPwm::new(Default::default()),
            MockGpio::new_output(),
            MockGpio::new_output(),
        )
    }

    #[test]
    fn forward_drives_in1_with_pwm_magnitude() {
        let mut bridge = driver();
        bridge.set_speed(0.75).unwrap();

        assert!(bridge.in1.is_high());
        assert!(!bridge.in2.is_high());
        assert_eq!(bridge.pwm.duty_cycle(), 0.75);
    }

    #[test]
    fn reverse_mirrors_the_pins() {
        let mut bridge = driver();
        bridge.set_speed(-0.5).unwrap();

        assert!(!bridge.in1.is_high());
        assert!(bridge.in2.is_high());
        assert_eq!(bridge.pwm.duty_cycle(), 0.5);
    }

    #[test]
    fn zero_speed_coasts() {
        let mut bridge = driver();
        bridge.set_speed(1.0).unwrap();
        bridge.set_speed(0.0).unwrap();

        assert!(!bridge.in1.is_high());
        assert!(!bridge.in2.is_high());
        assert_eq!(bridge.pwm.duty_cycle(), 0.0);
    }

    #[test]
    fn brake_raises_both_inputs() {
        let mut bridge = driver();
        bridge.brake().unwrap();

        assert!(bridge.in1.is_high());
        assert!(bridge.in2.is_high());
    }

    #[test]
    fn out_of_range_speed_is_rejected() {
        let mut bridge = driver();
        assert_eq!(bridge.set_speed(1.5), Err(Error::InvalidSpeed));
        assert_eq!(bridge.set_speed(-1.01), Err(Error::InvalidSpeed));
        // Boundaries are fine
        assert!(bridge.set_speed(1.0).is_ok());
        assert!(bridge.set_speed(-1.0).is_ok());
    }

    #[test]
    fn frequency_window_is_enforced() {
        let mut bridge = driver();
        assert_eq!(bridge.set_frequency(99), Err(Error::InvalidFrequency));
        assert_eq!(bridge.set_frequency(100_001), Err(Error::InvalidFrequency));
        assert!(bridge.set_frequency(20_000).is_ok());
        assert_eq!(bridge.pwm.frequency(), 20_000);
    }
}
