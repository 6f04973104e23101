//! PWM adapter over `embedded_hal::pwm::SetDutyCycle`

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::PwmInterface,
    Result,
};
use embedded_hal::pwm::SetDutyCycle;

/// Wraps an embedded-hal PWM channel as a platform [`PwmInterface`]
///
/// embedded-hal 1.0 exposes duty control only; the output frequency is
/// configured at HAL construction time and reported here from the value the
/// caller supplies at wrap time. Disable is emulated by driving 0% duty.
#[derive(Debug)]
pub struct EhalPwm<P> {
    channel: P,
    frequency: u32,
    duty_cycle: f32,
    enabled: bool,
}

impl<P: SetDutyCycle> EhalPwm<P> {
    /// Wrap an embedded-hal PWM channel running at `frequency` Hz
    pub fn new(channel: P, frequency: u32) -> Self {
        Self {
            channel,
            frequency,
            duty_cycle: 0.0,
            enabled: false,
        }
    }

    /// Release the wrapped channel
    pub fn release(self) -> P {
        self.channel
    }

    fn apply(&mut self, fraction: f32) -> Result<()> {
        let max = self.channel.max_duty_cycle();
        let ticks = (fraction * max as f32) as u16;
        self.channel
            .set_duty_cycle(ticks.min(max))
            .map_err(|_| PlatformError::Pwm(PwmError::ChannelUnavailable))
    }
}

impl<P: SetDutyCycle> PwmInterface for EhalPwm<P> {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        if self.enabled {
            self.apply(duty_cycle)?;
        }
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        Err(PlatformError::Pwm(PwmError::InvalidFrequency))
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn enable(&mut self) {
        self.enabled = true;
        if self.apply(self.duty_cycle).is_err() {
            crate::log_warn!("PWM enable: channel rejected duty apply");
        }
    }

    fn disable(&mut self) {
        self.enabled = false;
        if self.apply(0.0).is_err() {
            crate::log_warn!("PWM disable: channel rejected duty apply");
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StuckChannel;

    impl embedded_hal::pwm::ErrorType for StuckChannel {
        type Error = embedded_hal::pwm::ErrorKind;
    }

    impl SetDutyCycle for StuckChannel {
        fn max_duty_cycle(&self) -> u16 {
            100
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> core::result::Result<(), Self::Error> {
            Err(embedded_hal::pwm::ErrorKind::Other)
        }
    }

    #[test]
    fn failed_apply_on_enable_does_not_panic() {
        let mut pwm = EhalPwm::new(StuckChannel, 20_000);
        pwm.enable();
        assert!(pwm.is_enabled());

        // The same failure surfaces as an error on the fallible path
        assert_eq!(
            pwm.set_duty_cycle(0.5),
            Err(PlatformError::Pwm(PwmError::ChannelUnavailable))
        );

        pwm.disable();
        assert!(!pwm.is_enabled());
    }
}
