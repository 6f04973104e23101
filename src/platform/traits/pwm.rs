//! PWM interface trait
//!
//! This module defines the PWM output interface that platform implementations must provide.

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// Output frequency in Hz
    pub frequency: u32,
    /// Initial duty cycle as a fraction [0.0, 1.0]
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 20_000, // 20 kHz, above the audible range
            duty_cycle: 0.0,
        }
    }
}

/// PWM interface trait
///
/// Platform implementations must provide this interface for PWM output control.
///
/// # Safety Invariants
///
/// - PWM peripheral must be initialized before use
/// - Only one owner per PWM channel instance
pub trait PwmInterface {
    /// Set duty cycle as a fraction [0.0, 1.0]
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the value
    /// is outside [0.0, 1.0].
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Get the current duty cycle
    fn duty_cycle(&self) -> f32;

    /// Set output frequency in Hz
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidFrequency)` if the
    /// frequency cannot be achieved with the current clock configuration.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Get the current output frequency in Hz
    fn frequency(&self) -> u32;

    /// Enable the PWM output
    fn enable(&mut self);

    /// Disable the PWM output (pin idles low)
    fn disable(&mut self);

    /// Whether the output is currently enabled
    fn is_enabled(&self) -> bool;
}

impl<T: PwmInterface + ?Sized> PwmInterface for &mut T {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        T::set_duty_cycle(self, duty_cycle)
    }

    fn duty_cycle(&self) -> f32 {
        T::duty_cycle(self)
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        T::set_frequency(self, frequency)
    }

    fn frequency(&self) -> u32 {
        T::frequency(self)
    }

    fn enable(&mut self) {
        T::enable(self)
    }

    fn disable(&mut self) {
        T::disable(self)
    }

    fn is_enabled(&self) -> bool {
        T::is_enabled(self)
    }
}
