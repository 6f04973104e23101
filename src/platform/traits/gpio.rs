//! GPIO interface trait
//!
//! This module defines the GPIO (General Purpose Input/Output) interface that platform implementations must provide.

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
    /// Output mode (push-pull)
    OutputPushPull,
    /// Output mode (open-drain)
    OutputOpenDrain,
}

/// GPIO interface trait
///
/// Platform implementations must provide this interface for GPIO control.
/// Drivers use these pins for the auxiliary mikroBUS lines (RST, CS, INT,
/// write-protect, hold, data/command select).
///
/// # Safety Invariants
///
/// - GPIO pin must be initialized before use
/// - Only one owner per GPIO pin instance
pub trait GpioInterface {
    /// Set GPIO pin high (logic level 1)
    ///
    /// Only valid in output modes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// Only valid in output modes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Toggle GPIO pin state
    ///
    /// Only valid in output modes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn toggle(&mut self) -> Result<()>;

    /// Read the current pin level
    ///
    /// For inputs this samples the line; for outputs it returns the driven level.
    fn read(&self) -> bool;

    /// Reconfigure the pin mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the mode is not supported for this pin.
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;
}

impl<T: GpioInterface + ?Sized> GpioInterface for &mut T {
    fn set_high(&mut self) -> Result<()> {
        T::set_high(self)
    }

    fn set_low(&mut self) -> Result<()> {
        T::set_low(self)
    }

    fn toggle(&mut self) -> Result<()> {
        T::toggle(self)
    }

    fn read(&self) -> bool {
        T::read(self)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        T::set_mode(self, mode)
    }
}
