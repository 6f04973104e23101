//! GPIO adapters over `embedded_hal::digital`

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use core::cell::RefCell;
use embedded_hal::digital::{InputPin, StatefulOutputPin};

/// Wraps an embedded-hal output pin as a platform [`GpioInterface`]
#[derive(Debug)]
pub struct EhalOutputPin<P> {
    pin: P,
    level: bool,
}

impl<P: StatefulOutputPin> EhalOutputPin<P> {
    /// Wrap an embedded-hal output pin (assumed driven low)
    pub fn new(pin: P) -> Self {
        Self { pin, level: false }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> GpioInterface for EhalOutputPin<P> {
    fn set_high(&mut self) -> Result<()> {
        self.pin
            .set_high()
            .map_err(|_| PlatformError::Gpio(GpioError::InvalidPin))?;
        self.level = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin
            .set_low()
            .map_err(|_| PlatformError::Gpio(GpioError::InvalidPin))?;
        self.level = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.pin
            .toggle()
            .map_err(|_| PlatformError::Gpio(GpioError::InvalidPin))?;
        self.level = !self.level;
        Ok(())
    }

    fn read(&self) -> bool {
        self.level
    }

    fn set_mode(&mut self, _mode: GpioMode) -> Result<()> {
        // Pin direction is fixed by the wrapped embedded-hal type.
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }
}

/// Wraps an embedded-hal input pin as a platform [`GpioInterface`]
///
/// embedded-hal 1.0 input reads take `&mut self`; the platform trait samples
/// through `&self`, so the pin sits behind a `RefCell`.
#[derive(Debug)]
pub struct EhalInputPin<P> {
    pin: RefCell<P>,
}

impl<P: InputPin> EhalInputPin<P> {
    /// Wrap an embedded-hal input pin
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: InputPin> GpioInterface for EhalInputPin<P> {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn toggle(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&self) -> bool {
        self.pin.borrow_mut().is_high().unwrap_or(false)
    }

    fn set_mode(&mut self, _mode: GpioMode) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }
}
