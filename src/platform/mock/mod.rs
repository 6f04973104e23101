//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use click_drivers::platform::mock::MockI2c;
//! use click_drivers::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::new(Default::default());
//! i2c.set_read_data(&[0x42]);
//!
//! let mut buf = [0u8; 1];
//! i2c.read(0x48, &mut buf).unwrap();
//! assert_eq!(buf[0], 0x42);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;
mod pwm;
mod spi;
mod timer;
mod uart;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use pwm::MockPwm;
pub use spi::{MockSpi, SpiTransaction};
pub use timer::MockTimer;
pub use uart::MockUart;
