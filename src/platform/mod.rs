//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the buses and pins a Click
//! board occupies on its mikroBUS socket: I2C, SPI, UART, plus the auxiliary
//! GPIO/PWM lines and a delay source. Drivers depend only on the traits in
//! [`traits`]; concrete implementations are supplied by the [`ehal`] adapters
//! (any embedded-hal 1.0 HAL) or by the in-memory [`mock`] platform.

pub mod error;
pub mod traits;

// Adapters over embedded-hal 1.0 / embedded-io implementations
pub mod ehal;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    GpioInterface, I2cInterface, PwmInterface, SpiInterface, TimerInterface, UartInterface,
};
