//! Platform trait implementations over `embedded-hal` 1.0 / `embedded-io`
//!
//! These adapters let the drivers run on any HAL in the ecosystem: wrap the
//! HAL's bus/pin/delay objects and hand the wrappers to a driver constructor.
//! HAL error values are mapped onto the platform error taxonomy via the
//! `ErrorKind` each embedded-hal trait defines.

mod gpio;
mod i2c;
mod pwm;
mod spi;
mod timer;
mod uart;

pub use gpio::{EhalInputPin, EhalOutputPin};
pub use i2c::EhalI2c;
pub use pwm::EhalPwm;
pub use spi::EhalSpi;
pub use timer::EhalTimer;
pub use uart::EhalUart;
