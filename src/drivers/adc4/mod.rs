//! ADC 4 Click - LTC2485 24-bit delta-sigma ADC (I2C)

mod driver;
pub mod registers;

pub use driver::{Adc4, Adc4Config, Error, InputChannel, Rejection};
