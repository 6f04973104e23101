//! Compass 4 Click - AK09915C 3-axis magnetometer (I2C or SPI)

mod driver;
mod interface;
pub mod registers;

pub use driver::{Compass4, Compass4Config, Error, Mode};
pub use interface::{Compass4Bus, Compass4I2c, Compass4Spi};
