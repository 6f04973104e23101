//! Ambient 21 Click - TSL2591 ambient light sensor (I2C)

mod driver;
pub mod registers;

pub use driver::{Ambient21, Ambient21Config, Error, Gain, IntegrationTime};
