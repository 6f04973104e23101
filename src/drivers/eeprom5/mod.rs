//! EEPROM 5 Click - M95M04 4-Mbit SPI EEPROM

mod driver;
pub mod registers;

pub use driver::{Eeprom5, Error};
