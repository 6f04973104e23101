//! BATT-MON Click - STC3115 battery fuel gauge (I2C)

mod driver;
pub mod registers;

pub use driver::{BattMon, BattMonConfig, BattMonData, Error};
