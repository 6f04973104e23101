//! PHT Click - MS8607 pressure / humidity / temperature combo sensor

mod driver;
pub mod registers;

pub use driver::{prom_crc, Calibration, Error, Measurements, Osr, Pht, PhtConfig};
