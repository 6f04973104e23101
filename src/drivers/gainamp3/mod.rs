//! Gain AMP 3 Click - ADA4254 programmable gain instrumentation amplifier

mod driver;
pub mod registers;

pub use driver::{calculate_crc, Error, Gain, GainAmp3, GainAmp3Config, InputMux};
