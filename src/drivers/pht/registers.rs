//! MS8607 command set
//!
//! The package holds two dies on separate I2C addresses: the barometric
//! pressure/temperature die and the relative humidity die.

#![allow(dead_code)]

/// Pressure/temperature die 7-bit address
pub const PT_ADDR: u8 = 0x76;
/// Relative humidity die 7-bit address
pub const RH_ADDR: u8 = 0x40;

/// P/T die reset
pub const CMD_PT_RESET: u8 = 0x1E;
/// Start a D1 (pressure) conversion; OSR offset added
pub const CMD_CONVERT_D1: u8 = 0x40;
/// Start a D2 (temperature) conversion; OSR offset added
pub const CMD_CONVERT_D2: u8 = 0x50;
/// Read the 24-bit conversion result
pub const CMD_ADC_READ: u8 = 0x00;
/// PROM read base; word index doubles onto it
pub const CMD_PROM_READ: u8 = 0xA0;

/// RH die reset
pub const CMD_RH_RESET: u8 = 0xFE;
/// Start a no-hold humidity measurement
pub const CMD_RH_MEASURE: u8 = 0xF5;

/// Number of calibration PROM words
pub const PROM_WORDS: usize = 7;
/// CRC-4 remainder polynomial (x^4 + x^3 + 1, aligned to bit 15)
pub const PROM_CRC_POLY: u16 = 0x3000;

/// Status bits on the raw humidity word
pub const RH_STATUS_MASK: u16 = 0x0003;

/// Settle time after a P/T die reset in milliseconds
pub const PT_RESET_DELAY_MS: u32 = 3;
/// Settle time after an RH die reset in milliseconds
pub const RH_RESET_DELAY_MS: u32 = 15;
/// Worst-case no-hold humidity conversion time in milliseconds
pub const RH_CONVERSION_DELAY_MS: u32 = 16;
