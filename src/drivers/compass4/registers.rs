//! AK09915C register definitions

#![allow(dead_code)]

/// I2C address with CAD0/CAD1 low
pub const DEFAULT_ADDR: u8 = 0x0C;

/// Company ID register
pub const REG_WIA1: u8 = 0x00;
/// AKM company code
pub const COMPANY_ID: u8 = 0x48;
/// Device ID register
pub const REG_WIA2: u8 = 0x01;
/// AK09915C device code
pub const DEVICE_ID: u8 = 0x10;

/// Status 1 register
pub const REG_ST1: u8 = 0x10;
/// Data ready
pub const ST1_DRDY: u8 = 0x01;
/// Data overrun
pub const ST1_DOR: u8 = 0x02;

/// Measurement data, X axis low byte first (little-endian, X/Y/Z)
pub const REG_HXL: u8 = 0x11;

/// Status 2 register; reading it closes the measurement
pub const REG_ST2: u8 = 0x18;
/// Magnetic sensor overflow
pub const ST2_HOFL: u8 = 0x08;

/// Control 2 register (operating mode)
pub const REG_CNTL2: u8 = 0x31;
/// Control 3 register
pub const REG_CNTL3: u8 = 0x32;
/// Soft reset (self-clearing)
pub const CNTL3_SRST: u8 = 0x01;

/// SPI read flag (register address top bit)
pub const SPI_READ: u8 = 0x80;

/// Sensitivity in microtesla per LSB
pub const SENSITIVITY_UT: f32 = 0.15;

/// Data-ready poll attempt budget
pub const MAX_READY_ATTEMPTS: u32 = 100;
/// Delay between data-ready polls in milliseconds
pub const READY_POLL_DELAY_MS: u32 = 2;
