//! TSL2591 register definitions
//!
//! Based on the TSL2591 datasheet. Every register access goes through the
//! command register, so addresses below are OR-ed with [`COMMAND_BIT`].

#![allow(dead_code)]

/// Fixed I2C address
pub const DEFAULT_ADDR: u8 = 0x29;

/// Command register select (CMD=1, normal transaction)
pub const COMMAND_BIT: u8 = 0xA0;

/// Enable register
pub const REG_ENABLE: u8 = 0x00;
/// Oscillator power on
pub const ENABLE_PON: u8 = 0x01;
/// ALS enable
pub const ENABLE_AEN: u8 = 0x02;

/// Control register (gain, integration time, system reset)
pub const REG_CONFIG: u8 = 0x01;
/// System reset (self-clearing)
pub const CONFIG_SRESET: u8 = 0x80;

/// Device ID register
pub const REG_ID: u8 = 0x12;
/// Expected ID value
pub const DEVICE_ID: u8 = 0x50;

/// Status register
pub const REG_STATUS: u8 = 0x13;
/// ALS data valid
pub const STATUS_AVALID: u8 = 0x01;

/// Channel 0 (full spectrum) data, low byte first
pub const REG_C0DATA_L: u8 = 0x14;
/// Channel 1 (infrared) data, low byte first
pub const REG_C1DATA_L: u8 = 0x16;

/// Raw count that flags an overflowed integration cycle
pub const CHANNEL_SATURATED: u16 = 0xFFFF;

/// Device factor for the lux equation
pub const LUX_DF: f32 = 408.0;

/// Data-valid poll attempt budget
pub const MAX_READY_ATTEMPTS: u32 = 150;
/// Delay between data-valid polls in milliseconds
pub const READY_POLL_DELAY_MS: u32 = 5;
