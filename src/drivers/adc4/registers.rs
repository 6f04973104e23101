//! LTC2485 command byte and conversion word layout
//!
//! The converter has no register file: a single command byte selects input
//! and conversion options, and every read returns one 32-bit conversion word.

#![allow(dead_code)]

/// Default I2C address (CA0/CA1 tied low)
pub const DEFAULT_ADDR: u8 = 0x14;

// Command byte bits

/// Apply the new configuration (must accompany any option change)
pub const CMD_UPDATE: u8 = 0x80;
/// Select the differential input (default)
pub const INPUT_VIN: u8 = 0x00;
/// Select the internal temperature sensor (PTAT)
pub const INPUT_TEMPERATURE: u8 = 0x08;
/// Simultaneous 50 Hz / 60 Hz rejection (default)
pub const REJECT_50_60HZ: u8 = 0x00;
/// 50 Hz rejection only
pub const REJECT_50HZ: u8 = 0x02;
/// 60 Hz rejection only
pub const REJECT_60HZ: u8 = 0x04;
/// Double output rate (trades off rejection)
pub const SPEED_2X: u8 = 0x01;

// Conversion word layout (4 bytes, big-endian)

/// Conversion-in-progress flag, bit 31
pub const EOC_BUSY_MASK: u8 = 0x80;
/// Sign flag, bit 30 (set for negative inputs)
pub const SIGN_MASK: u8 = 0x40;
/// 23-bit magnitude, bits 22:0
pub const MAGNITUDE_MASK: u32 = 0x007F_FFFF;

/// Positive full-scale code (2^23 - 1)
pub const FULL_SCALE: u32 = 8_388_607;

/// Ready-poll attempt budget
pub const MAX_READY_ATTEMPTS: u32 = 60;
/// Delay between ready polls in milliseconds (one conversion is ~150 ms)
pub const READY_POLL_DELAY_MS: u32 = 5;
