//! ADA4254 register map and frame constants

#![allow(dead_code)]

/// Gain and excitation amplifier mux
pub const REG_GAIN_MUX: u8 = 0x00;
/// Software reset
pub const REG_RESET: u8 = 0x01;
/// Synchronization configuration
pub const REG_SYNC_CFG: u8 = 0x02;
/// Digital error flags
pub const REG_DIGITAL_ERR: u8 = 0x03;
/// Analog error flags
pub const REG_ANALOG_ERR: u8 = 0x04;
/// GPIO data
pub const REG_GPIO_DATA: u8 = 0x05;
/// Input multiplexer
pub const REG_INPUT_MUX: u8 = 0x06;

/// Read flag on the register address byte
pub const SPI_READ: u8 = 0x80;

/// Software reset bit
pub const RESET_SW: u8 = 0x01;

/// Gain code position inside GAIN_MUX
pub const GAIN_MUX_SHIFT: u8 = 3;
/// Gain code mask inside GAIN_MUX
pub const GAIN_MUX_MASK: u8 = 0xF8;

/// CRC-8 generator polynomial, x^8 + x^2 + x + 1
pub const CRC_POLY: u8 = 0x07;

/// Settle time after a software reset in milliseconds
pub const RESET_DELAY_MS: u32 = 1;
