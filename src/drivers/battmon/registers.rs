//! STC3115 register definitions
//!
//! Based on the STC3115 datasheet. Multi-byte registers are little-endian.

#![allow(dead_code)]

/// Fixed I2C address
pub const DEFAULT_ADDR: u8 = 0x70;

/// Operating mode register
pub const REG_MODE: u8 = 0;
/// Voltage-only mode (coulomb counter off)
pub const MODE_VMODE: u8 = 0x01;
/// Alarm function enable
pub const MODE_ALM_ENA: u8 = 0x08;
/// Gas gauge run
pub const MODE_GG_RUN: u8 = 0x10;

/// Control and status register
pub const REG_CTRL: u8 = 1;
/// Gas gauge reset (self-clearing)
pub const CTRL_GG_RST: u8 = 0x02;
/// Power-on-reset detected
pub const CTRL_PORDET: u8 = 0x10;
/// Low-SOC alarm tripped
pub const CTRL_ALM_SOC: u8 = 0x20;
/// Low-voltage alarm tripped
pub const CTRL_ALM_VOLT: u8 = 0x40;

/// State of charge, 16 bits, 1/512 % per LSB
pub const REG_SOC: u8 = 2;
/// Conversion counter, 16 bits
pub const REG_COUNTER: u8 = 4;
/// Battery current, 16 bits signed, 5.88 uV over Rsense per LSB
pub const REG_CURRENT: u8 = 6;
/// Battery voltage, 16 bits, 2.2 mV per LSB
pub const REG_VOLTAGE: u8 = 8;
/// Die temperature, 8 bits signed, 1 degC per LSB
pub const REG_TEMPERATURE: u8 = 10;
/// Open-circuit voltage, 16 bits, 0.55 mV per LSB
pub const REG_OCV: u8 = 13;
/// Coulomb-counter gain configuration
pub const REG_CC_CNF: u8 = 15;
/// Voltage-mode gain configuration
pub const REG_VM_CNF: u8 = 17;
/// Low-SOC alarm threshold, 0.5 % per LSB
pub const REG_ALARM_SOC: u8 = 19;
/// Low-voltage alarm threshold, 17.6 mV per LSB
pub const REG_ALARM_VOLTAGE: u8 = 20;
/// Relaxation current threshold, 47.04 uV over Rsense per LSB
pub const REG_CURRENT_THRES: u8 = 21;
/// Part identification register
pub const REG_ID: u8 = 24;
/// Expected ID value
pub const ID_VALUE: u8 = 0x14;
/// First of 16 general-purpose RAM bytes
pub const REG_RAM: u8 = 32;
/// RAM size in bytes
pub const RAM_SIZE: u8 = 16;
/// Last addressable register (end of the OCV adjustment table)
pub const LAST_REG: u8 = 63;

// Scale factors

/// SOC percent per LSB
pub const SOC_LSB_PERCENT: f32 = 1.0 / 512.0;
/// Voltage millivolts per LSB
pub const VOLTAGE_LSB_MV: f32 = 2.2;
/// Current sense microvolts per LSB
pub const CURRENT_LSB_UV: f32 = 5.88;
/// Low-voltage alarm millivolts per LSB
pub const ALARM_VOLTAGE_LSB_MV: f32 = 17.6;
/// Low-SOC alarm percent per LSB
pub const ALARM_SOC_LSB_PERCENT: f32 = 0.5;
/// Relaxation threshold microvolts per LSB
pub const CURRENT_THRES_LSB_UV: f32 = 47.04;
