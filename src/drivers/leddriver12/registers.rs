//! PCA9532 register map

#![allow(dead_code)]

/// Default 7-bit slave address
pub const DEFAULT_ADDR: u8 = 0x60;

/// Input state, LEDs 0-7 (read only)
pub const REG_INPUT0: u8 = 0x00;
/// Input state, LEDs 8-15 (read only)
pub const REG_INPUT1: u8 = 0x01;
/// Blink prescaler 0
pub const REG_PSC0: u8 = 0x02;
/// Duty cycle 0
pub const REG_PWM0: u8 = 0x03;
/// Blink prescaler 1
pub const REG_PSC1: u8 = 0x04;
/// Duty cycle 1
pub const REG_PWM1: u8 = 0x05;
/// LED selector, LEDs 0-3
pub const REG_LS0: u8 = 0x06;
/// LED selector, LEDs 4-7
pub const REG_LS1: u8 = 0x07;
/// LED selector, LEDs 8-11
pub const REG_LS2: u8 = 0x08;
/// LED selector, LEDs 12-15
pub const REG_LS3: u8 = 0x09;

/// Auto-increment flag on the control byte
pub const AUTO_INCREMENT: u8 = 0x10;

/// Blink prescaler clock in Hz; period = (PSC + 1) / 152
pub const PRESCALER_CLOCK_HZ: f32 = 152.0;

/// Number of LED channels
pub const LED_COUNT: u8 = 16;
