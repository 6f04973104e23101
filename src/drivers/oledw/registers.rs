//! SSD1306 command set and panel geometry

#![allow(dead_code)]

/// Default 7-bit slave address (I2C strapping)
pub const DEFAULT_ADDR: u8 = 0x3C;

/// I2C control byte announcing a command
pub const CONTROL_COMMAND: u8 = 0x00;
/// I2C control byte announcing display data
pub const CONTROL_DATA: u8 = 0x40;

/// Display off (sleep)
pub const CMD_DISPLAY_OFF: u8 = 0xAE;
/// Display on
pub const CMD_DISPLAY_ON: u8 = 0xAF;
/// Set display clock divide ratio / oscillator frequency
pub const CMD_SET_DISPLAY_CLOCK: u8 = 0xD5;
/// Set multiplex ratio
pub const CMD_SET_MULTIPLEX: u8 = 0xA8;
/// Set display offset
pub const CMD_SET_DISPLAY_OFFSET: u8 = 0xD3;
/// Set display start line (base value, line in low 6 bits)
pub const CMD_SET_START_LINE: u8 = 0x40;
/// Charge pump setting
pub const CMD_CHARGE_PUMP: u8 = 0x8D;
/// Segment remap, column 127 mapped to SEG0
pub const CMD_SEGMENT_REMAP: u8 = 0xA1;
/// COM scan direction, remapped
pub const CMD_COM_SCAN_DEC: u8 = 0xC8;
/// Set COM pins hardware configuration
pub const CMD_SET_COM_PINS: u8 = 0xDA;
/// Set contrast
pub const CMD_SET_CONTRAST: u8 = 0x81;
/// Set pre-charge period
pub const CMD_SET_PRECHARGE: u8 = 0xD9;
/// Set VCOMH deselect level
pub const CMD_SET_VCOM_DESELECT: u8 = 0xDB;
/// Resume display from RAM content
pub const CMD_DISPLAY_FROM_RAM: u8 = 0xA4;
/// Normal (non-inverted) display
pub const CMD_NORMAL_DISPLAY: u8 = 0xA6;
/// Page start address (base value, page in low 3 bits)
pub const CMD_PAGE_ADDR: u8 = 0xB0;
/// Lower column start address nibble (base value)
pub const CMD_COLUMN_LOW: u8 = 0x00;
/// Upper column start address nibble (base value)
pub const CMD_COLUMN_HIGH: u8 = 0x10;

/// Clock divide value applied at init
pub const DISPLAY_CLOCK_DIV: u8 = 0x80;
/// Multiplex ratio for the 39-row panel
pub const MULTIPLEX_RATIO: u8 = 0x27;
/// Internal charge pump enabled
pub const CHARGE_PUMP_ON: u8 = 0x14;
/// COM pins configuration for the panel
pub const COM_PINS_CONFIG: u8 = 0x12;
/// Contrast applied by `default_cfg`
pub const DEFAULT_CONTRAST: u8 = 0x8F;

/// Panel width in pixels
pub const WIDTH: usize = 96;
/// Panel height in pixels
pub const HEIGHT: usize = 39;
/// Number of 8-row pages covering the panel
pub const PAGES: usize = 5;
/// Full frame size in bytes
pub const FRAME_SIZE: usize = WIDTH * PAGES;

/// Reset pulse width in milliseconds
pub const RESET_PULSE_MS: u32 = 1;
/// Settle time after reset in milliseconds
pub const RESET_SETTLE_MS: u32 = 10;
