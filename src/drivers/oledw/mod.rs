//! OLED W Click - SSD1306 96x39 monochrome OLED

mod driver;
mod interface;
pub mod registers;

pub use driver::{Error, OledW, OledWConfig};
pub use interface::{OledWBus, OledWI2c, OledWSpi};
