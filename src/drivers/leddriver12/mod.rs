//! LED Driver 12 Click - PCA9532-class 16-channel LED dimmer

mod driver;
pub mod registers;

pub use driver::{Error, LedDriver12, LedDriver12Config, LedState, PwmChannel};
