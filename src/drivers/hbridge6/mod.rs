//! H-Bridge 6 Click - DRV8837-class brushed DC motor driver

mod driver;

pub use driver::{Error, HBridge6, HBridge6Config, MAX_PWM_FREQUENCY_HZ, MIN_PWM_FREQUENCY_HZ};
