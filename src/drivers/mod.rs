//! Click board drivers
//!
//! One submodule per board. Every driver is an isolated leaf: it owns its bus
//! handle(s), auxiliary pins, and register map, and shares nothing with the
//! other drivers.

pub mod adc4;
pub mod ambient21;
pub mod battmon;
pub mod compass4;
pub mod eeprom5;
pub mod gainamp3;
pub mod hbridge6;
pub mod leddriver12;
pub mod lr10;
pub mod oledw;
pub mod pht;
