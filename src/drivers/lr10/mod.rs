//! LR 10 Click - Wio-E5 LoRa modem driven over an AT command channel

pub mod commands;
mod driver;

pub use driver::{Error, Lr10, Response};
