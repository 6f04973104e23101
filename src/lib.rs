#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! click-drivers - Blocking Rust drivers for MikroElektronika Click boards
//!
//! Each driver under [`drivers`] is an isolated leaf talking to one physical
//! chip through its datasheet register map. Drivers are written against the
//! bus traits in [`platform::traits`], so they run unchanged on any HAL
//! (through the [`platform::ehal`] adapters) or against the in-memory mock
//! platform used by the test suite.

// Platform abstraction layer (bus traits, errors, mock + embedded-hal impls)
pub mod platform;

// Click board drivers using platform abstraction
pub mod drivers;

// Logging macros (defmt / log / no-op dispatch)
pub mod logging;
