//! Wio-E5 AT command set and framing constants

#![allow(dead_code)]

/// Liveness probe
pub const AT: &str = "AT";
/// Query device EUI / app EUI
pub const ID: &str = "AT+ID";
/// Query firmware version
pub const VER: &str = "AT+VER";
/// Software reset
pub const RESET: &str = "AT+RESET";
/// Select radio mode (parameterized)
pub const MODE: &str = "AT+MODE";
/// Join the network (LoRaWAN modes)
pub const JOIN: &str = "AT+JOIN";
/// Send an unconfirmed text payload (parameterized)
pub const MSG: &str = "AT+MSG";

/// Command and response line terminator
pub const TERMINATOR: &str = "\r\n";
/// Successful response marker
pub const RESPONSE_OK: &str = "+AT: OK";
/// Failure response marker, anchored on the response-field separator so
/// payload text containing "ERROR" is not misread as a modem failure
pub const RESPONSE_ERROR: &str = ": ERROR";

/// Response accumulator capacity in bytes
pub const RESPONSE_CAPACITY: usize = 256;
/// Response poll attempt budget
pub const MAX_READ_ATTEMPTS: u32 = 100;
/// Delay between response polls in milliseconds
pub const READ_POLL_DELAY_MS: u32 = 10;
