//! LR 10 Click driver implementation
//!
//! The Wio-E5 module speaks CRLF-terminated AT commands at 9600 baud by
//! default. Responses arrive asynchronously, so reads poll with a bounded
//! attempt budget and accumulate into a fixed-capacity buffer.

use super::commands;
use crate::platform::{PlatformError, TimerInterface, UartInterface};
use heapless::String;

/// Response accumulator type
pub type Response = String<{ commands::RESPONSE_CAPACITY }>;

/// LR 10 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Underlying UART operation failed
    Bus(PlatformError),
    /// The modem answered with an error response
    ModemError,
    /// No recognizable response within the attempt budget
    Timeout,
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Bus(err)
    }
}

/// LR 10 Click driver (Wio-E5)
pub struct Lr10<UART, TIMER> {
    uart: UART,
    timer: TIMER,
}

impl<UART, TIMER> Lr10<UART, TIMER>
where
    UART: UartInterface,
    TIMER: TimerInterface,
{
    /// Create a new driver
    pub fn new(uart: UART, timer: TIMER) -> Self {
        Self { uart, timer }
    }

    /// Probe the modem with a bare `AT` and wait for its acknowledgment
    pub fn init(&mut self) -> Result<(), Error> {
        self.send_command(commands::AT)?;
        self.wait_response()?;
        crate::log_info!("Wio-E5 modem responding");
        Ok(())
    }

    /// Send one AT command, terminator appended
    pub fn send_command(&mut self, command: &str) -> Result<(), Error> {
        self.write_all(command.as_bytes())?;
        self.write_all(commands::TERMINATOR.as_bytes())?;
        Ok(())
    }

    /// Send one parameterized AT command (`CMD=PARAM`), terminator appended
    pub fn send_command_with_param(&mut self, command: &str, param: &str) -> Result<(), Error> {
        self.write_all(command.as_bytes())?;
        self.write_all(b"=")?;
        self.write_all(param.as_bytes())?;
        self.write_all(commands::TERMINATOR.as_bytes())?;
        Ok(())
    }

    /// Accumulate response bytes until a status marker arrives or the
    /// attempt budget runs out
    ///
    /// Bytes past the accumulator capacity are dropped.
    pub fn read_response(&mut self) -> Result<Response, Error> {
        let mut response = Response::new();
        let mut chunk = [0u8; 32];

        for _ in 0..commands::MAX_READ_ATTEMPTS {
            let n = self.uart.read(&mut chunk)?;
            if n == 0 {
                self.timer.delay_ms(commands::READ_POLL_DELAY_MS)?;
                continue;
            }
            for &byte in &chunk[..n] {
                // Capacity reached: keep draining, keep what fits
                let _ = response.push(byte as char);
            }
            if response.contains(commands::RESPONSE_OK)
                || response.contains(commands::RESPONSE_ERROR)
            {
                break;
            }
        }
        Ok(response)
    }

    /// Read a response and classify it
    pub fn wait_response(&mut self) -> Result<(), Error> {
        let response = self.read_response()?;
        if response.contains(commands::RESPONSE_OK) {
            return Ok(());
        }
        if response.contains(commands::RESPONSE_ERROR) {
            crate::log_warn!("Wio-E5 rejected command: {}", response.as_str());
            return Err(Error::ModemError);
        }
        Err(Error::Timeout)
    }

    fn write_all(&mut self, mut data: &[u8]) -> Result<(), Error> {
        while !data.is_empty() {
            let n = self.uart.write(data)?;
            data = &data[n..];
        }
        Ok(())
    }
}
