//! M95M04 instruction set and memory geometry

#![allow(dead_code)]

/// Set write enable latch
pub const OP_WREN: u8 = 0x06;
/// Reset write enable latch
pub const OP_WRDI: u8 = 0x04;
/// Read status register
pub const OP_RDSR: u8 = 0x05;
/// Write status register
pub const OP_WRSR: u8 = 0x01;
/// Read from memory
pub const OP_READ: u8 = 0x03;
/// Write to memory
pub const OP_WRITE: u8 = 0x02;

/// Write in progress
pub const STATUS_WIP: u8 = 0x01;
/// Write enable latch
pub const STATUS_WEL: u8 = 0x02;
/// Block protect bits
pub const STATUS_BP_MASK: u8 = 0x0C;
/// Status register write disable
pub const STATUS_SRWD: u8 = 0x80;

/// Total memory size in bytes (4 Mbit, 19-bit address space)
pub const MEMORY_SIZE: u32 = 0x8_0000;
/// Write page size in bytes
pub const PAGE_SIZE: u32 = 512;

/// Write-in-progress poll attempt budget (t_W is 10 ms max)
pub const MAX_WIP_ATTEMPTS: u32 = 20;
/// Delay between write-in-progress polls in milliseconds
pub const WIP_POLL_DELAY_MS: u32 = 1;
