//! Register-level SPI access to the machine's three I/O boards.
//!
//! This crate drives the ADC/digital-I/O, encoder and PWM/counter boards
//! attached to the host over Linux spidev. Each register access is one
//! 6-byte full-duplex transaction: a 16-bit command word carrying the
//! address and read/write flag, followed by a big-endian 32-bit payload.

pub mod boards;
pub mod config;
pub mod device;
pub mod error;
pub mod frame;
pub mod protocol;
pub mod registers;

// Re-export main types for convenience
pub use boards::Boards;
pub use config::Config;
pub use device::{SpiDevice, SpiStatus, SpiTransport};
pub use error::SpiError;
pub use protocol::{read_register, write_register};
