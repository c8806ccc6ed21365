//! Error types for the SPI board drivers.

use crate::device::SpiStatus;
use std::io;
use thiserror::Error;

/// Failures surfaced by the transport and register-protocol layers.
///
/// Every failure carries the device path (or offending address) so callers
/// can log which board and which step went wrong.
#[derive(Debug, Error)]
pub enum SpiError {
    /// The device node could not be opened.
    #[error("failed to open SPI device {path}")]
    OpenFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An opened device rejected one of the transfer parameters.
    #[error("failed to set {parameter} on {path}")]
    ConfigurationFailure {
        path: String,
        parameter: &'static str,
        #[source]
        source: io::Error,
    },

    /// A full-duplex transfer failed at the spidev layer.
    #[error("SPI transfer failed on {path}")]
    TransportError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A transfer was attempted on a handle with no valid descriptor.
    #[error("SPI device {path} is unusable (status {status:?})")]
    DeviceUnusable { path: String, status: SpiStatus },

    /// The register address does not fit the command word's address field.
    #[error("register address {address:#06x} exceeds the 8-bit address field")]
    AddressOutOfRange { address: u16 },
}

pub type Result<T> = std::result::Result<T, SpiError>;
