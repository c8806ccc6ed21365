//! SPI device handles over the Linux spidev interface.
//!
//! A [`SpiDevice`] owns the descriptor for one board and tracks its
//! lifecycle. Transfer parameters are applied once at open time and stay
//! fixed for the handle's lifetime. All calls block; a handle must be driven
//! from one thread at a time.

use crate::config::SpiDeviceConfig;
use crate::error::{Result, SpiError};
use crate::frame::FRAME_LEN;
use log::{debug, info, warn};
use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};
use std::io;

/// Lifecycle state of a device handle.
///
/// The driver moves handles between `Uninitialized`, `Initialized`, `Error`
/// and `Closed`. `Busy` and `Ready` are reserved for callers via
/// [`SpiDevice::mark_busy`] / [`SpiDevice::mark_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiStatus {
    Uninitialized,
    Initialized,
    Closed,
    Error,
    Busy,
    Ready,
}

impl SpiStatus {
    /// True for the states in which the handle holds a valid descriptor.
    pub fn descriptor_valid(self) -> bool {
        matches!(self, SpiStatus::Initialized | SpiStatus::Busy | SpiStatus::Ready)
    }
}

/// Full-duplex frame exchange, the seam between the register protocol and
/// the underlying bus. Implemented by [`SpiDevice`]; test code substitutes
/// stubs.
pub trait SpiTransport {
    /// Perform one synchronous exchange of exactly one frame in each
    /// direction. On failure the contents of `rx` are undefined.
    fn exchange(&mut self, tx: &[u8; FRAME_LEN], rx: &mut [u8; FRAME_LEN]) -> Result<()>;
}

/// Handle for one SPI-attached board.
pub struct SpiDevice {
    spi: Option<Spidev>,
    path: String,
    speed_hz: u32,
    mode: u8,
    bits_per_word: u8,
    status: SpiStatus,
}

impl SpiDevice {
    /// Create an unopened handle from its configuration.
    pub fn new(config: SpiDeviceConfig) -> Self {
        SpiDevice {
            spi: None,
            path: config.device,
            speed_hz: config.speed_hz,
            mode: config.mode,
            bits_per_word: config.bits_per_word,
            status: SpiStatus::Uninitialized,
        }
    }

    /// Open the device node and apply mode, bits per word and max speed, in
    /// that order. On any failure the partially opened descriptor is dropped
    /// and the handle is left in `Error`; there is no automatic reopening.
    pub fn open(&mut self) -> Result<()> {
        let mut spi = Spidev::open(&self.path).map_err(|source| {
            self.status = SpiStatus::Error;
            SpiError::OpenFailure {
                path: self.path.clone(),
                source,
            }
        })?;

        let mode = match self.mode {
            0 => SpiModeFlags::SPI_MODE_0,
            1 => SpiModeFlags::SPI_MODE_1,
            2 => SpiModeFlags::SPI_MODE_2,
            3 => SpiModeFlags::SPI_MODE_3,
            other => {
                self.status = SpiStatus::Error;
                return Err(SpiError::ConfigurationFailure {
                    path: self.path.clone(),
                    parameter: "mode",
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("SPI mode {} is not in 0-3", other),
                    ),
                });
            }
        };

        let steps = [
            ("mode", SpidevOptions::new().mode(mode).build()),
            (
                "bits per word",
                SpidevOptions::new().bits_per_word(self.bits_per_word).build(),
            ),
            (
                "max speed",
                SpidevOptions::new().max_speed_hz(self.speed_hz).build(),
            ),
        ];
        for (parameter, options) in steps {
            if let Err(source) = spi.configure(&options) {
                self.status = SpiStatus::Error;
                return Err(SpiError::ConfigurationFailure {
                    path: self.path.clone(),
                    parameter,
                    source,
                });
            }
        }

        info!(
            "SPI device {} ready: {} Hz, mode {}, {} bits per word",
            self.path, self.speed_hz, self.mode, self.bits_per_word
        );
        self.spi = Some(spi);
        self.status = SpiStatus::Initialized;
        Ok(())
    }

    /// One synchronous full-duplex transfer of exactly one frame, with zero
    /// inter-byte delay. On failure the contents of `rx` are undefined and
    /// must not be interpreted.
    pub fn transfer(&mut self, tx: &[u8; FRAME_LEN], rx: &mut [u8; FRAME_LEN]) -> Result<()> {
        if !self.status.descriptor_valid() {
            return Err(SpiError::DeviceUnusable {
                path: self.path.clone(),
                status: self.status,
            });
        }
        let spi = self.spi.as_mut().ok_or_else(|| SpiError::DeviceUnusable {
            path: self.path.clone(),
            status: self.status,
        })?;

        let mut xfer = SpidevTransfer::read_write(tx, rx);
        spi.transfer(&mut xfer).map_err(|source| SpiError::TransportError {
            path: self.path.clone(),
            source,
        })
    }

    /// Close the descriptor and mark the handle `Closed`. Safe to call more
    /// than once and on handles that never opened.
    pub fn close(&mut self) {
        if self.spi.take().is_some() {
            debug!("closed SPI device {}", self.path);
        }
        self.status = SpiStatus::Closed;
    }

    /// Flag the handle busy for higher layers. No effect unless the handle
    /// currently holds a descriptor.
    pub fn mark_busy(&mut self) {
        if self.status.descriptor_valid() {
            self.status = SpiStatus::Busy;
        }
    }

    /// Flag the handle ready for higher layers. No effect unless the handle
    /// currently holds a descriptor.
    pub fn mark_ready(&mut self) {
        if self.status.descriptor_valid() {
            self.status = SpiStatus::Ready;
        }
    }

    pub fn is_open(&self) -> bool {
        self.spi.is_some()
    }

    pub fn status(&self) -> SpiStatus {
        self.status
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl SpiTransport for SpiDevice {
    fn exchange(&mut self, tx: &[u8; FRAME_LEN], rx: &mut [u8; FRAME_LEN]) -> Result<()> {
        self.transfer(tx, rx)
    }
}

/// Open every handle in order, collecting one result per handle. A failure
/// does not stop the remaining handles from being attempted.
pub fn initialize_all<'a, I>(devices: I) -> Vec<Result<()>>
where
    I: IntoIterator<Item = &'a mut SpiDevice>,
{
    devices
        .into_iter()
        .map(|dev| {
            let res = dev.open();
            if let Err(e) = &res {
                warn!("initialization of {} failed: {}", dev.path(), e);
            }
            res
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(device: &str) -> SpiDeviceConfig {
        SpiDeviceConfig {
            device: device.to_string(),
            speed_hz: 1_000_000,
            mode: 0,
            bits_per_word: 8,
        }
    }

    #[test]
    fn new_handle_is_uninitialized() {
        let dev = SpiDevice::new(config("/dev/spidev4.0"));
        assert_eq!(dev.status(), SpiStatus::Uninitialized);
        assert!(!dev.is_open());
    }

    #[test]
    fn open_failure_ends_in_error_status() {
        let mut dev = SpiDevice::new(config("/nonexistent/spidev9.9"));
        let err = dev.open().unwrap_err();
        assert!(matches!(err, SpiError::OpenFailure { .. }));
        assert_eq!(dev.status(), SpiStatus::Error);
        assert!(!dev.is_open());
    }

    #[test]
    fn configuration_failure_drops_descriptor() {
        // /dev/null opens read-write but rejects the spidev ioctls, which
        // exercises the configure-step failure path without hardware.
        let mut dev = SpiDevice::new(config("/dev/null"));
        let err = dev.open().unwrap_err();
        assert!(matches!(err, SpiError::ConfigurationFailure { .. }));
        assert_eq!(dev.status(), SpiStatus::Error);
        assert!(!dev.is_open());
    }

    #[test]
    fn invalid_mode_is_a_configuration_failure() {
        let mut cfg = config("/dev/null");
        cfg.mode = 7;
        let mut dev = SpiDevice::new(cfg);
        let err = dev.open().unwrap_err();
        assert!(
            matches!(err, SpiError::ConfigurationFailure { parameter: "mode", .. }),
            "unexpected error: {err}"
        );
        assert_eq!(dev.status(), SpiStatus::Error);
    }

    #[test]
    fn transfer_on_unopened_handle_is_rejected() {
        let mut dev = SpiDevice::new(config("/dev/spidev4.0"));
        let mut rx = [0u8; FRAME_LEN];
        let err = dev.transfer(&[0u8; FRAME_LEN], &mut rx).unwrap_err();
        assert!(matches!(err, SpiError::DeviceUnusable { .. }));
    }

    #[test]
    fn close_is_idempotent() {
        let mut dev = SpiDevice::new(config("/dev/spidev4.0"));
        dev.close();
        assert_eq!(dev.status(), SpiStatus::Closed);
        dev.close();
        assert_eq!(dev.status(), SpiStatus::Closed);

        let mut rx = [0u8; FRAME_LEN];
        let err = dev.transfer(&[0u8; FRAME_LEN], &mut rx).unwrap_err();
        assert!(matches!(
            err,
            SpiError::DeviceUnusable { status: SpiStatus::Closed, .. }
        ));
    }

    #[test]
    fn mark_busy_requires_valid_descriptor() {
        let mut dev = SpiDevice::new(config("/dev/spidev4.0"));
        dev.mark_busy();
        assert_eq!(dev.status(), SpiStatus::Uninitialized);
        dev.mark_ready();
        assert_eq!(dev.status(), SpiStatus::Uninitialized);
    }

    #[test]
    fn initialize_all_keeps_going_after_a_failure() {
        let mut first = SpiDevice::new(config("/nonexistent/spidev9.9"));
        let mut second = SpiDevice::new(config("/nonexistent/spidev9.8"));
        let results = initialize_all([&mut first, &mut second]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_err()));
        assert_eq!(first.status(), SpiStatus::Error);
        assert_eq!(second.status(), SpiStatus::Error);
    }
}
