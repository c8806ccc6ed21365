//! Register read/write protocol on top of a frame transport.
//!
//! One transaction per call, single attempt, no checksum. Byte-level
//! integrity is the bus's problem, not this layer's.

use crate::device::SpiTransport;
use crate::error::Result;
use crate::frame::{self, FRAME_LEN};
use log::debug;

/// Write a 32-bit value to a register. The response frame carries nothing of
/// interest and is discarded, but a failed exchange is a failed write.
pub fn write_register<T: SpiTransport>(transport: &mut T, address: u16, value: u32) -> Result<()> {
    debug!("write register {:#06x} <- {:#010x}", address, value);

    let tx = frame::encode_write(address, value)?;
    let mut rx = [0u8; FRAME_LEN];
    transport.exchange(&tx, &mut rx)?;
    Ok(())
}

/// Read a 32-bit value from a register. The value arrives in the payload
/// bytes of the response frame.
pub fn read_register<T: SpiTransport>(transport: &mut T, address: u16) -> Result<u32> {
    let tx = frame::encode_read(address)?;
    let mut rx = [0u8; FRAME_LEN];
    transport.exchange(&tx, &mut rx)?;

    let value = frame::payload(&rx);
    debug!("read register {:#06x} -> {:#010x}", address, value);
    Ok(value)
}
