// Author: Dustin Pilgrim
// License: MIT

//! Length-delimited frames: a little-endian `u32` byte count, then the body.

use std::io::{Read, Write};

use crate::error::{Result, StateError};

/// Upper bound accepted by `read_frame` for state files.
pub const MAX_FRAME: usize = 16 * 1024 * 1024;

pub fn write_frame<W: Write>(mut w: W, bytes: &[u8]) -> Result<()> {
    let len: u32 = bytes
        .len()
        .try_into()
        .map_err(|_| StateError::FrameTooLarge)?;
    w.write_all(&len.to_le_bytes())?;
    w.write_all(bytes)?;
    w.flush()?;
    Ok(())
}

pub fn read_frame<R: Read>(mut r: R, max_len: usize) -> Result<Vec<u8>> {
    let mut len_buf = [0u8; 4];
    r.read_exact(&mut len_buf)?;
    let len = u32::from_le_bytes(len_buf) as usize;

    if len > max_len {
        return Err(StateError::FrameTooLarge);
    }

    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}
