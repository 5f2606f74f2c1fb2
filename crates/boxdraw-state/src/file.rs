// Author: Dustin Pilgrim
// License: MIT

//! On-disk form of a saved parcel: one frame holding a postcard-encoded
//! version number followed by the parcel.

use std::io::{Read, Write};

use crate::bundle::Parcel;
use crate::error::{Result, StateError};
use crate::framing::{read_frame, write_frame, MAX_FRAME};

pub const STATE_VERSION: u32 = 1;

pub fn encode_parcel(parcel: &Parcel) -> Result<Vec<u8>> {
    let mut bytes = postcard::to_allocvec(&STATE_VERSION)?;
    bytes.extend(postcard::to_allocvec(parcel)?);
    Ok(bytes)
}

pub fn decode_parcel(bytes: &[u8]) -> Result<Parcel> {
    let (version, rest) = postcard::take_from_bytes::<u32>(bytes)?;
    if version != STATE_VERSION {
        return Err(StateError::VersionMismatch {
            file: version,
            supported: STATE_VERSION,
        });
    }

    let parcel: Parcel = postcard::from_bytes(rest)?;
    Ok(parcel)
}

pub fn write_parcel<W: Write>(w: W, parcel: &Parcel) -> Result<()> {
    let bytes = encode_parcel(parcel)?;
    write_frame(w, &bytes)
}

pub fn read_parcel<R: Read>(r: R) -> Result<Parcel> {
    let bytes = read_frame(r, MAX_FRAME)?;
    decode_parcel(&bytes)
}
