// Author: Dustin Pilgrim
// License: MIT

pub mod bundle;
pub mod codec;
pub mod error;
pub mod file;
pub mod framing;

pub use bundle::{Bundle, Parcel, Value};
pub use codec::{BOX_COUNT_KEY, BOX_KEY_PREFIX, PARENT_STATE_KEY, restore_boxes, save_boxes};
pub use error::{Result, StateError};
pub use file::{STATE_VERSION, decode_parcel, encode_parcel, read_parcel, write_parcel};
