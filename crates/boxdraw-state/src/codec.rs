// Author: Dustin Pilgrim
// License: MIT

//! Box list <-> bundle entries.
//!
//! Each box is stored as `[origin.x, origin.y, current.x, current.y]` under
//! `box1`, `box2`, ... in store order. Readers that only know the keyed layout
//! scan upwards from `box1` and stop at the first missing key, so a gap
//! silently truncates the list. Writers here also store `box_count`; when it
//! is present the exact number of boxes is read and a gap is an error.

use boxdraw_core::{DragBox, Point};

use crate::bundle::{Bundle, Value};
use crate::error::{Result, StateError};

pub const PARENT_STATE_KEY: &str = "parent_state_key";
pub const BOX_KEY_PREFIX: &str = "box";
pub const BOX_COUNT_KEY: &str = "box_count";

pub fn box_key(index: usize) -> String {
    format!("{BOX_KEY_PREFIX}{index}")
}

pub fn save_boxes<'a, I>(boxes: I, bundle: &mut Bundle)
where
    I: IntoIterator<Item = &'a DragBox>,
{
    let mut count = 0usize;

    for (i, b) in boxes.into_iter().enumerate() {
        let o = b.origin();
        let c = b.current;
        bundle.put_float_array(box_key(i + 1), vec![o.x, o.y, c.x, c.y]);
        count = i + 1;
    }

    bundle.put_int(BOX_COUNT_KEY, i32::try_from(count).unwrap_or(i32::MAX));
}

/// Decodes the boxes stored in `bundle`, in their saved order.
pub fn restore_boxes(bundle: &Bundle) -> Result<Vec<DragBox>> {
    match bundle.get(BOX_COUNT_KEY) {
        Some(Value::Int(n)) => {
            let count = u32::try_from(*n).map_err(|_| StateError::WrongValueType {
                key: BOX_COUNT_KEY.to_string(),
                expected: "non-negative int",
            })?;
            restore_counted(bundle, count)
        }
        Some(_) => Err(StateError::WrongValueType {
            key: BOX_COUNT_KEY.to_string(),
            expected: "int",
        }),
        None => restore_scanned(bundle),
    }
}

fn restore_counted(bundle: &Bundle, count: u32) -> Result<Vec<DragBox>> {
    let mut boxes = Vec::new();

    for i in 1..=count as usize {
        let key = box_key(i);
        let value = bundle.get(&key).ok_or_else(|| StateError::MissingBox {
            key: key.clone(),
            count,
        })?;
        boxes.push(decode_box(&key, value)?);
    }

    Ok(boxes)
}

fn restore_scanned(bundle: &Bundle) -> Result<Vec<DragBox>> {
    let mut boxes = Vec::new();
    let mut i = 1;

    loop {
        let key = box_key(i);
        let Some(value) = bundle.get(&key) else {
            break;
        };
        boxes.push(decode_box(&key, value)?);
        i += 1;
    }

    Ok(boxes)
}

fn decode_box(key: &str, value: &Value) -> Result<DragBox> {
    let Value::FloatArray(points) = value else {
        return Err(StateError::WrongValueType {
            key: key.to_string(),
            expected: "float array",
        });
    };

    match points.as_slice() {
        &[ox, oy, cx, cy] => Ok(DragBox::with_current(Point::new(ox, oy), Point::new(cx, cy))),
        other => Err(StateError::MalformedBox {
            key: key.to_string(),
            len: other.len(),
        }),
    }
}
