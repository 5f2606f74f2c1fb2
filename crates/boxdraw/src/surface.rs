// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use boxdraw_state::Parcel;

pub const DEFAULT_WIDTH: u32 = 480;
pub const DEFAULT_HEIGHT: u32 = 800;

/// State owned by whatever encloses the box view. The view never looks
/// inside it; it only hands it over on save and gives it back on restore.
pub trait ParentState {
    fn save_state(&self) -> Parcel;
    fn restore_state(&mut self, state: Parcel);
}

/// The host surface the view is attached to. Its size rides along in the
/// passthrough slot so a restored view comes back at the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ParentState for Surface {
    fn save_state(&self) -> Parcel {
        match postcard::to_allocvec(self) {
            Ok(bytes) => Parcel::Raw(bytes),
            Err(e) => {
                eventline::warn!("failed to encode surface state: {e}");
                Parcel::Empty
            }
        }
    }

    fn restore_state(&mut self, state: Parcel) {
        match state {
            Parcel::Raw(bytes) => match postcard::from_bytes::<Surface>(&bytes) {
                Ok(s) => *self = s,
                Err(e) => {
                    eventline::warn!("ignoring unreadable surface state: {e}");
                }
            },
            Parcel::Empty => {}
            Parcel::Bundle(_) => {
                eventline::debug!("surface state is a bundle, expected raw bytes; ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_round_trips_through_parcel() {
        let parcel = Surface::new(320, 240).save_state();
        assert!(matches!(parcel, Parcel::Raw(_)));

        let mut restored = Surface::default();
        restored.restore_state(parcel);
        assert_eq!(restored, Surface::new(320, 240));
    }

    #[test]
    fn unreadable_state_keeps_current_size() {
        let mut s = Surface::new(10, 20);
        s.restore_state(Parcel::Raw(vec![]));
        s.restore_state(Parcel::Empty);
        assert_eq!(s, Surface::new(10, 20));
    }

    #[test]
    fn bundle_state_is_ignored() {
        let mut s = Surface::new(10, 20);
        s.restore_state(Parcel::Bundle(boxdraw_state::Bundle::new()));
        assert_eq!(s, Surface::new(10, 20));
    }
}
