// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod boxes;
pub mod error;
pub mod point;
pub mod rect;
pub mod render;

pub use action::{MotionAction, MotionEvent};
pub use boxes::{BoxStore, DragBox};
pub use error::CoreError;
pub use point::Point;
pub use rect::RectF;
pub use render::{
    BACKGROUND_ARGB, BOX_FILL_ARGB, Canvas, DrawCommand, Paints, RecordingCanvas, render,
};
