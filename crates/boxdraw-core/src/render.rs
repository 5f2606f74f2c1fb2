// Author: Dustin Pilgrim
// License: MIT

use crate::boxes::BoxStore;
use crate::rect::RectF;

// Colours are ARGB 0xAARRGGBB.
pub const BACKGROUND_ARGB: u32 = 0xFFF8_EFE0; // off-white
pub const BOX_FILL_ARGB: u32 = 0x22FF_0000; // translucent red

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paints {
    pub background: u32,
    pub box_fill: u32,
}

impl Default for Paints {
    fn default() -> Self {
        Self {
            background: BACKGROUND_ARGB,
            box_fill: BOX_FILL_ARGB,
        }
    }
}

/// Drawing surface handed to the renderer by the host.
pub trait Canvas {
    /// Fill the whole surface.
    fn draw_paint(&mut self, argb: u32);

    fn draw_rect(&mut self, rect: RectF, argb: u32);
}

/// Background first, then every box in store order so later boxes land on top.
pub fn render<C: Canvas + ?Sized>(store: &BoxStore, canvas: &mut C, paints: Paints) {
    canvas.draw_paint(paints.background);

    for b in store {
        canvas.draw_rect(b.rect(), paints.box_fill);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Paint { argb: u32 },
    Rect { rect: RectF, argb: u32 },
}

/// Canvas that keeps the command stream instead of pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = RectF> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(*rect),
            DrawCommand::Paint { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_paint(&mut self, argb: u32) {
        self.commands.push(DrawCommand::Paint { argb });
    }

    fn draw_rect(&mut self, rect: RectF, argb: u32) {
        self.commands.push(DrawCommand::Rect { rect, argb });
    }
}
