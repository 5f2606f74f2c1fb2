// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

impl MotionAction {
    /// Name used in the per-event log line.
    pub fn label(self) -> &'static str {
        match self {
            MotionAction::Down => "ACTION_DOWN",
            MotionAction::Move => "ACTION_MOVE",
            MotionAction::Up => "ACTION_UP",
            MotionAction::Cancel => "ACTION_CANCEL",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            MotionAction::Down => "down",
            MotionAction::Move => "move",
            MotionAction::Up => "up",
            MotionAction::Cancel => "cancel",
        }
    }

    /// Up and cancel carry a position too, but it is never used.
    fn needs_position(self) -> bool {
        matches!(self, MotionAction::Down | MotionAction::Move)
    }
}

impl fmt::Display for MotionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for MotionAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "down" => Ok(MotionAction::Down),
            "move" => Ok(MotionAction::Move),
            "up" => Ok(MotionAction::Up),
            "cancel" => Ok(MotionAction::Cancel),
            other => Err(CoreError::UnknownAction(other.to_string())),
        }
    }
}

/// A single pointer event as delivered by the host's input system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub x: f32,
    pub y: f32,
}

impl MotionEvent {
    pub const fn new(action: MotionAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(MotionAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(MotionAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(MotionAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(MotionAction::Cancel, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Parses `<action> [x y]`, e.g. `down 10 10` or `up`.
impl FromStr for MotionEvent {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let action: MotionAction = parts
            .next()
            .ok_or_else(|| CoreError::UnknownAction(String::new()))?
            .parse()?;

        let coords: Vec<&str> = parts.collect();
        let (x, y) = match coords.as_slice() {
            [] if !action.needs_position() => (0.0, 0.0),
            [] | [_] => return Err(CoreError::MissingCoordinates(action.keyword())),
            [x, y] => (parse_coord(x)?, parse_coord(y)?),
            [_, _, rest @ ..] => return Err(CoreError::TrailingInput(rest.join(" "))),
        };

        Ok(MotionEvent { action, x, y })
    }
}

fn parse_coord(s: &str) -> Result<f32, CoreError> {
    s.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::InvalidCoordinate(s.to_string()))
}
