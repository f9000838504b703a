//! Transient interaction state.
//!
//! Everything here lives for one gesture at most and is reset when the
//! gesture ends. Dropping it at any time leaks nothing: the only pending
//! resources are the frame slot and the wheel deadline, both plain values.

use crate::geometry::{distance, midpoint, rotation_between};
use crate::schedule::{Debounce, FrameSlot};
use crate::Point;

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag start, in screen coordinates.
    pub start_position: Point,
    /// Host crop position at drag start.
    pub start_crop: Point,
}

impl DragSession {
    /// Position requested by moving the pointer to `point`.
    pub fn requested_position(&self, point: Point) -> Point {
        Point {
            x: self.start_crop.x + (point.x - self.start_position.x),
            y: self.start_crop.y + (point.y - self.start_position.y),
        }
    }
}

/// Finger geometry as of the last processed pinch frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSession {
    pub last_distance: f64,
    pub last_rotation: f64,
}

impl PinchSession {
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            last_distance: distance(a, b),
            last_rotation: rotation_between(a, b),
        }
    }
}

/// The single active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Pinching {
        drag: DragSession,
        pinch: PinchSession,
    },
}

/// Pointer input waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingMove {
    Drag(Point),
    Pinch(Point, Point),
}

/// Per-gesture state owned by the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub gesture: Gesture,
    pub frame: FrameSlot<PendingMove>,
    pub wheel: Debounce,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.gesture, Gesture::Pinching { .. })
    }

    /// Start a drag at `point`. Returns true if no gesture was active before.
    pub fn begin_drag(&mut self, point: Point, crop: Point) -> bool {
        let was_idle = self.is_idle();
        self.gesture = Gesture::Dragging(DragSession {
            start_position: point,
            start_crop: crop,
        });
        was_idle
    }

    /// Start a pinch between `a` and `b`, dragging from their midpoint.
    ///
    /// A drag already in progress is upgraded. Returns true if no gesture was
    /// active before.
    pub fn begin_pinch(&mut self, a: Point, b: Point, crop: Point) -> bool {
        let was_idle = self.is_idle();
        self.gesture = Gesture::Pinching {
            drag: DragSession {
                start_position: midpoint(a, b),
                start_crop: crop,
            },
            pinch: PinchSession::from_points(a, b),
        };
        was_idle
    }

    /// Drag origin of the active gesture, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(drag) | Gesture::Pinching { drag, .. } => Some(drag),
        }
    }

    pub fn pinch_mut(&mut self) -> Option<&mut PinchSession> {
        match &mut self.gesture {
            Gesture::Pinching { pinch, .. } => Some(pinch),
            _ => None,
        }
    }

    /// End the pointer gesture and drop any pending frame.
    ///
    /// Returns true if a gesture was active.
    pub fn end_gesture(&mut self) -> bool {
        self.frame.cancel();
        !matches!(std::mem::take(&mut self.gesture), Gesture::Idle)
    }

    /// Reset everything, including the wheel session.
    pub fn reset(&mut self) {
        self.end_gesture();
        self.wheel.cancel();
    }
}
