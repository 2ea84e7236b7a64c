//! Translation of raw pointer, wheel and touchpad input into gestures.
//!
//! Kept free of windowing types so the same state machine serves any event
//! source.

use crate::core::data::screen::{ScreenPoint, ScreenVector};
use crate::core::gestures::{GestureEvent, WheelDirection};

/// Smallest zoom factor a single magnify event may apply.
const MIN_MAGNIFY_FACTOR: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnifyPhase {
    Started,
    Moved,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInputState {
    cursor: ScreenPoint,
    drag_origin: Option<ScreenPoint>,
    pinch_ratio: Option<f64>,
}

impl PointerInputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> ScreenPoint {
        self.cursor
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Primary button down: begins a pan anchored at the cursor.
    pub fn press(&mut self) -> GestureEvent {
        self.drag_origin = Some(self.cursor);
        GestureEvent::PanStart
    }

    pub fn release(&mut self) -> Option<GestureEvent> {
        self.drag_origin.take().map(|_| GestureEvent::PanEnd)
    }

    /// Cursor moved; yields the cumulative drag since `press` while dragging.
    pub fn move_to(&mut self, point: ScreenPoint) -> Option<GestureEvent> {
        self.cursor = point;
        let origin = self.drag_origin?;

        Some(GestureEvent::PanMove {
            delta: ScreenVector::new(point.x - origin.x, point.y - origin.y),
        })
    }

    /// `lines_up` counts scroll lines away from the user, positive meaning
    /// zoom in.
    pub fn wheel(&mut self, lines_up: f64) -> Option<GestureEvent> {
        if lines_up == 0.0 || !lines_up.is_finite() {
            return None;
        }

        Some(GestureEvent::Wheel {
            offset: self.cursor,
            direction: WheelDirection::from_delta_y(-lines_up),
        })
    }

    /// Touchpad magnification. `delta` is the incremental zoom since the last
    /// event; the emitted scale is the product of all increments since the
    /// pinch started. Each increment shrinks the ratio by at most
    /// [`MIN_MAGNIFY_FACTOR`], so the ratio stays positive.
    pub fn magnify(&mut self, phase: MagnifyPhase, delta: f64) -> Option<GestureEvent> {
        match phase {
            MagnifyPhase::Started => {
                self.pinch_ratio = Some(1.0);
                Some(GestureEvent::PinchStart {
                    center: self.cursor,
                })
            }
            MagnifyPhase::Moved => {
                let ratio = self.pinch_ratio.as_mut()?;
                *ratio *= (1.0 + delta).max(MIN_MAGNIFY_FACTOR);

                Some(GestureEvent::PinchMove {
                    delta: ScreenVector::ZERO,
                    scale: *ratio,
                })
            }
            MagnifyPhase::Ended => self.pinch_ratio.take().map(|_| GestureEvent::PinchEnd),
        }
    }
}
