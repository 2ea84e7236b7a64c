use crate::core::data::screen::{ScreenPoint, ScreenVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    ZoomIn,
    ZoomOut,
}

impl WheelDirection {
    /// Browser convention: a positive `deltaY` scrolls down, which zooms out.
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Self::ZoomOut
        } else {
            Self::ZoomIn
        }
    }
}

/// Raw input delivered by whatever gesture recogniser the platform provides.
///
/// Move deltas are cumulative screen-space displacements since the matching
/// start event; `scale` is the cumulative pinch ratio since pinch start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PanStart,
    PanMove { delta: ScreenVector },
    PanEnd,
    PinchStart { center: ScreenPoint },
    PinchMove { delta: ScreenVector, scale: f64 },
    PinchEnd,
    Wheel { offset: ScreenPoint, direction: WheelDirection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The view changed and a redraw was requested.
    Updated,
    /// Snapshot bookkeeping only, or the event could not be applied.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_delta_zooms_out() {
        assert_eq!(WheelDirection::from_delta_y(120.0), WheelDirection::ZoomOut);
        assert_eq!(WheelDirection::from_delta_y(-3.0), WheelDirection::ZoomIn);
        assert_eq!(WheelDirection::from_delta_y(0.0), WheelDirection::ZoomIn);
    }
}
