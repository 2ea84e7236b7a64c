use crate::core::data::complex::Complex;
use crate::core::data::screen::{ScreenPoint, ScreenVector};
use crate::core::gestures::events::{GestureEvent, GestureOutcome, WheelDirection};
use crate::core::gestures::snapshot::{PanSnapshot, PinchSnapshot};
use crate::core::scheduling::RedrawFlag;
use crate::core::view::{CoordinateMapper, ViewState, ViewUpdate, ViewportGeometry};
use tracing::debug;

pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Turns pan, pinch and wheel input into view updates.
///
/// Pan and pinch each keep their own gesture-start snapshot and may
/// interleave. Every update that changes the view requests exactly one
/// redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureController {
    zoom_step: f64,
    pan: Option<PanSnapshot>,
    pinch: Option<PinchSnapshot>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP)
    }
}

impl GestureController {
    /// `zoom_step` is the multiplicative scale change per wheel notch; values
    /// that are not finite and greater than one fall back to the default.
    #[must_use]
    pub fn new(zoom_step: f64) -> Self {
        let zoom_step = if zoom_step.is_finite() && zoom_step > 1.0 {
            zoom_step
        } else {
            DEFAULT_ZOOM_STEP
        };

        Self {
            zoom_step,
            pan: None,
            pinch: None,
        }
    }

    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn handle(
        &mut self,
        event: GestureEvent,
        view: &mut ViewState,
        viewport: &ViewportGeometry,
        redraw: &RedrawFlag,
    ) -> GestureOutcome {
        match event {
            GestureEvent::PanStart => {
                self.pan_start(view);
                GestureOutcome::Ignored
            }
            GestureEvent::PanMove { delta } => self.pan_move(delta, view, viewport, redraw),
            GestureEvent::PanEnd => {
                self.pan_end();
                GestureOutcome::Ignored
            }
            GestureEvent::PinchStart { center } => {
                self.pinch_start(center, view, viewport);
                GestureOutcome::Ignored
            }
            GestureEvent::PinchMove { delta, scale } => {
                self.pinch_move(delta, scale, view, viewport, redraw)
            }
            GestureEvent::PinchEnd => {
                self.pinch_end();
                GestureOutcome::Ignored
            }
            GestureEvent::Wheel { offset, direction } => {
                self.wheel(offset, direction, view, viewport, redraw)
            }
        }
    }

    pub fn pan_start(&mut self, view: &ViewState) {
        self.pan = Some(PanSnapshot {
            start_center: view.center(),
        });
    }

    /// `delta` is the cumulative drag since pan start, so repeated moves
    /// never accumulate rounding drift.
    pub fn pan_move(
        &mut self,
        delta: ScreenVector,
        view: &mut ViewState,
        viewport: &ViewportGeometry,
        redraw: &RedrawFlag,
    ) -> GestureOutcome {
        let Some(snapshot) = self.pan else {
            debug!("pan move without pan start ignored");
            return GestureOutcome::Ignored;
        };

        let mapper = match CoordinateMapper::new(view, viewport) {
            Ok(mapper) => mapper,
            Err(err) => {
                debug!(%err, "pan move ignored");
                return GestureOutcome::Ignored;
            }
        };

        let center = snapshot.start_center - mapper.vector_to_plane(delta);
        commit(view, center, view.scale(), redraw)
    }

    pub fn pan_end(&mut self) {
        self.pan = None;
    }

    /// Snapshots the plane point under `focal`. On a degenerate viewport no
    /// snapshot is taken and the following moves are ignored.
    pub fn pinch_start(
        &mut self,
        focal: ScreenPoint,
        view: &ViewState,
        viewport: &ViewportGeometry,
    ) {
        self.pinch = match CoordinateMapper::new(view, viewport) {
            Ok(mapper) => Some(PinchSnapshot {
                start_center: view.center(),
                start_scale: view.scale(),
                start_point: mapper.point_to_plane(focal),
            }),
            Err(err) => {
                debug!(%err, "pinch start ignored");
                None
            }
        };
    }

    /// Keeps the snapshotted plane point under the (possibly moved) focal
    /// point while scaling by the cumulative ratio `ratio`.
    ///
    /// `delta` is converted to plane units at the new scale, not at the scale
    /// in effect before the move, so a dragged pinch stays exactly anchored.
    pub fn pinch_move(
        &mut self,
        delta: ScreenVector,
        ratio: f64,
        view: &mut ViewState,
        viewport: &ViewportGeometry,
        redraw: &RedrawFlag,
    ) -> GestureOutcome {
        let Some(snapshot) = self.pinch else {
            debug!("pinch move without pinch start ignored");
            return GestureOutcome::Ignored;
        };

        if !(ratio.is_finite() && ratio > 0.0) {
            debug!(ratio, "pinch move with invalid ratio ignored");
            return GestureOutcome::Ignored;
        }

        let limits = view.limits();
        let scale = (snapshot.start_scale * ratio).clamp(limits.min, limits.max);
        let effective_ratio = scale / snapshot.start_scale;
        let anchored = snapshot.start_point
            + (snapshot.start_center - snapshot.start_point) / effective_ratio;

        let mut target = *view;
        if target.apply(anchored, scale) == ViewUpdate::Rejected {
            debug!("pinch move produced a non-finite view");
            return GestureOutcome::Ignored;
        }

        let mapper = match CoordinateMapper::new(&target, viewport) {
            Ok(mapper) => mapper,
            Err(err) => {
                debug!(%err, "pinch move ignored");
                return GestureOutcome::Ignored;
            }
        };

        let center = anchored - mapper.vector_to_plane(delta);
        commit(view, center, scale, redraw)
    }

    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    /// One discrete zoom step about the plane point under `offset`.
    pub fn wheel(
        &mut self,
        offset: ScreenPoint,
        direction: WheelDirection,
        view: &mut ViewState,
        viewport: &ViewportGeometry,
        redraw: &RedrawFlag,
    ) -> GestureOutcome {
        let mapper = match CoordinateMapper::new(view, viewport) {
            Ok(mapper) => mapper,
            Err(err) => {
                debug!(%err, "wheel zoom ignored");
                return GestureOutcome::Ignored;
            }
        };

        let requested_step = match direction {
            WheelDirection::ZoomIn => self.zoom_step,
            WheelDirection::ZoomOut => self.zoom_step.recip(),
        };

        let limits = view.limits();
        let scale = (view.scale() * requested_step).clamp(limits.min, limits.max);
        let step = scale / view.scale();

        let point = mapper.point_to_plane(offset);
        let center = point + (view.center() - point) / step;
        commit(view, center, scale, redraw)
    }
}

fn commit(view: &mut ViewState, center: Complex, scale: f64, redraw: &RedrawFlag) -> GestureOutcome {
    let before = *view;

    match view.apply(center, scale) {
        ViewUpdate::Rejected => {
            debug!("gesture produced a non-finite view");
            return GestureOutcome::Ignored;
        }
        ViewUpdate::Clamped => debug!(scale = view.scale(), "scale clamped to limits"),
        ViewUpdate::Applied => {}
    }

    if *view == before {
        return GestureOutcome::Ignored;
    }

    redraw.request();
    GestureOutcome::Updated
}
