//! Viewport state machine
//!
//! Owns the pixel-to-plane transform for the session: scale (pixels per
//! plane unit), the plane coordinate of the pixel origin, and the
//! iteration cap. Pan and zoom mutate it in place between frames; the
//! renderer only reads it.

use std::time::{Duration, Instant};

use super::{Complex, FractalKind};

/// Scale multiplier per zoom step.
const ZOOM_FACTOR: f64 = 1.3;
/// Iteration-cap adjustment per zoom step.
const ITER_STEP: u32 = 3;
/// Cap floor enforced when zooming out; below this the frame degenerates
/// to mostly-interior renders.
const MIN_ITERATIONS: u32 = 50;
/// Precision ceiling for f64 zoom: past this, neighbouring pixels collapse
/// onto the same plane coordinate and further zoom only shows artifacts.
pub const SCALE_LIMIT: f64 = 5.0e7;
/// Zoom-out floor; the view would degenerate toward a point below 1 pixel
/// per plane unit.
const SCALE_MIN: f64 = 1.0;

const DEFAULT_SCALE: f64 = 300.0;
const DEFAULT_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The continuous view state: one of these lives for the whole session and
/// every interaction mutates it, then triggers a full re-render.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub iteration_cap: u32,
    pub kind: FractalKind,
    /// Julia-family constant override; `None` selects the kind's built-in
    /// default. Only ever `Some` when the user supplied both components.
    pub param: Option<Complex>,
}

impl Viewport {
    /// Session defaults for a kind. Mandelbrot starts further left so the
    /// whole set fits the frame at the initial scale.
    pub fn new(kind: FractalKind) -> Self {
        let offset_x = if kind == FractalKind::Mandelbrot {
            -2.5
        } else {
            -2.0
        };
        Self {
            scale: DEFAULT_SCALE,
            offset_x,
            offset_y: -1.30,
            iteration_cap: DEFAULT_ITERATIONS,
            kind,
            param: None,
        }
    }

    /// Plane coordinate of a pixel under the current view.
    #[inline]
    pub fn to_complex(&self, px: f64, py: f64) -> Complex {
        Complex::new(
            px / self.scale + self.offset_x,
            py / self.scale + self.offset_y,
        )
    }

    /// Translate the view by a device-space step. Dividing by the current
    /// scale keeps pan speed visually constant at any zoom level.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.scale;
        self.offset_y += dy / self.scale;
    }

    /// Anchor-preserving zoom: the plane point under (px, py) maps to the
    /// same pixel after the scale change.
    ///
    /// At the scale ceiling (zoom in) or floor (zoom out) the call is a
    /// complete no-op, iteration cap included: f64 cannot represent a
    /// finer or coarser view, and that is not an error. Zooming in raises
    /// the cap for extra detail; zooming out lowers it again, clamped to
    /// `MIN_ITERATIONS`.
    pub fn zoom_at(&mut self, px: f64, py: f64, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => {
                if self.scale >= SCALE_LIMIT {
                    return;
                }
                let anchor = self.to_complex(px, py);
                self.scale *= ZOOM_FACTOR;
                self.offset_x = anchor.re - px / self.scale;
                self.offset_y = anchor.im - py / self.scale;
                self.iteration_cap += ITER_STEP;
            }
            ZoomDirection::Out => {
                if self.scale <= SCALE_MIN {
                    return;
                }
                let anchor = self.to_complex(px, py);
                self.scale /= ZOOM_FACTOR;
                self.offset_x = anchor.re - px / self.scale;
                self.offset_y = anchor.im - py / self.scale;
                if self.iteration_cap > MIN_ITERATIONS {
                    self.iteration_cap =
                        (self.iteration_cap - ITER_STEP).max(MIN_ITERATIONS);
                }
            }
        }
    }
}

// ============================================================================
// Zoom throttle
// ============================================================================

/// Wall-clock rate limit for wheel zoom.
///
/// Scroll devices deliver bursts of events; unthrottled, a single flick
/// jumps several zoom steps and the view teleports. Each step is visually
/// larger at high magnification, so the interval widens once the scale
/// passes 10 000.
#[derive(Debug, Default)]
pub struct ZoomThrottle {
    last_zoom: Option<Instant>,
}

impl ZoomThrottle {
    pub fn new() -> Self {
        Self { last_zoom: None }
    }

    /// Minimum spacing between zoom steps at this scale.
    fn interval(scale: f64) -> Duration {
        if scale > 10_000.0 {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        }
    }

    /// True if enough time has passed since the last accepted step; the
    /// accepted step is recorded.
    pub fn try_zoom(&mut self, scale: f64) -> bool {
        self.try_zoom_at(Instant::now(), scale)
    }

    fn try_zoom_at(&mut self, now: Instant, scale: f64) -> bool {
        if let Some(last) = self.last_zoom {
            if now.duration_since(last) < Self::interval(scale) {
                return false;
            }
        }
        self.last_zoom = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_maps_origin_to_offset() {
        let view = Viewport::new(FractalKind::Mandelbrot);
        let p = view.to_complex(0.0, 0.0);
        assert_eq!(p.re, -2.5);
        assert_eq!(p.im, -1.30);
        assert_eq!(view.iteration_cap, 50);
        assert_eq!(view.scale, 300.0);
    }

    #[test]
    fn test_julia_family_default_offset() {
        let view = Viewport::new(FractalKind::Julia);
        assert_eq!(view.offset_x, -2.0);
        assert_eq!(view.offset_y, -1.30);
    }

    #[test]
    fn test_pan_is_scale_relative() {
        let mut view = Viewport::new(FractalKind::Julia);
        view.pan(10.0, -10.0);
        assert_eq!(view.offset_x, -2.0 + 10.0 / 300.0);
        assert_eq!(view.offset_y, -1.30 - 10.0 / 300.0);

        // Panning at a deeper zoom moves a proportionally smaller distance
        view.scale = 3000.0;
        let before = view.offset_x;
        view.pan(10.0, 0.0);
        assert_eq!(view.offset_x, before + 10.0 / 3000.0);
    }

    #[test]
    fn test_zoom_in_preserves_anchor() {
        let mut view = Viewport::new(FractalKind::Mandelbrot);
        let (px, py) = (421.0, 277.0);
        let anchor = view.to_complex(px, py);
        view.zoom_at(px, py, ZoomDirection::In);
        let after = view.to_complex(px, py);
        assert!((after.re - anchor.re).abs() < 1e-12);
        assert!((after.im - anchor.im).abs() < 1e-12);
        assert_eq!(view.scale, 300.0 * 1.3);
        assert_eq!(view.iteration_cap, 53);
    }

    #[test]
    fn test_zoom_round_trip_restores_view() {
        let mut view = Viewport::new(FractalKind::Mandelbrot);
        let (px, py) = (600.0, 400.0);
        let anchor = view.to_complex(px, py);
        let scale = view.scale;

        view.zoom_at(px, py, ZoomDirection::In);
        view.zoom_at(px, py, ZoomDirection::Out);

        assert!((view.scale - scale).abs() < 1e-9);
        let after = view.to_complex(px, py);
        assert!((after.re - anchor.re).abs() < 1e-12);
        assert!((after.im - anchor.im).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_in_noop_at_scale_limit() {
        let mut view = Viewport::new(FractalKind::Julia);
        view.scale = SCALE_LIMIT;
        let before = view.clone();
        view.zoom_at(100.0, 100.0, ZoomDirection::In);
        assert_eq!(view.scale, before.scale);
        assert_eq!(view.offset_x, before.offset_x);
        assert_eq!(view.offset_y, before.offset_y);
        assert_eq!(view.iteration_cap, before.iteration_cap);
    }

    #[test]
    fn test_zoom_out_noop_at_scale_floor() {
        let mut view = Viewport::new(FractalKind::Julia);
        view.scale = 1.0;
        let before = view.clone();
        view.zoom_at(100.0, 100.0, ZoomDirection::Out);
        assert_eq!(view.scale, before.scale);
        assert_eq!(view.offset_x, before.offset_x);
        assert_eq!(view.iteration_cap, before.iteration_cap);
    }

    #[test]
    fn test_zoom_out_clamps_iteration_floor() {
        let mut view = Viewport::new(FractalKind::Mandelbrot);
        view.iteration_cap = 52;
        // 52 - 3 would land at 49; the floor clamps it to 50
        view.zoom_at(0.0, 0.0, ZoomDirection::Out);
        assert_eq!(view.iteration_cap, 50);
        // Already at the floor: repeated zoom-out never goes lower
        for _ in 0..10 {
            view.zoom_at(0.0, 0.0, ZoomDirection::Out);
        }
        assert_eq!(view.iteration_cap, 50);
    }

    #[test]
    fn test_zoom_out_keeps_low_startup_cap_untouched() {
        // A user-chosen cap below the policy floor is left alone
        let mut view = Viewport::new(FractalKind::Julia);
        view.iteration_cap = 20;
        view.zoom_at(0.0, 0.0, ZoomDirection::Out);
        assert_eq!(view.iteration_cap, 20);
    }

    #[test]
    fn test_throttle_spacing() {
        let mut throttle = ZoomThrottle::new();
        let t0 = Instant::now();
        assert!(throttle.try_zoom_at(t0, 300.0));
        assert!(!throttle.try_zoom_at(t0 + Duration::from_millis(30), 300.0));
        assert!(throttle.try_zoom_at(t0 + Duration::from_millis(60), 300.0));
    }

    #[test]
    fn test_throttle_widens_at_high_magnification() {
        let mut throttle = ZoomThrottle::new();
        let t0 = Instant::now();
        assert!(throttle.try_zoom_at(t0, 20_000.0));
        // 60 ms would pass at normal scale but not above 10 000
        assert!(!throttle.try_zoom_at(t0 + Duration::from_millis(60), 20_000.0));
        assert!(throttle.try_zoom_at(t0 + Duration::from_millis(110), 20_000.0));
    }
}
