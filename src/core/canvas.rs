use crate::core::config::CanvasOptions;
use crate::core::geom::Point;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Manages the current view of the canvas: offset, zoom, and screen dimensions.
///
/// The canvas is infinite: content lives in world coordinates and the offset
/// is never clamped. A world point `w` appears on screen at
/// `view_center + (offset + w) * zoom`, so the view offset itself is stored
/// in world units and panning gets softer as you zoom in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// View offset in world units (unbounded)
    offset: Point,
    /// The current zoom factor
    zoom: f64,
    /// The minimum allowed zoom factor
    min_zoom: f64,
    /// The maximum allowed zoom factor
    max_zoom: f64,
    /// The size of the view in screen points
    size: Point,
    /// Set by every mutation, consumed by the host to schedule a redraw
    #[serde(skip)]
    dirty: bool,
}

impl Canvas {
    /// Creates a canvas with default zoom limits, offset zero and zoom 1
    pub fn new(size: Point) -> Self {
        let options = CanvasOptions::default();
        Self {
            offset: Point::default(),
            zoom: 1.0_f64.clamp(options.min_zoom, options.max_zoom),
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            size,
            dirty: true,
        }
    }

    /// Creates a canvas with validated zoom limits
    pub fn with_options(options: CanvasOptions, size: Point) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            offset: Point::default(),
            zoom: 1.0_f64.clamp(options.min_zoom, options.max_zoom),
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            size,
            dirty: true,
        })
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Center of the view in screen points
    pub fn view_center(&self) -> Point {
        Point::new(self.size.x / 2.0, self.size.y / 2.0)
    }

    /// Sets the view size. No-op when unchanged so per-frame layout
    /// passes do not keep the canvas perpetually dirty.
    pub fn set_size(&mut self, size: Point) {
        if size != self.size {
            self.size = size;
            self.mark_dirty();
        }
    }

    /// Sets the view offset directly (world units, unbounded)
    pub fn set_offset(&mut self, offset: Point) {
        if !offset.is_finite() {
            log::warn!("ignoring non-finite offset {:?}", offset);
            return;
        }
        self.offset = offset;
        self.mark_dirty();
    }

    /// Sets the zoom factor, clamping to the configured range
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            log::warn!("ignoring non-finite zoom {}", zoom);
            return;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if clamped != self.zoom {
            self.zoom = clamped;
            self.mark_dirty();
        }
    }

    /// Sets the zoom limits and re-clamps the current zoom into them.
    /// Limits that fail validation are ignored.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let options = CanvasOptions::new(min_zoom, max_zoom);
        if let Err(e) = options.validate() {
            log::warn!("ignoring zoom limits {}..{}: {}", min_zoom, max_zoom, e);
            return;
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        let clamped = self.zoom.clamp(min_zoom, max_zoom);
        if clamped != self.zoom {
            self.zoom = clamped;
            self.mark_dirty();
        }
    }

    /// Pans by a screen-space delta. The delta is divided by the current
    /// zoom so a finger travelling N points drags the content N points
    /// regardless of zoom level.
    pub fn pan_by(&mut self, screen_delta: Point) {
        if !screen_delta.is_finite() {
            log::warn!("ignoring non-finite pan delta {:?}", screen_delta);
            return;
        }
        if screen_delta.x == 0.0 && screen_delta.y == 0.0 {
            return;
        }
        self.offset = self.offset.add(&screen_delta.divide(self.zoom));
        self.mark_dirty();
    }

    /// Translates the offset by a world-space delta (used by inertia,
    /// which integrates in world units)
    pub fn translate(&mut self, world_delta: Point) {
        if !world_delta.is_finite() {
            log::warn!("ignoring non-finite translation {:?}", world_delta);
            return;
        }
        if world_delta.x == 0.0 && world_delta.y == 0.0 {
            return;
        }
        self.offset = self.offset.add(&world_delta);
        self.mark_dirty();
    }

    /// Applies a multiplicative zoom factor, clamping the result to the
    /// zoom limits, and rescales the offset by the ratio that was actually
    /// applied so the content anchor stays put on screen. Returns that
    /// applied ratio (1.0 when the zoom was already pinned at a limit).
    pub fn zoom_by(&mut self, factor: f64) -> f64 {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("ignoring invalid zoom factor {}", factor);
            return 1.0;
        }

        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == self.zoom {
            return 1.0;
        }

        let applied = new_zoom / self.zoom;
        self.offset = self.offset.divide(applied);
        self.zoom = new_zoom;
        self.mark_dirty();
        applied
    }

    /// Converts a world point to screen coordinates
    pub fn world_to_screen(&self, world: &Point) -> Point {
        self.view_center()
            .add(&self.offset.add(world).multiply(self.zoom))
    }

    /// Converts a screen point back to world coordinates
    pub fn screen_to_world(&self, screen: &Point) -> Point {
        screen
            .subtract(&self.view_center())
            .divide(self.zoom)
            .subtract(&self.offset)
    }

    /// Restores the home view: offset zero, zoom 1 (clamped into limits)
    pub fn reset(&mut self) {
        self.offset = Point::default();
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.mark_dirty();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_creation() {
        let canvas = Canvas::new(Point::new(800.0, 600.0));

        assert_eq!(canvas.offset(), Point::new(0.0, 0.0));
        assert_eq!(canvas.zoom(), 1.0);
        assert_eq!(canvas.view_center(), Point::new(400.0, 300.0));
        assert!(canvas.is_dirty());
    }

    #[test]
    fn test_with_options_validates() {
        let bad = CanvasOptions::new(5.0, 2.0);
        assert!(Canvas::with_options(bad, Point::new(800.0, 600.0)).is_err());

        let good = CanvasOptions::new(0.5, 4.0);
        let canvas = Canvas::with_options(good, Point::new(800.0, 600.0)).unwrap();
        assert_eq!(canvas.min_zoom(), 0.5);
        assert_eq!(canvas.max_zoom(), 4.0);
    }

    #[test]
    fn test_pan_divides_by_zoom() {
        let mut canvas = Canvas::default();
        canvas.take_dirty();

        canvas.pan_by(Point::new(100.0, 50.0));
        assert_eq!(canvas.offset(), Point::new(100.0, 50.0));

        canvas.set_zoom(2.0);
        canvas.pan_by(Point::new(100.0, 50.0));
        assert_eq!(canvas.offset(), Point::new(150.0, 75.0));
    }

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut canvas = Canvas::default();

        canvas.set_zoom(100.0);
        assert_eq!(canvas.zoom(), canvas.max_zoom());

        canvas.set_zoom(0.00001);
        assert_eq!(canvas.zoom(), canvas.min_zoom());

        canvas.set_zoom_limits(0.5, 2.0);
        assert_eq!(canvas.zoom(), 0.5);
    }

    #[test]
    fn test_zoom_by_keeps_content_anchor_stationary() {
        let mut canvas = Canvas::default();
        canvas.pan_by(Point::new(100.0, 0.0));

        let origin_before = canvas.world_to_screen(&Point::default());
        let applied = canvas.zoom_by(2.0);

        assert_eq!(applied, 2.0);
        assert_eq!(canvas.zoom(), 2.0);
        assert_eq!(canvas.offset(), Point::new(50.0, 0.0));

        let origin_after = canvas.world_to_screen(&Point::default());
        assert!(origin_before.distance_to(&origin_after) < 1e-9);
    }

    #[test]
    fn test_zoom_by_at_limit_applies_nothing() {
        let mut canvas = Canvas::default();
        canvas.set_offset(Point::new(37.0, -12.0));
        canvas.set_zoom(canvas.max_zoom());
        canvas.take_dirty();

        let applied = canvas.zoom_by(3.0);
        assert_eq!(applied, 1.0);
        assert_eq!(canvas.zoom(), canvas.max_zoom());
        // A pinch pinned at the limit must not drift the offset
        assert_eq!(canvas.offset(), Point::new(37.0, -12.0));
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_zoom_by_partial_clamp_uses_applied_ratio() {
        let mut canvas = Canvas::default();
        canvas.set_offset(Point::new(80.0, 0.0));
        canvas.set_zoom(8.0);

        // Requested 8 * 2 = 16, clamped to 10: applied ratio is 1.25
        let applied = canvas.zoom_by(2.0);
        assert!((applied - 1.25).abs() < 1e-12);
        assert_eq!(canvas.zoom(), 10.0);
        assert_eq!(canvas.offset(), Point::new(64.0, 0.0));
    }

    #[test]
    fn test_zoom_by_extreme_factors_stay_clamped() {
        let mut canvas = Canvas::default();

        canvas.zoom_by(1000.0);
        assert_eq!(canvas.zoom(), canvas.max_zoom());

        canvas.zoom_by(0.0001);
        assert_eq!(canvas.zoom(), canvas.min_zoom());

        assert!(canvas.offset().is_finite());
    }

    #[test]
    fn test_screen_world_round_trip() {
        let mut canvas = Canvas::default();
        canvas.set_offset(Point::new(12.0, -30.0));
        canvas.set_zoom(2.5);

        let world = Point::new(5.0, 7.0);
        let screen = canvas.world_to_screen(&world);
        let back = canvas.screen_to_world(&screen);

        assert!(back.distance_to(&world) < 1e-9);
    }

    #[test]
    fn test_dirty_lifecycle() {
        let mut canvas = Canvas::default();
        assert!(canvas.take_dirty());
        assert!(!canvas.is_dirty());

        canvas.pan_by(Point::new(1.0, 0.0));
        assert!(canvas.take_dirty());

        // Zero delta is not a mutation
        canvas.pan_by(Point::new(0.0, 0.0));
        assert!(!canvas.is_dirty());

        // Same size is not a mutation
        let size = canvas.size();
        canvas.set_size(size);
        assert!(!canvas.is_dirty());

        canvas.set_size(Point::new(1024.0, 768.0));
        assert!(canvas.take_dirty());
    }

    #[test]
    fn test_invalid_inputs_are_ignored() {
        let mut canvas = Canvas::default();
        canvas.set_offset(Point::new(10.0, 10.0));
        canvas.take_dirty();

        canvas.pan_by(Point::new(f64::NAN, 0.0));
        canvas.translate(Point::new(f64::INFINITY, 0.0));
        let applied = canvas.zoom_by(f64::NAN);

        assert_eq!(applied, 1.0);
        assert_eq!(canvas.offset(), Point::new(10.0, 10.0));
        assert_eq!(canvas.zoom(), 1.0);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_non_finite_zoom_is_ignored() {
        let mut canvas = Canvas::default();
        canvas.set_offset(Point::new(10.0, 10.0));
        canvas.take_dirty();

        canvas.set_zoom(f64::NAN);
        canvas.set_zoom(f64::INFINITY);
        canvas.set_zoom(f64::NEG_INFINITY);

        assert_eq!(canvas.zoom(), 1.0);
        assert!(!canvas.is_dirty());

        // Pan math still sees the unchanged zoom
        canvas.pan_by(Point::new(10.0, 0.0));
        assert_eq!(canvas.offset(), Point::new(20.0, 10.0));
    }

    #[test]
    fn test_invalid_zoom_limits_are_ignored() {
        let mut canvas = Canvas::default();
        canvas.set_zoom(2.0);
        let (min_before, max_before) = (canvas.min_zoom(), canvas.max_zoom());
        canvas.take_dirty();

        canvas.set_zoom_limits(5.0, 2.0);
        canvas.set_zoom_limits(f64::NAN, 10.0);
        canvas.set_zoom_limits(0.1, f64::NAN);
        canvas.set_zoom_limits(0.0, 10.0);

        assert_eq!(canvas.min_zoom(), min_before);
        assert_eq!(canvas.max_zoom(), max_before);
        assert_eq!(canvas.zoom(), 2.0);
        assert!(!canvas.is_dirty());

        // The floor stays positive, so a zero zoom request clamps up
        // and panning keeps producing finite offsets
        canvas.set_zoom(0.0);
        assert_eq!(canvas.zoom(), canvas.min_zoom());
        canvas.pan_by(Point::new(10.0, 0.0));
        assert!(canvas.offset().is_finite());
    }
}
