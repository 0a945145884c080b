use canvaslet::core::{canvas::Canvas, geom::Point};
use instant::Instant;
use std::time::Duration;

/// Integration tests for real gesture sequences.
/// These drive the recognizer, handler, and canvas together the way the
/// widget does each frame.
#[cfg(test)]
mod interaction_tests {
    use super::*;
    use canvaslet::input::{
        events::{GestureEvent, GesturePhase, TouchEvent, TouchPhase},
        gestures::GestureRecognizer,
        handler::InputHandler,
    };

    const FRAME: f64 = 1.0 / 60.0;

    /// A canvas with its full input pipeline and a synthetic clock
    struct Pipeline {
        canvas: Canvas,
        recognizer: GestureRecognizer,
        handler: InputHandler,
        now: Instant,
    }

    impl Pipeline {
        fn new() -> Self {
            Self {
                canvas: Canvas::new(Point::new(800.0, 600.0)),
                recognizer: GestureRecognizer::new(),
                handler: InputHandler::new(),
                now: Instant::now(),
            }
        }

        /// Advances the clock and feeds one frame of touch events
        fn frame(&mut self, dt_ms: u64, events: &[TouchEvent]) {
            self.now += Duration::from_millis(dt_ms);
            for event in self.recognizer.process(events, self.now) {
                self.handler.handle_event(event, &mut self.canvas);
            }
        }

        fn marker_screen_pos(&self) -> Point {
            self.canvas.world_to_screen(&Point::default())
        }
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> TouchEvent {
        TouchEvent::new(id, phase, Point::new(x, y))
    }

    #[test]
    fn test_drag_moves_content_with_finger() {
        let mut p = Pipeline::new();

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        for i in 1..=4 {
            let x = 400.0 + 30.0 * i as f64;
            p.frame(16, &[touch(1, TouchPhase::Move, x, 300.0)]);
        }
        // Finger rests before lifting, so no fling
        p.frame(200, &[touch(1, TouchPhase::End, 520.0, 300.0)]);

        assert_eq!(
            p.canvas.offset(),
            Point::new(120.0, 0.0),
            "At zoom 1 the offset should match the screen travel exactly"
        );
        assert!(!p.handler.is_coasting(), "A rested finger must not fling");
    }

    #[test]
    fn test_drag_at_double_zoom_halves_world_travel() {
        let mut p = Pipeline::new();
        p.canvas.set_zoom(2.0);

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        p.frame(16, &[touch(1, TouchPhase::Move, 500.0, 300.0)]);
        p.frame(200, &[touch(1, TouchPhase::End, 500.0, 300.0)]);

        assert_eq!(
            p.canvas.offset(),
            Point::new(50.0, 0.0),
            "Screen travel divides by zoom so content still follows the finger"
        );
    }

    #[test]
    fn test_release_velocity_starts_coast_that_decays() {
        let mut p = Pipeline::new();

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        for i in 1..=6 {
            let x = 400.0 + 20.0 * i as f64;
            p.frame(16, &[touch(1, TouchPhase::Move, x, 300.0)]);
        }
        p.frame(16, &[touch(1, TouchPhase::End, 520.0, 300.0)]);

        assert!(p.handler.is_coasting(), "A fast release should coast");
        let drag_offset = p.canvas.offset();

        // Each step covers less ground than the one before
        p.handler.advance_inertia(FRAME, &mut p.canvas);
        let first_step = p.canvas.offset().x - drag_offset.x;
        p.handler.advance_inertia(FRAME, &mut p.canvas);
        let second_step = p.canvas.offset().x - drag_offset.x - first_step;

        assert!(first_step > 0.0, "Coast should continue in the drag direction");
        assert!(
            second_step < first_step,
            "Coast displacement should shrink every frame"
        );

        let mut frames = 0;
        while p.handler.is_coasting() {
            p.handler.advance_inertia(FRAME, &mut p.canvas);
            frames += 1;
            assert!(frames < 10_000, "Coast must terminate");
        }

        // Release velocity is ~1250 px/s; with resistance 2 the total coast
        // distance is close to v0 / resistance
        let coast_distance = p.canvas.offset().x - drag_offset.x;
        assert!(
            coast_distance > 450.0 && coast_distance < 700.0,
            "Coast distance should be near v0/resistance, got {}",
            coast_distance
        );
    }

    #[test]
    fn test_touch_down_catches_a_coasting_canvas() {
        let mut p = Pipeline::new();

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        for i in 1..=6 {
            let x = 400.0 + 20.0 * i as f64;
            p.frame(16, &[touch(1, TouchPhase::Move, x, 300.0)]);
        }
        p.frame(16, &[touch(1, TouchPhase::End, 520.0, 300.0)]);
        assert!(p.handler.is_coasting());

        // New contact stops the coast immediately
        p.frame(50, &[touch(2, TouchPhase::Start, 400.0, 300.0)]);
        assert!(!p.handler.is_coasting());

        let caught_offset = p.canvas.offset();
        p.handler.advance_inertia(FRAME, &mut p.canvas);
        assert_eq!(
            p.canvas.offset(),
            caught_offset,
            "A caught canvas must not keep drifting"
        );
    }

    #[test]
    fn test_spent_coast_stops_dirtying_the_canvas() {
        let mut p = Pipeline::new();

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        for i in 1..=6 {
            let x = 400.0 + 20.0 * i as f64;
            p.frame(16, &[touch(1, TouchPhase::Move, x, 300.0)]);
        }
        p.frame(16, &[touch(1, TouchPhase::End, 520.0, 300.0)]);

        let mut frames = 0;
        while p.handler.is_coasting() {
            p.handler.advance_inertia(FRAME, &mut p.canvas);
            frames += 1;
            assert!(frames < 10_000, "Coast must terminate");
        }
        p.canvas.take_dirty();

        // Further frames must not mark the canvas dirty, otherwise the
        // widget would request repaints forever
        for _ in 0..10 {
            p.handler.advance_inertia(FRAME, &mut p.canvas);
        }
        assert!(
            !p.canvas.is_dirty(),
            "An idle canvas must stay clean between frames"
        );
    }

    #[test]
    fn test_pinch_zooms_by_the_spread_ratio() {
        let mut p = Pipeline::new();

        p.frame(0, &[touch(1, TouchPhase::Start, 400.0, 300.0)]);
        p.frame(16, &[touch(2, TouchPhase::Start, 500.0, 300.0)]);

        let marker_before = p.marker_screen_pos();

        // Finger 2 spreads from 100 to 200 apart; the centroid travels +50
        p.frame(16, &[touch(2, TouchPhase::Move, 600.0, 300.0)]);

        assert!(
            (p.canvas.zoom() - 2.0).abs() < 1e-9,
            "Net zoom should equal the total distance ratio, got {}",
            p.canvas.zoom()
        );

        // The world origin marker rides along with the centroid travel:
        // pinching preserves its screen position, panning translates it
        let marker_after = p.marker_screen_pos();
        assert!(
            (marker_after.x - (marker_before.x + 50.0)).abs() < 1e-6,
            "Marker should move by the centroid travel, got {} -> {}",
            marker_before.x,
            marker_after.x
        );
        assert!((marker_after.y - marker_before.y).abs() < 1e-6);
    }

    #[test]
    fn test_pinch_at_zoom_ceiling_does_not_drift() {
        let mut p = Pipeline::new();
        p.canvas.set_zoom(10.0);
        p.canvas.set_offset(Point::new(100.0, 0.0));
        p.canvas.take_dirty();

        p.handler.handle_event(
            GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: 2.0,
            },
            &mut p.canvas,
        );

        assert_eq!(p.canvas.zoom(), 10.0, "Zoom is pinned at the ceiling");
        assert_eq!(
            p.canvas.offset(),
            Point::new(100.0, 0.0),
            "A pinned pinch must not drift the offset"
        );
        assert!(!p.canvas.is_dirty(), "A pinned pinch is not a change");
    }

    #[test]
    fn test_pan_pinch_pan_worked_example() {
        let mut p = Pipeline::new();

        // Pan 100 screen points right at zoom 1
        p.handler.handle_event(
            GestureEvent::Pan {
                phase: GesturePhase::Changed,
                translation: Point::new(100.0, 0.0),
                velocity: Point::default(),
            },
            &mut p.canvas,
        );
        assert_eq!(p.canvas.offset(), Point::new(100.0, 0.0));

        // Pinch to double the zoom about the view center
        p.handler.handle_event(
            GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: 2.0,
            },
            &mut p.canvas,
        );
        assert_eq!(p.canvas.zoom(), 2.0);
        assert_eq!(p.canvas.offset(), Point::new(50.0, 0.0));

        // Pan another 100 screen points right, now at zoom 2
        p.handler.handle_event(
            GestureEvent::Pan {
                phase: GesturePhase::Changed,
                translation: Point::new(100.0, 0.0),
                velocity: Point::default(),
            },
            &mut p.canvas,
        );
        assert_eq!(p.canvas.offset(), Point::new(100.0, 0.0));

        // The marker sits 200 screen points right of the view center
        assert_eq!(p.marker_screen_pos(), Point::new(600.0, 300.0));
    }

    #[test]
    fn test_offset_is_unbounded() {
        let mut p = Pipeline::new();

        // Fling hard, then keep panning far beyond the view
        for _ in 0..100 {
            p.handler.handle_event(
                GestureEvent::Pan {
                    phase: GesturePhase::Changed,
                    translation: Point::new(5000.0, -5000.0),
                    velocity: Point::default(),
                },
                &mut p.canvas,
            );
        }

        assert_eq!(p.canvas.offset(), Point::new(500_000.0, -500_000.0));
        assert!(p.canvas.offset().is_finite());
        assert!(
            p.canvas.zoom() >= p.canvas.min_zoom() && p.canvas.zoom() <= p.canvas.max_zoom()
        );
    }
}
