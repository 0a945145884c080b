use crate::{
    core::{
        constants::{MAX_FLING_SPEED, TOUCH_SLOP, VELOCITY_WINDOW_MS},
        geom::Point,
    },
    input::events::{GestureEvent, GesturePhase, TouchEvent, TouchPhase},
};
use fxhash::FxHashMap;
use instant::Instant;
use std::collections::VecDeque;
use std::time::Duration;

/// Configuration for gesture recognition
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Screen distance a touch must travel before a pan begins
    pub touch_slop: f64,
    /// Lookback window for release-velocity estimation
    pub velocity_window: Duration,
    /// Hard cap on the estimated fling speed (screen points per second)
    pub max_fling_speed: f64,
}

impl GestureConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(crate::CanvasError::Gesture(format!(
                "touch_slop must be finite and non-negative, got {}",
                self.touch_slop
            ))
            .into());
        }
        if !self.max_fling_speed.is_finite() || self.max_fling_speed <= 0.0 {
            return Err(crate::CanvasError::Gesture(format!(
                "max_fling_speed must be finite and positive, got {}",
                self.max_fling_speed
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            velocity_window: Duration::from_millis(VELOCITY_WINDOW_MS),
            max_fling_speed: MAX_FLING_SPEED,
        }
    }
}

/// Touch tracking information
#[derive(Debug, Clone, Copy)]
struct TouchInfo {
    position: Point,
}

/// State of a pan in progress. The centroid of all active touches drives
/// the pan, so a two-finger pinch also pans when both fingers travel.
#[derive(Debug, Clone)]
struct PanState {
    /// True once accumulated travel has exceeded the touch slop
    started: bool,
    /// Centroid travel not yet emitted (accumulates while under slop)
    pending: Point,
    last_centroid: Point,
    /// Recent centroid history used to estimate release velocity
    samples: VecDeque<(Instant, Point)>,
}

impl PanState {
    fn new(centroid: Point, now: Instant) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((now, centroid));
        Self {
            started: false,
            pending: Point::default(),
            last_centroid: centroid,
            samples,
        }
    }

    /// Re-anchors the centroid after the touch count changes, so the
    /// centroid jump of a landing or lifting finger is not seen as travel
    fn reanchor(&mut self, centroid: Point, now: Instant) {
        self.last_centroid = centroid;
        self.samples.clear();
        self.samples.push_back((now, centroid));
    }
}

/// State of a pinch in progress (exactly two fingers)
#[derive(Debug, Clone, Copy)]
struct PinchState {
    last_distance: f64,
}

/// Turns a raw touch stream into pan and pinch gesture events.
///
/// Pan and pinch are recognized simultaneously: during a two-finger
/// sequence the inter-finger distance ratio feeds the pinch while the
/// centroid movement feeds the pan. A third finger ends the pinch but
/// keeps the pan alive on the three-finger centroid.
pub struct GestureRecognizer {
    pub enabled: bool,
    config: GestureConfig,
    active_touches: FxHashMap<u64, TouchInfo>,
    pan: Option<PanState>,
    pinch: Option<PinchState>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            enabled: true,
            config,
            active_touches: FxHashMap::default(),
            pan: None,
            pinch: None,
        }
    }

    /// Processes a batch of raw touch events and returns the gestures
    /// recognized from them. Returns nothing while disabled.
    pub fn process(&mut self, events: &[TouchEvent], now: Instant) -> Vec<GestureEvent> {
        if !self.enabled {
            return Vec::new();
        }

        let mut out = Vec::new();
        for event in events {
            match event.phase {
                TouchPhase::Start => self.touch_start(event.id, event.position, now, &mut out),
                TouchPhase::Move => self.touch_move(event.id, event.position, now, &mut out),
                TouchPhase::End => self.touch_end(event.id, now, &mut out),
                TouchPhase::Cancel => self.touch_cancel(event.id, now, &mut out),
            }
        }
        out
    }

    fn touch_start(&mut self, id: u64, position: Point, now: Instant, out: &mut Vec<GestureEvent>) {
        if self.active_touches.is_empty() {
            out.push(GestureEvent::TouchDown { position });
        }

        self.active_touches.insert(id, TouchInfo { position });
        let centroid = self.centroid();

        match &mut self.pan {
            None => self.pan = Some(PanState::new(centroid, now)),
            Some(pan) => pan.reanchor(centroid, now),
        }

        match self.active_touches.len() {
            2 => {
                self.pinch = Some(PinchState {
                    last_distance: self.touch_distance(),
                });
                out.push(GestureEvent::Pinch {
                    phase: GesturePhase::Began,
                    scale: 1.0,
                });
            }
            n if n > 2 => {
                if self.pinch.take().is_some() {
                    out.push(GestureEvent::Pinch {
                        phase: GesturePhase::Ended,
                        scale: 1.0,
                    });
                }
            }
            _ => {}
        }
    }

    fn touch_move(&mut self, id: u64, position: Point, now: Instant, out: &mut Vec<GestureEvent>) {
        match self.active_touches.get_mut(&id) {
            Some(info) => info.position = position,
            None => return,
        }
        let centroid = self.centroid();
        let distance = self.touch_distance();

        if let Some(pan) = &mut self.pan {
            let delta = centroid.subtract(&pan.last_centroid);
            pan.last_centroid = centroid;
            pan.pending = pan.pending.add(&delta);

            pan.samples.push_back((now, centroid));
            prune_samples(&mut pan.samples, now, self.config.velocity_window);

            if !pan.started && pan.pending.length() >= self.config.touch_slop {
                pan.started = true;
                out.push(GestureEvent::Pan {
                    phase: GesturePhase::Began,
                    translation: Point::default(),
                    velocity: Point::default(),
                });
            }

            if pan.started && (pan.pending.x != 0.0 || pan.pending.y != 0.0) {
                out.push(GestureEvent::Pan {
                    phase: GesturePhase::Changed,
                    translation: pan.pending,
                    velocity: Point::default(),
                });
                pan.pending = Point::default();
            }
        }

        if let Some(pinch) = &mut self.pinch {
            if self.active_touches.len() == 2 && distance > 0.0 {
                if pinch.last_distance > 0.0 {
                    let scale = distance / pinch.last_distance;
                    out.push(GestureEvent::Pinch {
                        phase: GesturePhase::Changed,
                        scale,
                    });
                }
                pinch.last_distance = distance;
            }
        }
    }

    fn touch_end(&mut self, id: u64, now: Instant, out: &mut Vec<GestureEvent>) {
        if self.active_touches.remove(&id).is_none() {
            return;
        }

        if self.pinch.is_some() && self.active_touches.len() < 2 {
            self.pinch = None;
            out.push(GestureEvent::Pinch {
                phase: GesturePhase::Ended,
                scale: 1.0,
            });
        }

        if self.active_touches.is_empty() {
            if let Some(pan) = self.pan.take() {
                if pan.started {
                    let velocity = self.estimate_release_velocity(&pan, now);
                    out.push(GestureEvent::Pan {
                        phase: GesturePhase::Ended,
                        translation: Point::default(),
                        velocity,
                    });
                }
            }
        } else {
            let centroid = self.centroid();
            if let Some(pan) = &mut self.pan {
                pan.reanchor(centroid, now);
            }
        }
    }

    fn touch_cancel(&mut self, id: u64, now: Instant, out: &mut Vec<GestureEvent>) {
        if self.active_touches.remove(&id).is_none() {
            return;
        }

        if self.pinch.is_some() && self.active_touches.len() < 2 {
            self.pinch = None;
            out.push(GestureEvent::Pinch {
                phase: GesturePhase::Cancelled,
                scale: 1.0,
            });
        }

        if self.active_touches.is_empty() {
            if let Some(pan) = self.pan.take() {
                // A cancelled pan reports no velocity, so no coast follows
                if pan.started {
                    out.push(GestureEvent::Pan {
                        phase: GesturePhase::Cancelled,
                        translation: Point::default(),
                        velocity: Point::default(),
                    });
                }
            }
        } else {
            let centroid = self.centroid();
            if let Some(pan) = &mut self.pan {
                pan.reanchor(centroid, now);
            }
        }
    }

    /// Centroid of all active touches in screen points
    fn centroid(&self) -> Point {
        let n = self.active_touches.len();
        if n == 0 {
            return Point::default();
        }
        let mut sum = Point::default();
        for info in self.active_touches.values() {
            sum = sum.add(&info.position);
        }
        sum.divide(n as f64)
    }

    /// Distance between the two active touches (0.0 unless exactly two)
    fn touch_distance(&self) -> f64 {
        if self.active_touches.len() != 2 {
            return 0.0;
        }
        let mut values = self.active_touches.values();
        match (values.next(), values.next()) {
            (Some(a), Some(b)) => a.position.distance_to(&b.position),
            _ => 0.0,
        }
    }

    /// Estimates release velocity from the recent centroid history.
    /// A finger that rested before lifting yields zero.
    fn estimate_release_velocity(&self, pan: &PanState, now: Instant) -> Point {
        let (first, last) = match (pan.samples.front(), pan.samples.back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Point::default(),
        };

        if now.duration_since(last.0) > self.config.velocity_window {
            return Point::default();
        }

        let dt = last.0.duration_since(first.0).as_secs_f64();
        if dt < 1e-3 {
            return Point::default();
        }

        last.1
            .subtract(&first.1)
            .divide(dt)
            .clamp_length(self.config.max_fling_speed)
    }

    /// Sets the gesture configuration
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn has_active_touches(&self) -> bool {
        !self.active_touches.is_empty()
    }

    pub fn touch_count(&self) -> usize {
        self.active_touches.len()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.as_ref().map(|p| p.started).unwrap_or(false)
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Resets all gesture state
    pub fn reset(&mut self) {
        self.active_touches.clear();
        self.pan = None;
        self.pinch = None;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops samples older than the lookback window, always keeping the
/// two newest so a velocity can still be computed.
fn prune_samples(samples: &mut VecDeque<(Instant, Point)>, now: Instant, window: Duration) {
    while samples.len() > 2 {
        match samples.front() {
            Some((t, _)) if now.duration_since(*t) > window => {
                samples.pop_front();
            }
            _ => break,
        }
    }
}
