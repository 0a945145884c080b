use crate::{
    animation::inertia::Inertia,
    core::{canvas::Canvas, config::InertiaOptions, geom::Point},
    input::events::{GestureEvent, GesturePhase},
};

/// Applies recognized gestures to a canvas and owns the inertial coast
/// that keeps the content moving after a fast pan is released.
pub struct InputHandler {
    pub enabled: bool,
    options: InertiaOptions,
    inertia: Option<Inertia>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_options(InertiaOptions::default())
    }

    pub fn with_options(options: InertiaOptions) -> Self {
        Self {
            enabled: true,
            options,
            inertia: None,
        }
    }

    /// Handles a gesture event by mutating the canvas directly.
    /// `Began` phases carry no deltas and mutate nothing; a `Cancelled`
    /// pan never starts a coast.
    pub fn handle_event(&mut self, event: GestureEvent, canvas: &mut Canvas) {
        if !self.enabled {
            return;
        }

        match event {
            GestureEvent::TouchDown { .. } => {
                // Catching the canvas: any new contact stops the coast
                self.cancel_inertia();
            }
            GestureEvent::Pan {
                phase,
                translation,
                velocity,
            } => match phase {
                GesturePhase::Changed => canvas.pan_by(translation),
                GesturePhase::Ended => self.start_inertia(velocity, canvas.zoom()),
                GesturePhase::Began | GesturePhase::Cancelled => {}
            },
            GestureEvent::Pinch { phase, scale } => {
                if phase == GesturePhase::Changed {
                    canvas.zoom_by(scale);
                }
            }
        }
    }

    /// Starts a coast from a screen-space release velocity. The velocity
    /// is divided by the zoom once here; from then on the coast integrates
    /// in world units. Releases slower than the stop threshold coast not
    /// at all.
    fn start_inertia(&mut self, screen_velocity: Point, zoom: f64) {
        let world_velocity = screen_velocity.divide(zoom);
        let inertia = Inertia::new(world_velocity, &self.options);
        if inertia.is_spent() {
            self.inertia = None;
        } else {
            log::debug!(
                "starting inertial coast at {:.1} world units/s",
                world_velocity.length()
            );
            self.inertia = Some(inertia);
        }
    }

    /// Advances the running coast by `dt` seconds and translates the
    /// canvas by the resulting step. Call once per frame; does nothing
    /// when no coast is running.
    pub fn advance_inertia(&mut self, dt: f64, canvas: &mut Canvas) {
        if let Some(inertia) = &mut self.inertia {
            let step = inertia.advance(dt);
            canvas.translate(step);
            if inertia.is_spent() {
                log::debug!("inertial coast finished");
                self.inertia = None;
            }
        }
    }

    /// Whether an inertial coast is currently running
    pub fn is_coasting(&self) -> bool {
        self.inertia.is_some()
    }

    /// The running coast, if any
    pub fn inertia(&self) -> Option<&Inertia> {
        self.inertia.as_ref()
    }

    /// Stops any running coast immediately
    pub fn cancel_inertia(&mut self) {
        if self.inertia.take().is_some() {
            log::debug!("inertial coast cancelled");
        }
    }

    pub fn options(&self) -> InertiaOptions {
        self.options
    }

    pub fn set_options(&mut self, options: InertiaOptions) {
        self.options = options;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
