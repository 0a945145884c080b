use crate::{
    core::{
        canvas::Canvas,
        config::{CanvasOptions, InertiaOptions},
        geom::Point,
    },
    input::{
        events::{GestureEvent, GesturePhase, TouchEvent, TouchPhase},
        gestures::{GestureConfig, GestureRecognizer},
        handler::InputHandler,
    },
    rendering::scene::{self, DrawCommand, SceneStyle},
    Result,
};
use egui::{CursorIcon, Pos2, Rect, Response, Sense, Ui, Vec2};
use instant::Instant;

/// Canvas widget configuration
#[derive(Debug, Clone)]
pub struct CanvasWidgetConfig {
    pub interactive: bool,
    pub canvas: CanvasOptions,
    pub inertia: InertiaOptions,
    pub gestures: GestureConfig,
    pub style: SceneStyle,
    pub preferred_size: Option<Vec2>,
}

impl Default for CanvasWidgetConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            canvas: CanvasOptions::default(),
            inertia: InertiaOptions::default(),
            gestures: GestureConfig::default(),
            style: SceneStyle::default(),
            preferred_size: None,
        }
    }
}

/// Retained infinite-canvas widget.
///
/// Owns the canvas state, the gesture recognizer, and the input handler,
/// and wires them into egui each frame: raw touch events feed the
/// recognizer, mouse drags and wheel/trackpad zoom go through egui's own
/// pointer plumbing, and a coast keeps requesting repaints until it is
/// spent.
///
/// ```no_run
/// # use canvaslet::ui::widget::{CanvasWidget, CanvasWidgetExt};
/// # fn demo(ui: &mut egui::Ui, widget: &mut CanvasWidget) {
/// ui.canvas_widget(widget);
/// # }
/// ```
pub struct CanvasWidget {
    canvas: Canvas,
    handler: InputHandler,
    recognizer: GestureRecognizer,
    config: CanvasWidgetConfig,
}

impl CanvasWidget {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::default(),
            handler: InputHandler::new(),
            recognizer: GestureRecognizer::new(),
            config: CanvasWidgetConfig::default(),
        }
    }

    /// Creates a widget from a validated configuration
    pub fn with_config(config: CanvasWidgetConfig) -> Result<Self> {
        config.canvas.validate()?;
        config.inertia.validate()?;
        config.gestures.validate()?;

        Ok(Self {
            canvas: Canvas::with_options(config.canvas, Point::new(800.0, 600.0))?,
            handler: InputHandler::with_options(config.inertia),
            recognizer: GestureRecognizer::with_config(config.gestures.clone()),
            config,
        })
    }

    /// Read-only access to the canvas state
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the canvas for programmatic panning and zooming
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Read-only access to the input handler (coast inspection)
    pub fn handler(&self) -> &InputHandler {
        &self.handler
    }

    pub fn config(&self) -> &CanvasWidgetConfig {
        &self.config
    }

    /// Enables or disables gesture handling. Disabling mid-gesture drops
    /// the gesture and any coast.
    pub fn set_interactive(&mut self, interactive: bool) {
        if self.config.interactive && !interactive {
            self.handler.cancel_inertia();
            self.recognizer.reset();
        }
        self.config.interactive = interactive;
    }

    /// Whether an inertial coast is currently running
    pub fn is_coasting(&self) -> bool {
        self.handler.is_coasting()
    }

    /// Restores the home view and stops any coast
    pub fn reset_view(&mut self) {
        self.handler.cancel_inertia();
        self.recognizer.reset();
        self.canvas.reset();
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let desired_size = self
            .config
            .preferred_size
            .unwrap_or_else(|| ui.available_size());
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        self.canvas
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        if self.config.interactive {
            self.handle_input(ui, &response, rect);
        }

        let dt = ui.input(|i| i.stable_dt) as f64;
        self.handler.advance_inertia(dt, &mut self.canvas);

        if self.canvas.take_dirty() {
            response.mark_changed();
            ui.ctx().request_repaint();
        }
        if self.handler.is_coasting() {
            ui.ctx().request_repaint();
        }

        if self.config.interactive {
            if response.dragged() || self.recognizer.is_panning() {
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            } else if response.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
        }

        self.paint(ui, rect);
        response
    }

    /// Feeds this frame's input into the recognizer and handler.
    ///
    /// While raw touches are present the pointer path is skipped entirely:
    /// egui synthesizes pointer events from the first finger, and handling
    /// both would pan twice and zoom twice.
    fn handle_input(&mut self, ui: &Ui, response: &Response, rect: Rect) {
        let touches = Self::collect_touches(ui, rect);

        if !touches.is_empty() || self.recognizer.has_active_touches() {
            let now = Instant::now();
            for event in self.recognizer.process(&touches, now) {
                if event.is_terminal() {
                    log::trace!("gesture finished: {:?}", event);
                }
                self.handler.handle_event(event, &mut self.canvas);
            }
            return;
        }

        if ui.input(|i| i.pointer.any_pressed()) && response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let position = Self::to_widget_space(pos, rect);
                self.handler
                    .handle_event(GestureEvent::TouchDown { position }, &mut self.canvas);
            }
        }

        if response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                self.handler.handle_event(
                    GestureEvent::Pan {
                        phase: GesturePhase::Changed,
                        translation: Point::new(delta.x as f64, delta.y as f64),
                        velocity: Point::default(),
                    },
                    &mut self.canvas,
                );
            }
        }

        if response.drag_released() {
            let velocity = ui.input(|i| i.pointer.velocity());
            let velocity = Point::new(velocity.x as f64, velocity.y as f64)
                .clamp_length(self.config.gestures.max_fling_speed);
            self.handler.handle_event(
                GestureEvent::Pan {
                    phase: GesturePhase::Ended,
                    translation: Point::default(),
                    velocity,
                },
                &mut self.canvas,
            );
        }

        if response.hovered() {
            let factor = ui.input(|i| i.zoom_delta()) as f64;
            if factor != 1.0 {
                self.handler.handle_event(
                    GestureEvent::Pinch {
                        phase: GesturePhase::Changed,
                        scale: factor,
                    },
                    &mut self.canvas,
                );
            }
        }
    }

    /// Collects this frame's raw touch events, mapped into widget space.
    /// Touches starting outside the widget are ignored; later phases of
    /// known touches pass through regardless of position.
    fn collect_touches(ui: &Ui, rect: Rect) -> Vec<TouchEvent> {
        ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| Self::map_touch_event(event, rect))
                .collect()
        })
    }

    fn map_touch_event(event: &egui::Event, rect: Rect) -> Option<TouchEvent> {
        match event {
            egui::Event::Touch {
                id, phase, pos, ..
            } => {
                let phase = match phase {
                    egui::TouchPhase::Start => {
                        if !rect.contains(*pos) {
                            return None;
                        }
                        TouchPhase::Start
                    }
                    egui::TouchPhase::Move => TouchPhase::Move,
                    egui::TouchPhase::End => TouchPhase::End,
                    egui::TouchPhase::Cancel => TouchPhase::Cancel,
                };
                Some(TouchEvent::new(id.0, phase, Self::to_widget_space(*pos, rect)))
            }
            _ => None,
        }
    }

    fn to_widget_space(pos: Pos2, rect: Rect) -> Point {
        Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        for command in scene::compose(&self.canvas, &self.config.style) {
            match command {
                DrawCommand::Background { color } => {
                    painter.rect_filled(rect, 0.0, color);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let center =
                        Pos2::new(rect.min.x + center.x as f32, rect.min.y + center.y as f32);
                    painter.circle_filled(center, radius as f32, color);
                }
            }
        }
    }
}

impl Default for CanvasWidget {
    fn default() -> Self {
        Self::new()
    }
}

pub trait CanvasWidgetExt {
    fn canvas_widget(&mut self, widget: &mut CanvasWidget) -> Response;
}

impl CanvasWidgetExt for Ui {
    fn canvas_widget(&mut self, widget: &mut CanvasWidget) -> Response {
        widget.show(self)
    }
}
