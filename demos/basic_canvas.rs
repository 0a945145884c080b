use canvaslet::{
    core::geom::Point,
    ui::widget::{CanvasWidget, CanvasWidgetConfig, CanvasWidgetExt},
};
use eframe::egui;

/// Example application using the canvas widget
struct CanvasApp {
    canvas_widget: CanvasWidget,
    interactive: bool,
    offset_x: f64,
    offset_y: f64,
    zoom_level: f64,
}

impl CanvasApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Dark background with a gold marker instead of the default style
        let mut config = CanvasWidgetConfig::default();
        config.style.background = egui::Color32::from_rgb(24, 26, 38).into();
        config.style.marker_color = egui::Color32::GOLD.into();

        let canvas_widget = match CanvasWidget::with_config(config) {
            Ok(widget) => widget,
            Err(e) => {
                eprintln!("Failed to build canvas widget: {}", e);
                CanvasWidget::new()
            }
        };

        Self {
            canvas_widget,
            interactive: true,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom_level: 1.0,
        }
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update current values from the canvas
        let canvas = self.canvas_widget.canvas();
        self.offset_x = canvas.offset().x;
        self.offset_y = canvas.offset().y;
        self.zoom_level = canvas.zoom();

        // Top panel with controls
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Canvaslet Infinite Canvas Example");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Offset:");
                ui.label(format!("{:.1}, {:.1}", self.offset_x, self.offset_y));

                ui.separator();

                ui.label("Zoom:");
                ui.label(format!("{:.2}", self.zoom_level));

                ui.separator();

                if ui.button("Home").clicked() {
                    self.canvas_widget.reset_view();
                }

                if ui.button("East 500").clicked() {
                    let canvas = self.canvas_widget.canvas_mut();
                    canvas.set_offset(Point::new(-500.0, 0.0));
                    canvas.set_zoom(1.0);
                }

                if ui.button("Close-up").clicked() {
                    let canvas = self.canvas_widget.canvas_mut();
                    canvas.set_offset(Point::new(0.0, 0.0));
                    canvas.set_zoom(4.0);
                }
            });
        });

        // Left panel with settings
        egui::SidePanel::left("left_panel").show(ctx, |ui| {
            ui.heading("Canvas Settings");
            ui.separator();

            if ui.checkbox(&mut self.interactive, "Interactive").changed() {
                self.canvas_widget.set_interactive(self.interactive);
            }

            ui.separator();

            ui.heading("Manual Controls");

            ui.horizontal(|ui| {
                if ui.button("Zoom In").clicked() {
                    self.canvas_widget.canvas_mut().zoom_by(1.25);
                }
                if ui.button("Zoom Out").clicked() {
                    self.canvas_widget.canvas_mut().zoom_by(0.8);
                }
            });

            ui.separator();

            // Manual offset input
            ui.heading("Set Offset");
            let mut x = self.offset_x;
            let mut y = self.offset_y;

            ui.horizontal(|ui| {
                ui.label("X:");
                if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                    self.canvas_widget
                        .canvas_mut()
                        .set_offset(Point::new(x, y));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Y:");
                if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                    self.canvas_widget
                        .canvas_mut()
                        .set_offset(Point::new(x, y));
                }
            });

            ui.separator();

            // Manual zoom input
            ui.heading("Set Zoom");
            let mut zoom = self.zoom_level;
            ui.horizontal(|ui| {
                ui.label("Zoom:");
                if ui.add(egui::Slider::new(&mut zoom, 0.1..=10.0)).changed() {
                    self.canvas_widget.canvas_mut().set_zoom(zoom);
                }
            });

            ui.separator();

            ui.heading("Info");
            ui.label(format!("Coasting: {}", self.canvas_widget.is_coasting()));
        });

        // Main canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show the canvas widget using the extension trait
            ui.canvas_widget(&mut self.canvas_widget);
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Initialize logging

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Canvaslet Infinite Canvas",
        options,
        Box::new(|cc| Box::new(CanvasApp::new(cc))),
    )
}
