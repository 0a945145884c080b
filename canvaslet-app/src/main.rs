use canvaslet::{
    core::geom::Point,
    ui::widget::{CanvasWidget, CanvasWidgetConfig},
};

/// Standalone infinite-canvas viewer application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Canvaslet - Infinite Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "canvaslet-app",
        options,
        Box::new(|cc| Box::new(CanvasletApp::new(cc))),
    )?;

    Ok(())
}

/// The main application struct
struct CanvasletApp {
    canvas_widget: CanvasWidget,
    selected_preset: String,
    show_debug_panel: bool,
}

impl CanvasletApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let canvas_widget = match CanvasWidget::with_config(CanvasWidgetConfig::default()) {
            Ok(widget) => widget,
            Err(e) => {
                eprintln!("Failed to build canvas widget: {}", e);
                CanvasWidget::new()
            }
        };

        Self {
            canvas_widget,
            selected_preset: "Home".to_string(),
            show_debug_panel: true,
        }
    }

    fn view_presets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Quick views:");

            let presets = [
                ("Home", Point::new(0.0, 0.0), 1.0),
                ("Close-up", Point::new(0.0, 0.0), 4.0),
                ("Wide", Point::new(0.0, 0.0), 0.25),
                ("Far corner", Point::new(-2000.0, -1500.0), 1.0),
            ];

            for (name, offset, zoom) in presets {
                if ui
                    .selectable_label(self.selected_preset == name, name)
                    .clicked()
                {
                    self.selected_preset = name.to_string();
                    let canvas = self.canvas_widget.canvas_mut();
                    canvas.set_offset(offset);
                    canvas.set_zoom(zoom);
                }
            }
        });
    }
}

impl eframe::App for CanvasletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug_panel, "Debug Panel");
                });

                ui.separator();
                self.view_presets(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let canvas = self.canvas_widget.canvas();
                    ui.label(format!(
                        "Offset: {:.1}, {:.1} | Zoom: {:.2}",
                        canvas.offset().x,
                        canvas.offset().y,
                        canvas.zoom()
                    ));
                });
            });
        });

        // Debug panel
        if self.show_debug_panel {
            egui::SidePanel::left("debug_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    ui.heading("Debug Info");
                    ui.separator();

                    let canvas = self.canvas_widget.canvas();
                    ui.label(format!(
                        "Offset: ({:.1}, {:.1})",
                        canvas.offset().x,
                        canvas.offset().y
                    ));
                    ui.label(format!("Zoom: {:.3}", canvas.zoom()));
                    ui.label(format!(
                        "Zoom limits: {:.1} - {:.1}",
                        canvas.min_zoom(),
                        canvas.max_zoom()
                    ));

                    ui.separator();
                    ui.label(format!("Coasting: {}", self.canvas_widget.is_coasting()));
                    let friction = self.canvas_widget.handler().options();
                    ui.label(format!("Resistance: {:.1}", friction.resistance));
                    if let Some(inertia) = self.canvas_widget.handler().inertia() {
                        let v = inertia.velocity();
                        ui.label(format!("Velocity: ({:.0}, {:.0})", v.x, v.y));
                    }

                    ui.separator();
                    if ui.button("Reset view").clicked() {
                        self.canvas_widget.reset_view();
                        self.selected_preset = "Home".to_string();
                    }
                });
        }

        // Main canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            use canvaslet::ui::widget::CanvasWidgetExt;
            ui.canvas_widget(&mut self.canvas_widget);
        });
    }
}
