use canvaslet::{
    core::{
        canvas::Canvas,
        config::{CanvasOptions, InertiaOptions},
        geom::Point,
    },
    input::{
        events::{TouchEvent, TouchPhase},
        gestures::GestureRecognizer,
        handler::InputHandler,
    },
    rendering::scene::{self, SceneStyle},
};
use instant::Instant;
use std::time::Duration;

/// Example of using canvaslet in headless mode without any UI
fn main() -> canvaslet::Result<()> {
    println!("🖼️ Canvaslet Headless Example");
    println!("=============================");

    // Create a canvas without rendering
    let size = Point::new(1024.0, 768.0);
    let options = CanvasOptions {
        min_zoom: 0.25,
        max_zoom: 8.0,
    };
    let mut canvas = Canvas::with_options(options, size)?;

    println!("✅ Canvas created:");
    println!("   Offset: {:.1}, {:.1}", canvas.offset().x, canvas.offset().y);
    println!("   Zoom: {}", canvas.zoom());
    println!("   Size: {}x{}", canvas.size().x, canvas.size().y);

    // Pan around
    println!("\n🚀 Testing pan operations:");
    let pan_deltas = [
        (100.0, 0.0),   // East
        (0.0, 100.0),   // South
        (-50.0, -50.0), // Northwest
    ];

    for (dx, dy) in pan_deltas {
        let old_offset = canvas.offset();
        canvas.pan_by(Point::new(dx, dy));
        let new_offset = canvas.offset();

        println!(
            "   Pan by ({}, {}) - Offset moved from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            dx, dy, old_offset.x, old_offset.y, new_offset.x, new_offset.y
        );
    }

    // Zoom about the view center
    println!("\n🔍 Testing zoom operations:");
    for factor in [2.0, 2.0, 0.5, 100.0] {
        let applied = canvas.zoom_by(factor);
        println!(
            "   Zoom by {} (applied {:.2}) - zoom {:.2}, offset ({:.1}, {:.1})",
            factor,
            applied,
            canvas.zoom(),
            canvas.offset().x,
            canvas.offset().y
        );
    }

    // Drive a synthetic one-finger fling through the gesture pipeline
    println!("\n⚡ Simulating a fling:");
    canvas.reset();
    let mut recognizer = GestureRecognizer::new();
    let mut handler = InputHandler::new();

    swipe(&mut recognizer, &mut handler, &mut canvas);
    println!("   Offset after drag: ({:.1}, {:.1})", canvas.offset().x, canvas.offset().y);
    println!("   Coasting: {}", handler.is_coasting());

    // Advance the coast at 60fps until it is spent
    let mut frames = 0u32;
    while handler.is_coasting() {
        handler.advance_inertia(1.0 / 60.0, &mut canvas);
        frames += 1;
    }
    println!(
        "   Coast finished after {} frames at offset ({:.1}, {:.1})",
        frames,
        canvas.offset().x,
        canvas.offset().y
    );

    // Retune the friction and repeat the same swipe
    println!("\n🛑 Same fling with triple the friction:");
    handler.set_options(InertiaOptions::new(6.0, 0.5));
    println!("   Resistance: {}", handler.options().resistance);
    canvas.reset();

    swipe(&mut recognizer, &mut handler, &mut canvas);
    let mut heavy_frames = 0u32;
    while handler.is_coasting() {
        handler.advance_inertia(1.0 / 60.0, &mut canvas);
        heavy_frames += 1;
    }
    println!(
        "   Coast finished after {} frames (was {}) at offset ({:.1}, {:.1})",
        heavy_frames,
        frames,
        canvas.offset().x,
        canvas.offset().y
    );

    // Compose the scene
    println!("\n🎨 Composing the scene:");
    for command in scene::compose(&canvas, &SceneStyle::default()) {
        println!("   {:?}", command);
    }

    // Final state
    println!("\n📊 Final canvas state:");
    println!("   Offset: {:.2}, {:.2}", canvas.offset().x, canvas.offset().y);
    println!("   Zoom: {:.2}", canvas.zoom());
    println!("   Size: {:.0}x{:.0}", canvas.size().x, canvas.size().y);

    println!("\n✅ Headless example completed successfully!");
    println!("   This demonstrates that canvaslet can work without any UI framework.");
    println!("   Perfect for gesture replay, testing, or CLI tools.");

    Ok(())
}

/// One quick eastward swipe: six 20-point moves over roughly 100 ms,
/// then a release fast enough to coast
fn swipe(recognizer: &mut GestureRecognizer, handler: &mut InputHandler, canvas: &mut Canvas) {
    let t0 = Instant::now();
    let frame = Duration::from_millis(16);

    feed(
        &[TouchEvent::new(1, TouchPhase::Start, Point::new(100.0, 300.0))],
        t0,
        recognizer,
        handler,
        canvas,
    );
    for i in 1..=6u32 {
        feed(
            &[TouchEvent::new(
                1,
                TouchPhase::Move,
                Point::new(100.0 + 20.0 * f64::from(i), 300.0),
            )],
            t0 + frame * i,
            recognizer,
            handler,
            canvas,
        );
    }
    feed(
        &[TouchEvent::new(1, TouchPhase::End, Point::new(220.0, 300.0))],
        t0 + frame * 6,
        recognizer,
        handler,
        canvas,
    );
}

/// Pushes one frame of touch events through the recognizer and handler
fn feed(
    events: &[TouchEvent],
    now: Instant,
    recognizer: &mut GestureRecognizer,
    handler: &mut InputHandler,
    canvas: &mut Canvas,
) {
    for event in recognizer.process(events, now) {
        if event.is_pan() && event.is_terminal() {
            println!("   🖐️ Pan released");
        }
        handler.handle_event(event, canvas);
    }
}
