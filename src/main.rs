use anyhow::Result;
use bunny_paint::{export, logging, settings};
use bunny_paint::{PaintController, PaintRequest, Tool};
use std::path::Path;
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    let debug = std::env::args().any(|arg| arg == "--debug");
    logging::init(debug);

    let settings = settings::load_from_path(Path::new(settings::SETTINGS_FILE_NAME))?;
    let mut paint = PaintController::from_settings(320, 240, &settings)?;

    // Scripted session exercising the widget end to end: outline a frame,
    // flood the inside, spray a ground line, stamp a title, export.
    paint.select_tool(Tool::Rectangle);
    paint.select_color("#000000")?;
    paint.on_press_at(40.0, 60.0);
    paint.on_drag_to(200.0, 150.0);
    paint.on_release_at(280.0, 200.0);

    paint.select_tool(Tool::Fill);
    paint.select_color("hotpink")?;
    paint.on_press_at(160.0, 130.0);

    paint.select_tool(Tool::Spray);
    paint.select_color("#228b22")?;
    paint.on_press_at(48.0, 220.0);
    for step in 1..=12 {
        paint.on_drag_to(48.0 + step as f64 * 18.0, 220.0);
    }
    paint.on_release_at(264.0, 220.0);

    paint.select_tool(Tool::Text);
    paint.select_color("#0000ff")?;
    if let Some(PaintRequest::TextInput { x, y }) = paint.on_press_at(90.0, 40.0) {
        info!(x, y, "answering text prompt");
        paint.submit_text_input(Some("BUNNY SOUP".to_string()));
    }

    let path = export::save_png_to_dir(paint.surface(), Path::new("."))?;
    info!(path = %path.display(), "demo drawing saved");

    // Resize lands only after the quiet period, so poll until it applies.
    paint.request_resize(640, 480)?;
    while !paint.poll_resize(Instant::now()) {
        std::thread::sleep(std::time::Duration::from_millis(25));
    }
    info!(
        width = paint.surface().width,
        height = paint.surface().height,
        "blank surface ready after resize"
    );
    Ok(())
}
