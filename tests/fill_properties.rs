use bunny_paint::{PaintController, Rgba, Tool};

fn controller(width: u32, height: u32) -> PaintController {
    PaintController::with_seed(width, height, 3).expect("controller")
}

#[test]
fn fill_stays_inside_a_drawn_boundary() {
    let mut paint = controller(80, 80);
    paint.select_tool(Tool::Rectangle);
    paint.select_color("#000000").expect("color");
    paint.on_press_at(20.0, 20.0);
    paint.on_release_at(60.0, 60.0);

    paint.select_tool(Tool::Fill);
    paint.select_color("#00ff00").expect("color");
    paint.on_press_at(40.0, 40.0);

    let green = Rgba::rgba(0, 255, 0, 255);
    let surface = paint.surface();
    assert_eq!(surface.pixel(40, 40), green);
    for (x, y) in [(0, 0), (10, 40), (40, 10), (79, 79), (70, 40)] {
        assert_eq!(surface.pixel(x, y), Rgba::WHITE, "outside at {x},{y}");
    }
}

#[test]
fn filling_with_the_existing_color_changes_nothing() {
    let mut paint = controller(32, 32);
    paint.select_tool(Tool::Fill);
    paint.select_color("#ffffff").expect("color");

    let before = paint.surface().clone();
    paint.on_press_at(16.0, 16.0);
    assert_eq!(paint.surface(), &before, "white on white is a no-op");

    // A second fill over an already-filled region is equally inert.
    paint.select_color("#123456").expect("color");
    paint.on_press_at(16.0, 16.0);
    let after_first = paint.surface().clone();
    paint.on_press_at(16.0, 16.0);
    assert_eq!(paint.surface(), &after_first);
}

#[test]
fn fill_paints_fully_opaque_even_from_translucent_colors() {
    let mut paint = controller(16, 16);
    paint.select_tool(Tool::Fill);
    paint.select_color("rgba(255, 0, 0, 0.5)").expect("color");
    assert_eq!(paint.tools().current_color.a, 128);

    paint.on_press_at(8.0, 8.0);
    assert_eq!(paint.surface().pixel(8, 8), Rgba::rgba(255, 0, 0, 255));
}

#[test]
fn oversized_regions_fill_partially_and_never_panic() {
    let mut paint = controller(512, 512);
    paint.select_tool(Tool::Fill);
    paint.select_color("#ff0000").expect("color");
    paint.on_press_at(256.0, 256.0);

    let red = Rgba::rgba(255, 0, 0, 255);
    let mut painted = 0usize;
    for y in 0..512 {
        for x in 0..512 {
            let pixel = paint.surface().pixel(x, y);
            if pixel == red {
                painted += 1;
            } else {
                assert_eq!(pixel, Rgba::WHITE, "untouched pixels stay white");
            }
        }
    }
    assert!(painted > 0, "some of the region filled");
    assert!(painted < 512 * 512, "the safety cap stopped the fill");
    assert_eq!(paint.surface().pixel(256, 256), red, "seed itself painted");
}

#[test]
fn fill_outside_the_surface_is_ignored() {
    let mut paint = controller(32, 32);
    paint.select_tool(Tool::Fill);
    paint.select_color("#000000").expect("color");

    let before = paint.surface().clone();
    paint.on_press_at(-3.0, 10.0);
    paint.on_press_at(10.0, 300.0);
    assert_eq!(paint.surface(), &before);
}
