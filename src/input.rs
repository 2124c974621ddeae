/// On-screen bounding rectangle of the surface element, in CSS pixels.
/// Dimensions must be positive; the page layout guarantees this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Unified pointer event in client space. Mouse events map directly; touch
/// events go through [`pointer_event_from_touch`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(ClientPoint),
    Drag(ClientPoint),
    Release(ClientPoint),
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// Converts a client-space point to surface pixel space, correcting for any
/// CSS scaling of the surface relative to its backing pixel grid.
pub fn map_to_surface(
    point: ClientPoint,
    rect: SurfaceRect,
    surface_size: (u32, u32),
) -> (f64, f64) {
    let scale_x = surface_size.0 as f64 / rect.width;
    let scale_y = surface_size.1 as f64 / rect.height;
    ((point.x - rect.left) * scale_x, (point.y - rect.top) * scale_y)
}

/// Collapses a multi-point touch event onto the single-pointer model: only
/// the first active touch drives the stroke, and a touch end reports the
/// first point that lifted. Returns `None` when the relevant list is empty.
pub fn pointer_event_from_touch(
    phase: TouchPhase,
    active: &[ClientPoint],
    changed: &[ClientPoint],
) -> Option<PointerEvent> {
    match phase {
        TouchPhase::Start => active.first().map(|p| PointerEvent::Press(*p)),
        TouchPhase::Move => active.first().map(|p| PointerEvent::Drag(*p)),
        TouchPhase::End => changed.first().map(|p| PointerEvent::Release(*p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_scales_css_pixels_to_backing_pixels() {
        let rect = SurfaceRect {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 300.0,
        };
        let mapped = map_to_surface(ClientPoint::new(100.0, 100.0), rect, (800, 600));
        assert_eq!(mapped, (200.0, 200.0));
    }

    #[test]
    fn mapping_subtracts_the_rect_origin() {
        let rect = SurfaceRect {
            left: 50.0,
            top: 20.0,
            width: 400.0,
            height: 300.0,
        };
        let mapped = map_to_surface(ClientPoint::new(150.0, 170.0), rect, (800, 600));
        assert_eq!(mapped, (200.0, 300.0));
    }

    #[test]
    fn unscaled_surface_passes_coordinates_through() {
        let rect = SurfaceRect {
            left: 0.0,
            top: 0.0,
            width: 640.0,
            height: 480.0,
        };
        let mapped = map_to_surface(ClientPoint::new(10.5, 20.25), rect, (640, 480));
        assert_eq!(mapped, (10.5, 20.25));
    }

    #[test]
    fn first_active_touch_drives_press_and_drag() {
        let first = ClientPoint::new(5.0, 6.0);
        let second = ClientPoint::new(50.0, 60.0);

        assert_eq!(
            pointer_event_from_touch(TouchPhase::Start, &[first, second], &[]),
            Some(PointerEvent::Press(first))
        );
        assert_eq!(
            pointer_event_from_touch(TouchPhase::Move, &[second], &[]),
            Some(PointerEvent::Drag(second))
        );
    }

    #[test]
    fn touch_end_uses_the_first_changed_point() {
        let lifted = ClientPoint::new(7.0, 8.0);
        assert_eq!(
            pointer_event_from_touch(TouchPhase::End, &[], &[lifted]),
            Some(PointerEvent::Release(lifted))
        );
    }

    #[test]
    fn empty_touch_lists_produce_no_event() {
        assert_eq!(pointer_event_from_touch(TouchPhase::Start, &[], &[]), None);
        assert_eq!(pointer_event_from_touch(TouchPhase::Move, &[], &[]), None);
        assert_eq!(pointer_event_from_touch(TouchPhase::End, &[], &[]), None);
    }
}
